// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::document::Document;
use crate::document::Element;
use crate::document::Error;
use crate::document::Node;
use crate::document::NodeId;
use quick_xml::events::BytesCData;
use quick_xml::events::BytesDecl;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesPI;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Writer;

pub(super) fn write(doc: &Document) -> Result<String, Error> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(Error::Write)?;
    for id in &doc.top_level {
        writer
            .write_event(Event::Text(BytesText::from_escaped("\n")))
            .map_err(Error::Write)?;
        write_node(doc, *id, &mut writer)?;
    }
    writer
        .write_event(Event::Text(BytesText::from_escaped("\n")))
        .map_err(Error::Write)?;
    String::from_utf8(writer.into_inner()).map_err(Error::WriteUtf8)
}

fn write_node(doc: &Document, id: NodeId, writer: &mut Writer<Vec<u8>>) -> Result<(), Error> {
    let event = match doc.node(id) {
        Some(Node::Element(element)) => return write_element(doc, element, writer),
        Some(Node::Text(text)) => Event::Text(BytesText::from_escaped(text.as_str())),
        Some(Node::CData(text)) => Event::CData(BytesCData::new(text.as_str())),
        Some(Node::Comment(text)) => Event::Comment(BytesText::from_escaped(text.as_str())),
        Some(Node::ProcessingInstruction(text)) => Event::PI(BytesPI::new(text.as_str())),
        Some(Node::DocType(text)) => Event::DocType(BytesText::from_escaped(text.as_str())),
        None => return Ok(()),
    };
    writer.write_event(event).map_err(Error::Write)
}

fn write_element(
    doc: &Document,
    element: &Element,
    writer: &mut Writer<Vec<u8>>,
) -> Result<(), Error> {
    // Attribute values are kept escaped, so the start tag is assembled
    // from raw content instead of `push_attribute`.
    let content = element
        .attributes
        .iter()
        .fold(element.name.clone(), |mut content, attr| {
            content.push(' ');
            content.push_str(&attr.key);
            content.push_str("=\"");
            content.push_str(&attr.raw_value.replace('"', "&quot;"));
            content.push('"');
            content
        });
    let start = BytesStart::from_content(content, element.name.len());
    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(Error::Write);
    }
    writer.write_event(Event::Start(start)).map_err(Error::Write)?;
    element
        .children
        .iter()
        .try_for_each(|child| write_node(doc, *child, writer))?;
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(Error::Write)
}
