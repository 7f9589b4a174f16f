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

use crate::document::Attribute;
use crate::document::Document;
use crate::document::Element;
use crate::document::Error;
use crate::document::Node;
use crate::document::NodeData;
use crate::document::NodeId;
use crate::document::DEFAULT_EDM_NAMESPACE;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace declarations of one element: prefix (empty for the
/// default namespace) to URI. Empty URI undeclares the default one.
type Scope = HashMap<String, String>;

pub(super) fn read(data: &str) -> Result<Document, Error> {
    let mut reader = Reader::from_str(data);
    let mut builder = Builder::default();
    loop {
        match reader.read_event().map_err(Error::Xml)? {
            Event::Start(e) => builder.open(&e)?,
            Event::Empty(e) => {
                builder.open(&e)?;
                builder.close()?;
            }
            Event::End(_) => builder.close()?,
            Event::Text(e) => builder.append(Node::Text(utf8(&e)?)),
            Event::GeneralRef(e) => builder.append(Node::Text(format!("&{};", utf8(&e)?))),
            Event::CData(e) => builder.append(Node::CData(utf8(&e)?)),
            Event::Comment(e) => builder.append(Node::Comment(utf8(&e)?)),
            Event::PI(e) => builder.append(Node::ProcessingInstruction(utf8(&e)?)),
            Event::DocType(e) => builder.append(Node::DocType(utf8(&e)?)),
            // Declaration is regenerated by the writer.
            Event::Decl(_) => {}
            Event::Eof => break,
        }
    }
    builder.finish()
}

fn utf8(bytes: &[u8]) -> Result<String, Error> {
    std::str::from_utf8(bytes)
        .map(ToString::to_string)
        .map_err(Error::Utf8)
}

#[derive(Default)]
struct Builder {
    nodes: Vec<NodeData>,
    top_level: Vec<NodeId>,
    root: Option<NodeId>,
    /// Open elements with namespaces declared on them.
    open: Vec<(NodeId, Scope)>,
    /// First default namespace declared in the document.
    first_default_namespace: Option<String>,
}

impl Builder {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), Error> {
        let name = utf8(e.name().as_ref())?;
        let attributes = e
            .attributes()
            .map(|attr| -> Result<Attribute, Error> {
                let attr = attr.map_err(Error::Attribute)?;
                Ok(Attribute {
                    key: utf8(attr.key.as_ref())?,
                    raw_value: utf8(&attr.value)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let scope = attributes
            .iter()
            .filter_map(|attr| {
                if attr.key == "xmlns" {
                    Some((String::new(), attr.raw_value.clone()))
                } else {
                    attr.key
                        .strip_prefix("xmlns:")
                        .map(|prefix| (prefix.to_string(), attr.raw_value.clone()))
                }
            })
            .collect::<Scope>();
        if self.first_default_namespace.is_none() {
            self.first_default_namespace = scope.get("").filter(|uri| !uri.is_empty()).cloned();
        }
        let prefix = name.rfind(':').map_or("", |pos| &name[..pos]);
        let namespace = self.resolve(prefix, &scope);
        if self.open.is_empty() && self.root.is_some() {
            return Err(Error::MultipleRootElements(name));
        }
        let id = self.push(Node::Element(Element {
            name,
            namespace,
            attributes,
            children: Vec::new(),
        }));
        if self.open.is_empty() {
            self.root = Some(id);
        }
        self.open.push((id, scope));
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        self.open.pop().map(|_| ()).ok_or(Error::UnexpectedEndTag)
    }

    /// Add non-element node to the currently open element.
    fn append(&mut self, node: Node) {
        // Whitespace between top-level nodes is regenerated by the writer.
        let top_level_whitespace =
            self.open.is_empty() && matches!(&node, Node::Text(text) if text.trim().is_empty());
        if !top_level_whitespace {
            self.push(node);
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let parent = self.open.last().map(|(parent, _)| *parent);
        match parent {
            Some(parent) => {
                if let Some(NodeData {
                    node: Node::Element(element),
                    ..
                }) = self.nodes.get_mut(*parent.inner())
                {
                    element.children.push(id);
                }
            }
            None => self.top_level.push(id),
        }
        self.nodes.push(NodeData { node, parent });
        id
    }

    fn resolve(&self, prefix: &str, own: &Scope) -> Option<String> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE.to_string());
        }
        std::iter::once(own)
            .chain(self.open.iter().rev().map(|(_, scope)| scope))
            .find_map(|scope| scope.get(prefix))
            .filter(|uri| !uri.is_empty())
            .cloned()
    }

    fn element_name(&self, id: NodeId) -> String {
        match self.nodes.get(*id.inner()).map(|data| &data.node) {
            Some(Node::Element(element)) => element.name.clone(),
            _ => String::new(),
        }
    }

    fn finish(self) -> Result<Document, Error> {
        if let Some((id, _)) = self.open.last() {
            return Err(Error::UnclosedElement(self.element_name(*id)));
        }
        let root = self.root.ok_or(Error::NoRootElement)?;
        Ok(Document {
            nodes: self.nodes,
            top_level: self.top_level,
            root,
            default_namespace: self
                .first_default_namespace
                .unwrap_or_else(|| DEFAULT_EDM_NAMESPACE.to_string()),
        })
    }
}
