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

//! Mutable metadata document.
//!
//! The document is an arena of XML nodes addressed by `NodeId`. It
//! keeps everything the reader produced (raw attribute values, text,
//! comments, processing instructions) so that writing it back only
//! differs from the input by removed elements.
//!
//! Capabilities used by the filter:
//! - `find_elements`: all elements of a kind, optionally within a
//!   sub-tree, resolved through ordered `LookupStrategy` list.
//! - `attribute`: unescaped attribute value.
//! - `remove`: detach an element from its parent.

/// Error of reading or writing documents.
pub mod error;

/// Element kinds and lookup strategies.
pub mod lookup;

/// Building document from XML events.
mod reader;

/// Serialization of the document.
mod writer;

use quick_xml::escape::unescape;
use std::borrow::Cow;
use tagged_types::TaggedType;

/// Reexport `Error` to the level of the document.
pub type Error = error::Error;
/// Reexport `ElementKind` to the level of the document.
pub type ElementKind = lookup::ElementKind;
/// Reexport `LookupStrategy` to the level of the document.
pub type LookupStrategy = lookup::LookupStrategy;

/// Namespace assumed for EDM elements when the document doesn't
/// declare a default one.
pub const DEFAULT_EDM_NAMESPACE: &str = "http://schemas.microsoft.com/ado/2008/09/edm";

/// Handle of a node inside of the document arena.
pub type NodeId = TaggedType<usize, NodeIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display)]
#[capability(inner_access)]
pub enum NodeIdTag {}

/// Attribute as it appears in the source document.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Qualified attribute name (`m:HasStream`, `Name`).
    pub key: String,
    /// Escaped attribute value.
    pub raw_value: String,
}

/// XML element.
#[derive(Debug, Clone)]
pub struct Element {
    /// Qualified name as written in the source (`edmx:DataServices`).
    pub name: String,
    /// Namespace URI the element prefix resolves to.
    pub namespace: Option<String>,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Attached child nodes in source order.
    pub children: Vec<NodeId>,
}

impl Element {
    /// Name without namespace prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .rfind(':')
            .map_or(self.name.as_str(), |pos| &self.name[pos + 1..])
    }
}

/// Node of the document.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    /// Escaped character data.
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
    DocType(String),
}

#[derive(Debug)]
struct NodeData {
    node: Node,
    parent: Option<NodeId>,
}

/// Parsed metadata document.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    /// Top-level nodes: root element and comments, processing
    /// instructions and doctype around it.
    top_level: Vec<NodeId>,
    root: NodeId,
    default_namespace: String,
}

impl Document {
    /// Parse XML document.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not well-formed XML.
    pub fn parse(data: &str) -> Result<Self, Error> {
        reader::read(data)
    }

    /// Serialize document back to XML.
    ///
    /// # Errors
    ///
    /// Returns error if writer failed.
    pub fn to_xml(&self) -> Result<String, Error> {
        writer::write(self)
    }

    /// Root element of the document.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Namespace of EDM elements of this document.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Get node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(*id.inner()).map(|data| &data.node)
    }

    /// Get element by id. Returns `None` if node is not an element.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.node(id) {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Parent of the node. Detached nodes and the root don't have parent.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(*id.inner()).and_then(|data| data.parent)
    }

    /// Attached children of the node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id)
            .map_or(&[], |element| element.children.as_slice())
    }

    /// All element descendants of `scope` in document order. The scope
    /// itself is not included.
    #[must_use]
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = self.children(scope).iter().rev().copied().collect::<Vec<_>>();
        while let Some(id) = stack.pop() {
            if let Some(element) = self.element(id) {
                result.push(id);
                stack.extend(element.children.iter().rev().copied());
            }
        }
        result
    }

    /// Unescaped value of the unprefixed attribute `name`.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.element(id)?
            .attributes
            .iter()
            .find(|attr| attr.key == name)
            .map(|attr| {
                unescape(&attr.raw_value)
                    .map_or_else(|_| attr.raw_value.clone(), Cow::into_owned)
            })
    }

    /// Find all elements of the kind. See `LookupStrategy` for the
    /// order in which elements are searched.
    ///
    /// Without `scope` the whole document including the root element is
    /// searched; with `scope` only its descendants are.
    #[must_use]
    pub fn find_elements(&self, kind: ElementKind, scope: Option<NodeId>) -> Vec<NodeId> {
        let candidates = scope.map_or_else(
            || {
                std::iter::once(self.root)
                    .chain(self.descendants(self.root))
                    .collect()
            },
            |scope| self.descendants(scope),
        );
        LookupStrategy::ORDERED
            .iter()
            .map(|strategy| strategy.find(self, kind, &candidates))
            .find(|found| !found.is_empty())
            .unwrap_or_default()
    }

    /// Detach element from its parent.
    ///
    /// Whitespace-only text right before the element is detached
    /// together with it. Returns `false` if the node has no parent
    /// (root or already removed).
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        let Some(pos) = self.children(parent).iter().position(|child| *child == id) else {
            return false;
        };
        let leading_whitespace = pos
            .checked_sub(1)
            .map(|prev| self.children(parent)[prev])
            .filter(|prev| matches!(self.node(*prev), Some(Node::Text(text)) if text.trim().is_empty()));
        let Some(parent_element) = self.element_mut(parent) else {
            return false;
        };
        parent_element.children.remove(pos);
        if leading_whitespace.is_some() {
            parent_element.children.remove(pos - 1);
        }
        for node in std::iter::once(id).chain(leading_whitespace) {
            if let Some(data) = self.nodes.get_mut(*node.inner()) {
                data.parent = None;
            }
        }
        true
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(*id.inner()).map(|data| &mut data.node) {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    }
}
