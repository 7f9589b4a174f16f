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
use crate::document::ElementKind;
use crate::document::NodeId;
use crate::index::Error;

/// Sections of the document that are subject to filtering.
///
/// Types and associations are removed from schemas, entity sets and
/// function imports from entity containers. Both must be present.
#[derive(Debug, Clone)]
pub struct Sections {
    containers: Vec<NodeId>,
    schemas: Vec<NodeId>,
}

impl Sections {
    /// Locate sections in the document.
    ///
    /// # Errors
    ///
    /// - `Error::ContainerNotFound` if there is no `EntityContainer`
    /// - `Error::SchemaNotFound` if there is no `Schema`
    pub fn locate(doc: &Document) -> Result<Self, Error> {
        let containers = doc.find_elements(ElementKind::EntityContainer, None);
        if containers.is_empty() {
            return Err(Error::ContainerNotFound);
        }
        let schemas = doc.find_elements(ElementKind::Schema, None);
        if schemas.is_empty() {
            return Err(Error::SchemaNotFound);
        }
        Ok(Self {
            containers,
            schemas,
        })
    }

    /// Find elements of the kind in every schema.
    #[must_use]
    pub fn find_in_schemas(&self, doc: &Document, kind: ElementKind) -> Vec<NodeId> {
        Self::find_in(doc, kind, &self.schemas)
    }

    /// Find elements of the kind in every entity container.
    #[must_use]
    pub fn find_in_containers(&self, doc: &Document, kind: ElementKind) -> Vec<NodeId> {
        Self::find_in(doc, kind, &self.containers)
    }

    fn find_in(doc: &Document, kind: ElementKind, scopes: &[NodeId]) -> Vec<NodeId> {
        scopes
            .iter()
            .flat_map(|scope| doc.find_elements(kind, Some(*scope)))
            .collect()
    }
}
