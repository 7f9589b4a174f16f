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
use crate::index::short_name;
use crate::index::Error;
use crate::index::Sections;
use crate::index::ShortName;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use tracing::debug;

/// Indexed `EntityType` element.
#[derive(Debug)]
pub struct EntityType {
    /// Every definition with this short name in document order.
    pub nodes: Vec<NodeId>,
    /// Short names of associations behind navigation properties, in
    /// document order.
    pub relationships: Vec<ShortName>,
}

/// Indexed `Association` element.
#[derive(Debug)]
pub struct Association {
    /// Short entity type names of association ends.
    pub ends: Vec<ShortName>,
}

/// Read-only view of the navigation graph of a document.
///
/// All names are short names. If the same short name is defined more
/// than once (several schemas), navigation of the first definition in
/// document order is indexed. Elements of all entity type definitions
/// are kept so that they can be removed together.
#[derive(Debug)]
pub struct SchemaIndex {
    sections: Sections,
    entity_types: BTreeMap<ShortName, EntityType>,
    associations: BTreeMap<ShortName, Association>,
}

impl SchemaIndex {
    /// Build an index of the document.
    ///
    /// # Errors
    ///
    /// Returns error if container or schema section cannot be located.
    pub fn build(doc: &Document) -> Result<Self, Error> {
        let sections = Sections::locate(doc)?;
        let entity_types = doc
            .find_elements(ElementKind::EntityType, None)
            .into_iter()
            .filter_map(|node| {
                doc.attribute(node, "Name").map(|name| {
                    let relationships = doc
                        .find_elements(ElementKind::NavigationProperty, Some(node))
                        .into_iter()
                        .filter_map(|nav| doc.attribute(nav, "Relationship"))
                        .map(|relationship| short_name(&relationship))
                        .collect();
                    (
                        short_name(&name),
                        EntityType {
                            nodes: vec![node],
                            relationships,
                        },
                    )
                })
            })
            .fold(BTreeMap::new(), first_wins);
        let associations = doc
            .find_elements(ElementKind::Association, None)
            .into_iter()
            .filter_map(|node| {
                doc.attribute(node, "Name").map(|name| {
                    let ends = doc
                        .find_elements(ElementKind::End, Some(node))
                        .into_iter()
                        .filter_map(|end| doc.attribute(end, "Type"))
                        .map(|end_type| short_name(&end_type))
                        .collect();
                    (short_name(&name), Association { ends })
                })
            })
            .fold(BTreeMap::new(), first_wins);
        debug!(
            entity_types = entity_types.len(),
            associations = associations.len(),
            "schema index built"
        );
        Ok(Self {
            sections,
            entity_types,
            associations,
        })
    }

    /// Sections of the indexed document.
    #[must_use]
    pub const fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Find an entity type by its short name.
    #[must_use]
    pub fn entity_type(&self, name: &ShortName) -> Option<&EntityType> {
        self.entity_types.get(name)
    }

    /// All indexed entity types ordered by name.
    pub fn entity_types(&self) -> impl Iterator<Item = (&ShortName, &EntityType)> {
        self.entity_types.iter()
    }

    /// All indexed associations ordered by name.
    pub fn associations(&self) -> impl Iterator<Item = (&ShortName, &Association)> {
        self.associations.iter()
    }

    /// Entity types reachable from `name` over one navigation
    /// property. The type itself is never its own neighbor.
    /// Relationships that don't resolve contribute nothing.
    #[must_use]
    pub fn neighbors(&self, name: &ShortName) -> BTreeSet<&ShortName> {
        self.entity_types
            .get(name)
            .map(|et| {
                et.relationships
                    .iter()
                    .filter_map(|relationship| {
                        let association = self.associations.get(relationship);
                        if association.is_none() {
                            debug!(
                                entity_type = %name,
                                relationship = %relationship,
                                "relationship does not resolve to an association"
                            );
                        }
                        association
                    })
                    .flat_map(|association| association.ends.iter())
                    .filter(|end| *end != name)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Indexed definition that may be repeated under the same short name.
trait Definition {
    /// Account a later definition of the same short name.
    fn duplicate(&mut self, _later: Self)
    where
        Self: Sized,
    {
    }
}

impl Definition for EntityType {
    fn duplicate(&mut self, later: Self) {
        self.nodes.extend(later.nodes);
    }
}

impl Definition for Association {}

fn first_wins<V: Definition>(
    mut map: BTreeMap<ShortName, V>,
    (name, value): (ShortName, V),
) -> BTreeMap<ShortName, V> {
    match map.entry(name) {
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
        Entry::Occupied(mut entry) => {
            debug!(name = %entry.key(), "duplicate definition, first one is indexed");
            entry.get_mut().duplicate(value);
        }
    }
    map
}
