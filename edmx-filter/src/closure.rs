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

//! Navigation closure
//!
//! Set of entity types that must be kept so that every navigation
//! property of a kept type still points to a kept type. Starting from
//! requested types, the closure follows navigation properties through
//! associations until no new type is found. Cycles (bidirectional
//! navigation) are normal and visited once.

use crate::index::SchemaIndex;
use crate::index::ShortName;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::collections::VecDeque;
use tracing::debug;
use tracing::warn;

/// Entity types to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    requested: BTreeSet<ShortName>,
    entities: BTreeSet<ShortName>,
}

impl Closure {
    /// Compute closure of `requested` entity types over the navigation
    /// graph of the index.
    ///
    /// Requested names that don't exist in the index stay in the
    /// closure; they just don't bring any dependencies.
    #[must_use]
    pub fn compute<I>(requested: I, index: &SchemaIndex) -> Self
    where
        I: IntoIterator<Item = ShortName>,
    {
        let requested = requested.into_iter().collect::<BTreeSet<_>>();
        for name in &requested {
            if index.entity_type(name).is_none() {
                warn!(entity_type = %name, "requested entity type is not defined in the document");
            }
        }
        let mut entities = requested.clone();
        let mut worklist = requested.iter().cloned().collect::<VecDeque<_>>();
        let mut processed = HashSet::new();
        while let Some(current) = worklist.pop_front() {
            if !processed.insert(current.clone()) {
                continue;
            }
            for neighbor in index.neighbors(&current) {
                if entities.insert(neighbor.clone()) {
                    debug!(entity_type = %neighbor, from = %current, "dependency added");
                    worklist.push_back(neighbor.clone());
                }
            }
        }
        Self {
            requested,
            entities,
        }
    }

    /// Entity types requested by the caller.
    #[must_use]
    pub const fn requested(&self) -> &BTreeSet<ShortName> {
        &self.requested
    }

    /// All entity types to keep, including requested.
    #[must_use]
    pub const fn entities(&self) -> &BTreeSet<ShortName> {
        &self.entities
    }

    /// Entity types that were added because they are reachable from
    /// requested ones.
    pub fn dependencies(&self) -> impl Iterator<Item = &ShortName> {
        self.entities.difference(&self.requested)
    }

    /// Check if entity type is kept.
    #[must_use]
    pub fn contains(&self, name: &ShortName) -> bool {
        self.entities.contains(name)
    }

    /// Number of kept entity types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Closure is only empty if nothing was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
