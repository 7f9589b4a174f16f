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

use crate::document::ElementKind;
use crate::index::ShortName;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Maximum number of removed entity types listed in the summary.
const MAX_LISTED: usize = 10;

/// Number of removed elements per kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub entity_sets: usize,
    pub entity_types: usize,
    pub associations: usize,
    pub function_imports: usize,
    pub navigation_properties: usize,
    /// Entity types of removed entity sets.
    pub removed_entities: BTreeSet<ShortName>,
}

impl FilterReport {
    /// Account `n` removed elements of `kind`. Kinds that are never
    /// removed directly are ignored.
    pub fn add_removed(&mut self, kind: ElementKind, n: usize) {
        match kind {
            ElementKind::EntitySet => self.entity_sets += n,
            ElementKind::EntityType => self.entity_types += n,
            ElementKind::Association => self.associations += n,
            ElementKind::FunctionImport => self.function_imports += n,
            ElementKind::NavigationProperty => self.navigation_properties += n,
            ElementKind::DataServices
            | ElementKind::Schema
            | ElementKind::EntityContainer
            | ElementKind::End => (),
        }
    }

    /// Total number of removed elements.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.entity_sets
            + self.entity_types
            + self.associations
            + self.function_imports
            + self.navigation_properties
    }

    /// True if nothing was removed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Human readable summary lines.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Removed entity sets: {}", self.entity_sets),
            format!("Removed entity types: {}", self.entity_types),
            format!("Removed associations: {}", self.associations),
            format!("Removed function imports: {}", self.function_imports),
            format!(
                "Removed navigation properties: {}",
                self.navigation_properties
            ),
        ];
        if !self.removed_entities.is_empty() {
            let listed = self
                .removed_entities
                .iter()
                .take(MAX_LISTED)
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let more = self.removed_entities.len().saturating_sub(MAX_LISTED);
            lines.push(if more > 0 {
                format!("Removed entities: {listed} (and {more} more)")
            } else {
                format!("Removed entities: {listed}")
            });
        }
        lines
    }
}

impl Display for FilterReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.summary().join("\n"))
    }
}
