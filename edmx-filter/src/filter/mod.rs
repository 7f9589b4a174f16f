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

//! Cascading filter
//!
//! Applies a computed `Closure` to the document. Passes run in fixed
//! order:
//! 1. entity sets of types outside of the closure;
//! 2. entity types outside of the closure;
//! 3. associations with at least one end outside of the closure;
//! 4. function imports returning types removed in pass 1;
//! 5. navigation properties whose association was removed.
//!
//! Passes 1-4 decide only by closure membership (and the set of types
//! removed in pass 1). Pass 5 reads the document as pass 3 left it.

mod associations;
mod entity_sets;
mod entity_types;
mod function_imports;
mod navigation_properties;

/// Result of filtering
pub mod report;

use crate::closure::Closure;
use crate::document::Document;
use crate::document::ElementKind;
use crate::document::NodeId;
use crate::index::Error as IndexError;
use crate::index::SchemaIndex;
use crate::index::ShortName;
use std::collections::BTreeSet;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// Reexport `FilterReport` to the level of the filter.
pub type FilterReport = report::FilterReport;

/// State shared by filter passes.
pub struct FilterContext<'a> {
    pub doc: &'a mut Document,
    pub index: &'a SchemaIndex,
    pub closure: &'a Closure,
    /// Types of removed entity sets.
    pub removed_entities: BTreeSet<ShortName>,
    pub report: FilterReport,
}

impl FilterContext<'_> {
    /// Remove all `nodes` of the `kind` and account them in the report.
    fn remove_all(&mut self, kind: ElementKind, nodes: Vec<NodeId>) {
        let removed = nodes
            .into_iter()
            .filter(|node| {
                let removed = self.doc.remove(*node);
                if removed {
                    debug!(
                        kind = %kind,
                        name = self.doc.attribute(*node, "Name").as_deref().unwrap_or_default(),
                        "removed"
                    );
                }
                removed
            })
            .count();
        info!(kind = %kind, removed, "filter pass done");
        self.report.add_removed(kind, removed);
    }
}

type Pass = fn(&mut FilterContext<'_>);

/// Filter passes in the order they must run.
const PASSES: [Pass; 5] = [
    entity_sets::filter,
    entity_types::filter,
    associations::filter,
    function_imports::filter,
    navigation_properties::filter,
];

/// Remove every element that doesn't survive `closure`.
#[must_use]
pub fn apply(doc: &mut Document, index: &SchemaIndex, closure: &Closure) -> FilterReport {
    if closure.is_empty() {
        warn!("empty closure, every entity type is removed");
    }
    let mut ctx = FilterContext {
        doc,
        index,
        closure,
        removed_entities: BTreeSet::new(),
        report: FilterReport::default(),
    };
    PASSES.iter().for_each(|pass| pass(&mut ctx));
    let mut report = ctx.report;
    report.removed_entities = ctx.removed_entities;
    report
}

/// Full pipeline: index the document, compute closure of `requested`
/// and apply it.
///
/// # Errors
///
/// Returns error if container or schema cannot be located. The
/// document is not modified in this case.
pub fn prune<I>(doc: &mut Document, requested: I) -> Result<(Closure, FilterReport), IndexError>
where
    I: IntoIterator<Item = ShortName>,
{
    let index = SchemaIndex::build(doc)?;
    let closure = Closure::compute(requested, &index);
    info!(
        requested = closure.requested().len(),
        kept = closure.len(),
        "navigation closure computed"
    );
    let report = apply(doc, &index, &closure);
    Ok((closure, report))
}
