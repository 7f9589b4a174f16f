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
use crate::filter::FilterContext;
use crate::index::short_name;

/// Remove entity sets of types outside of the closure and remember
/// their types. Sets without `EntityType` stay.
pub(super) fn filter(ctx: &mut FilterContext<'_>) {
    let mut nodes = Vec::new();
    for set in ctx.index.sections().find_in_containers(ctx.doc, ElementKind::EntitySet) {
        let Some(entity_type) = ctx.doc.attribute(set, "EntityType") else {
            continue;
        };
        let entity_type = short_name(&entity_type);
        if !ctx.closure.contains(&entity_type) {
            ctx.removed_entities.insert(entity_type);
            nodes.push(set);
        }
    }
    ctx.remove_all(ElementKind::EntitySet, nodes);
}
