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

/// Remove every definition of entity types outside of the closure.
pub(super) fn filter(ctx: &mut FilterContext<'_>) {
    let nodes = ctx
        .index
        .entity_types()
        .filter(|(name, _)| !ctx.closure.contains(name))
        .flat_map(|(_, entity_type)| entity_type.nodes.iter().copied())
        .collect();
    ctx.remove_all(ElementKind::EntityType, nodes);
}
