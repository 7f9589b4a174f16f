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
use crate::index::return_type_name;

/// Only types removed together with their entity set take function
/// imports down. Imports returning primitive or unknown types stay.
pub(super) fn filter(ctx: &mut FilterContext<'_>) {
    let nodes = ctx
        .index
        .sections()
        .find_in_containers(ctx.doc, ElementKind::FunctionImport)
        .into_iter()
        .filter(|import| {
            ctx.doc
                .attribute(*import, "ReturnType")
                .map(|return_type| return_type_name(&return_type))
                .is_some_and(|name| {
                    ctx.removed_entities.contains(&name) && !ctx.closure.contains(&name)
                })
        })
        .collect();
    ctx.remove_all(ElementKind::FunctionImport, nodes);
}
