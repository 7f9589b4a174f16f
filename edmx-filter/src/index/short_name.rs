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

use tagged_types::TaggedType;

/// Unqualified name of an entity type or association.
///
/// References in metadata may be qualified with schema namespace
/// (`SAP.Order`) or alias. Identity only depends on the last segment,
/// so all references are reduced to it once, when the index is built.
pub type ShortName = TaggedType<String, ShortNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display)]
#[capability(inner_access)]
pub enum ShortNameTag {}

const COLLECTION_PREFIX: &str = "Collection(";

/// Short name of a possibly qualified reference.
#[must_use]
pub fn short_name(reference: &str) -> ShortName {
    let reference = reference.trim();
    ShortName::new(
        reference
            .rfind('.')
            .map_or(reference, |pos| &reference[pos + 1..])
            .to_string(),
    )
}

/// Short name of the type referenced by a function import return type.
/// `Collection(NS.Type)` is unwrapped to `Type`.
#[must_use]
pub fn return_type_name(return_type: &str) -> ShortName {
    let return_type = return_type.trim();
    short_name(
        return_type
            .strip_prefix(COLLECTION_PREFIX)
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(return_type),
    )
}
