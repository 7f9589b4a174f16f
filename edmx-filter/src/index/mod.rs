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

//! Schema index
//!
//! Lookup structures built once from a loaded document: entity types
//! with their navigation properties and associations with their ends,
//! all keyed by short names.

/// Index of entity types and associations
pub mod schema_index;

/// Sections of the document
pub mod sections;

/// Short names
pub mod short_name;

/// Index errors
pub mod error;

/// Reexport `Error` to the level of the index.
pub type Error = error::Error;
/// Reexport `SchemaIndex` to the level of the index.
pub type SchemaIndex = schema_index::SchemaIndex;
/// Reexport `Sections` to the level of the index.
pub type Sections = sections::Sections;
/// Reexport `ShortName` to the level of the index.
pub type ShortName = short_name::ShortName;

/// Reexport `short_name` to the level of the index.
pub use short_name::short_name;
/// Reexport `return_type_name` to the level of the index.
pub use short_name::return_type_name;
