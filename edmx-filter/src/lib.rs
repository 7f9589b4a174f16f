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

//! Referentially consistent pruning of OData (EDMX) metadata.
//!
//! Large service metadata documents are reduced to the entity types a
//! client needs. Requested types are extended by everything reachable
//! over navigation properties and then all entity sets, entity types,
//! associations, function imports and navigation properties that
//! would point outside of this closure are removed.
//!
//! ```no_run
//! use edmx_filter::document::Document;
//! use edmx_filter::filter::prune;
//! use edmx_filter::index::short_name;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::parse(&std::fs::read_to_string("metadata.xml")?)?;
//! let (closure, report) = prune(&mut doc, [short_name("Employee")])?;
//! println!("kept {} entity types, removed {}", closure.len(), report.total());
//! std::fs::write("filtered.xml", doc.to_xml()?)?;
//! # Ok(())
//! # }
//! ```

/// Navigation closure of requested entity types.
pub mod closure;
/// Command-line commands.
pub mod commands;
/// Mutable XML document.
pub mod document;
/// Crate errors.
pub mod error;
/// Cascading removal of elements outside of the closure.
pub mod filter;
/// Read-only index of the navigation graph.
pub mod index;
/// Logging setup.
pub mod logging;
/// Named groups of entity types.
pub mod profile;

/// Reexport `Error` to make it available through crate root.
pub type Error = error::Error;
/// Reexport `Closure` to make it available through crate root.
pub type Closure = closure::Closure;
/// Reexport `Document` to make it available through crate root.
pub type Document = document::Document;
