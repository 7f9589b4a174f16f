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

//! Element lookup.
//!
//! Metadata documents found in the wild are not consistent about
//! namespaces: EDM elements may live in the default EDM namespace, in
//! no namespace at all or in some other namespace below
//! `edmx:DataServices`. Lookup tries `LookupStrategy::ORDERED` one by
//! one and the first strategy that finds anything wins.

use crate::document::Document;
use crate::document::NodeId;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Kinds of elements the filter works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    DataServices,
    Schema,
    EntityContainer,
    EntityType,
    NavigationProperty,
    Association,
    /// Association end.
    End,
    EntitySet,
    FunctionImport,
}

impl ElementKind {
    /// Local name of the element in EDMX.
    #[must_use]
    pub const fn local_name(self) -> &'static str {
        match self {
            Self::DataServices => "DataServices",
            Self::Schema => "Schema",
            Self::EntityContainer => "EntityContainer",
            Self::EntityType => "EntityType",
            Self::NavigationProperty => "NavigationProperty",
            Self::Association => "Association",
            Self::End => "End",
            Self::EntitySet => "EntitySet",
            Self::FunctionImport => "FunctionImport",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.local_name().fmt(f)
    }
}

/// Way to match elements of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Element is in the default EDM namespace of the document.
    Namespaced,
    /// Element is not in any namespace.
    Unqualified,
    /// Element is anywhere below `DataServices`, namespace is ignored.
    ContainerScoped,
}

impl LookupStrategy {
    /// Order in which strategies are tried.
    pub const ORDERED: [Self; 3] = [Self::Namespaced, Self::Unqualified, Self::ContainerScoped];

    /// Select elements of `kind` among `candidates` keeping their order.
    #[must_use]
    pub fn find(self, doc: &Document, kind: ElementKind, candidates: &[NodeId]) -> Vec<NodeId> {
        candidates
            .iter()
            .copied()
            .filter(|id| {
                doc.element(*id).is_some_and(|element| {
                    element.local_name() == kind.local_name()
                        && match self {
                            Self::Namespaced => {
                                element.namespace.as_deref() == Some(doc.default_namespace())
                            }
                            Self::Unqualified => element.namespace.is_none(),
                            Self::ContainerScoped => Self::below_data_services(doc, *id),
                        }
                })
            })
            .collect()
    }

    fn below_data_services(doc: &Document, id: NodeId) -> bool {
        let mut current = doc.parent(id);
        while let Some(parent) = current {
            if doc.element(parent).is_some_and(|element| {
                element.local_name() == ElementKind::DataServices.local_name()
            }) {
                return true;
            }
            current = doc.parent(parent);
        }
        false
    }
}
