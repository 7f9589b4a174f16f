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

//! Integration tests of documents with unusual layout: no namespaces,
//! EDM elements in a vendor namespace and split schemas.

use edmx_filter::document::ElementKind;
use edmx_filter::filter::prune;
use edmx_filter::index::Error as IndexError;
use edmx_filter_tests::check_references;
use edmx_filter_tests::load;
use edmx_filter_tests::names_of;
use edmx_filter_tests::short_names;
use edmx_filter_tests::PREFIXED;
use edmx_filter_tests::SPLIT;
use edmx_filter_tests::UNQUALIFIED;
use std::error::Error as StdError;

#[test]
fn unqualified_document() -> Result<(), Box<dyn StdError>> {
    let mut doc = load(UNQUALIFIED)?;
    let (closure, report) = prune(&mut doc, short_names(&["Book"]))?;
    assert_eq!(closure.len(), 2);
    assert_eq!(names_of(&doc, ElementKind::EntityType), vec!["Book", "Author"]);
    assert_eq!(names_of(&doc, ElementKind::EntitySet), vec!["Books", "Authors"]);
    assert_eq!(names_of(&doc, ElementKind::Association), vec!["Book_Author"]);
    assert!(names_of(&doc, ElementKind::FunctionImport).is_empty());
    assert_eq!(report.total(), 4);
    check_references(&doc)?;
    Ok(())
}

#[test]
fn unqualified_navigation_is_followed() -> Result<(), Box<dyn StdError>> {
    let mut doc = load(UNQUALIFIED)?;
    let (closure, report) = prune(&mut doc, short_names(&["Loan"]))?;
    assert_eq!(closure.len(), 3);
    assert!(report.is_empty());
    Ok(())
}

#[test]
fn vendor_namespace_below_data_services() -> Result<(), Box<dyn StdError>> {
    let mut doc = load(PREFIXED)?;
    let (closure, report) = prune(&mut doc, short_names(&["Vehicle"]))?;
    assert_eq!(closure.len(), 2);
    assert_eq!(
        names_of(&doc, ElementKind::EntityType),
        vec!["Vehicle", "Driver"]
    );
    assert_eq!(
        names_of(&doc, ElementKind::EntitySet),
        vec!["Vehicles", "Drivers"]
    );
    assert_eq!(report.entity_sets, 1);
    assert_eq!(report.entity_types, 1);
    let xml = doc.to_xml()?;
    assert!(xml.contains(r#"<edm:EntityType Name="Driver"/>"#));
    assert!(!xml.contains("Depot"));
    Ok(())
}

#[test]
fn types_and_container_in_different_schemas() -> Result<(), Box<dyn StdError>> {
    let mut doc = load(SPLIT)?;
    let (closure, report) = prune(&mut doc, short_names(&["Sales.Model.Line"]))?;
    assert_eq!(closure.len(), 2);
    assert_eq!(names_of(&doc, ElementKind::EntityType), vec!["Invoice", "Line"]);
    assert_eq!(
        names_of(&doc, ElementKind::EntitySet),
        vec!["Invoices", "Lines"]
    );
    assert!(names_of(&doc, ElementKind::FunctionImport).is_empty());
    assert_eq!(report.entity_sets, 1);
    assert_eq!(report.entity_types, 1);
    assert_eq!(report.function_imports, 1);
    assert_eq!(doc.find_elements(ElementKind::Schema, None).len(), 2);
    check_references(&doc)?;
    Ok(())
}

#[test]
fn document_without_container_is_rejected() -> Result<(), Box<dyn StdError>> {
    let mut doc = edmx_filter::Document::parse(
        r#"<edmx:Edmx xmlns:edmx="http://schemas.microsoft.com/ado/2007/06/edmx">
             <edmx:DataServices>
               <Schema Namespace="A" xmlns="http://schemas.microsoft.com/ado/2008/09/edm">
                 <EntityType Name="X"/>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#,
    )?;
    assert_eq!(
        prune(&mut doc, short_names(&["X"])).unwrap_err(),
        IndexError::ContainerNotFound
    );
    assert_eq!(names_of(&doc, ElementKind::EntityType), vec!["X"]);
    Ok(())
}
