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

//! Integration tests of filtering HR service metadata.

use edmx_filter::document::Document;
use edmx_filter::document::ElementKind;
use edmx_filter::filter::prune;
use edmx_filter::filter::FilterReport;
use edmx_filter::Closure;
use edmx_filter_tests::check_references;
use edmx_filter_tests::load;
use edmx_filter_tests::names_of;
use edmx_filter_tests::short_names;
use edmx_filter_tests::HR;
use std::error::Error as StdError;

fn prune_hr(requested: &[&str]) -> Result<(Document, Closure, FilterReport), Box<dyn StdError>> {
    let mut doc = load(HR)?;
    let (closure, report) = prune(&mut doc, short_names(requested))?;
    Ok((doc, closure, report))
}

fn names(closure_part: impl IntoIterator<Item = impl ToString>) -> Vec<String> {
    closure_part.into_iter().map(|v| v.to_string()).collect()
}

#[test]
fn user_keeps_employment_chain() -> Result<(), Box<dyn StdError>> {
    let (doc, closure, report) = prune_hr(&["User"])?;
    assert_eq!(names(closure.requested()), vec!["User"]);
    assert_eq!(
        names(closure.dependencies()),
        vec!["EmpEmployment", "EmpJob", "Position"]
    );
    assert_eq!(
        names_of(&doc, ElementKind::EntityType),
        vec!["User", "EmpEmployment", "EmpJob", "Position"]
    );
    assert_eq!(
        names_of(&doc, ElementKind::EntitySet),
        vec!["User", "EmpEmployment", "EmpJob", "Position"]
    );
    assert_eq!(
        names_of(&doc, ElementKind::Association),
        vec![
            "User_EmpEmployment",
            "User_Manager",
            "EmpEmployment_EmpJob",
            "EmpJob_Position",
            "Position_Parent"
        ]
    );
    assert_eq!(report.entity_sets, 4);
    assert_eq!(report.entity_types, 5);
    assert_eq!(report.associations, 3);
    assert_eq!(report.function_imports, 2);
    assert_eq!(report.navigation_properties, 0);
    assert_eq!(
        names(&report.removed_entities),
        vec!["Benefit", "BenefitEnrollment", "Department", "Photo"]
    );
    check_references(&doc)?;
    Ok(())
}

#[test]
fn function_imports_follow_removed_entity_sets() -> Result<(), Box<dyn StdError>> {
    let (doc, _, _) = prune_hr(&["User"])?;
    // AuditLog type is gone but it never had an entity set, so the
    // import returning it stays.
    assert_eq!(
        names_of(&doc, ElementKind::FunctionImport),
        vec!["getCurrentUser", "getAuditLog", "ping", "refreshCache"]
    );
    Ok(())
}

#[test]
fn leaf_entity_keeps_only_itself() -> Result<(), Box<dyn StdError>> {
    let (doc, closure, report) = prune_hr(&["Position"])?;
    assert_eq!(closure.len(), 1);
    assert_eq!(names_of(&doc, ElementKind::EntityType), vec!["Position"]);
    assert_eq!(names_of(&doc, ElementKind::Association), vec!["Position_Parent"]);
    assert_eq!(
        names_of(&doc, ElementKind::NavigationProperty),
        vec!["parentPosition"]
    );
    assert_eq!(
        names_of(&doc, ElementKind::FunctionImport),
        vec!["getAuditLog", "ping", "refreshCache"]
    );
    assert_eq!(report.entity_sets, 7);
    assert_eq!(report.entity_types, 8);
    assert_eq!(report.associations, 7);
    assert_eq!(report.function_imports, 3);
    check_references(&doc)?;
    Ok(())
}

#[test]
fn bidirectional_navigation_brings_both_sides() -> Result<(), Box<dyn StdError>> {
    let (doc, closure, _) = prune_hr(&["BenefitEnrollment"])?;
    assert_eq!(
        names(closure.entities()),
        vec![
            "Benefit",
            "BenefitEnrollment",
            "EmpEmployment",
            "EmpJob",
            "Position",
            "User"
        ]
    );
    assert_eq!(
        names_of(&doc, ElementKind::FunctionImport),
        vec![
            "getEligibleBenefits",
            "getCurrentUser",
            "getAuditLog",
            "ping",
            "refreshCache"
        ]
    );
    check_references(&doc)?;
    Ok(())
}

#[test]
fn qualified_requests_match_short_names() -> Result<(), Box<dyn StdError>> {
    let (_, qualified, _) = prune_hr(&["SFOData.User"])?;
    let (_, plain, _) = prune_hr(&["User"])?;
    assert_eq!(qualified, plain);
    Ok(())
}

#[test]
fn unknown_requested_type_removes_everything_else() -> Result<(), Box<dyn StdError>> {
    let (doc, closure, report) = prune_hr(&["Nobody"])?;
    assert_eq!(names(closure.entities()), vec!["Nobody"]);
    assert!(names_of(&doc, ElementKind::EntityType).is_empty());
    assert!(names_of(&doc, ElementKind::EntitySet).is_empty());
    assert!(names_of(&doc, ElementKind::Association).is_empty());
    assert_eq!(report.entity_types, 9);
    // Untouched parts of the schema survive.
    assert_eq!(doc.find_elements(ElementKind::Schema, None).len(), 1);
    assert!(doc.to_xml()?.contains(r#"<ComplexType Name="Address">"#));
    check_references(&doc)?;
    Ok(())
}

#[test]
fn filtered_output_is_stable() -> Result<(), Box<dyn StdError>> {
    let (doc, _, _) = prune_hr(&["User"])?;
    let first = doc.to_xml()?;
    let mut reparsed = Document::parse(&first)?;
    let (_, report) = prune(&mut reparsed, short_names(&["User"]))?;
    assert!(report.is_empty());
    assert_eq!(reparsed.to_xml()?, first);
    Ok(())
}

#[test]
fn output_keeps_untouched_markup() -> Result<(), Box<dyn StdError>> {
    let (doc, _, _) = prune_hr(&["User"])?;
    let xml = doc.to_xml()?;
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(xml.contains("<!-- People -->"));
    assert!(xml.contains(r#"sap:label="Job Title &amp; Grade""#));
    assert!(xml.contains(r#"sap:creatable="false""#));
    // Comments are kept even if they name removed types.
    assert!(xml.contains("<!-- Benefits -->"));
    assert!(!xml.contains(r#"Name="Benefit"#));
    assert!(!xml.contains("SFOData.Benefit"));
    Ok(())
}

#[test]
fn closure_properties_hold_on_real_metadata() -> Result<(), Box<dyn StdError>> {
    let doc = load(HR)?;
    let index = edmx_filter::index::SchemaIndex::build(&doc)?;
    let all = index
        .entity_types()
        .map(|(name, _)| name.clone())
        .collect::<Vec<_>>();
    for (pos, name) in all.iter().enumerate() {
        let single = Closure::compute([name.clone()], &index);
        // Idempotence.
        let again = Closure::compute(single.entities().iter().cloned(), &index);
        assert_eq!(single.entities(), again.entities());
        // Monotonicity.
        let wider = Closure::compute(all[..=pos].iter().cloned(), &index);
        assert!(single.entities().is_subset(wider.entities()));
    }
    Ok(())
}
