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

//! Integration tests of command-line commands.

use edmx_filter::commands::process_command;
use edmx_filter::commands::Commands;
use edmx_filter::commands::EntitySelection;
use edmx_filter::document::ElementKind;
use edmx_filter::Document;
use edmx_filter::Error;
use edmx_filter_tests::data_path;
use edmx_filter_tests::names_of;
use edmx_filter_tests::HR;
use edmx_filter_tests::PROFILES;
use std::error::Error as StdError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn entities(names: &[&str]) -> EntitySelection {
    EntitySelection {
        entities: names.iter().map(ToString::to_string).collect(),
        ..EntitySelection::default()
    }
}

fn profiles(names: &[&str]) -> EntitySelection {
    EntitySelection {
        profile: Some(data_path(PROFILES)),
        features: names.iter().map(ToString::to_string).collect(),
        ..EntitySelection::default()
    }
}

fn filter(output: PathBuf, selection: EntitySelection, dry_run: bool) -> Commands {
    Commands::Filter {
        input: data_path(HR),
        output,
        selection,
        dry_run,
    }
}

#[test]
fn filter_writes_output() -> Result<(), Box<dyn StdError>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("filtered.xml");
    let lines = process_command(&filter(output.clone(), entities(&["User"]), false))?;
    assert_eq!(
        lines.last().map(String::as_str),
        Some(format!("{} file has been written", output.display()).as_str())
    );
    assert!(lines.contains(&"Kept entity types: 4".to_string()));
    assert!(lines.contains(&"Removed entity types: 5".to_string()));
    assert!(lines.contains(&"Removed entities: Benefit, BenefitEnrollment, Department, Photo".to_string()));
    let doc = Document::parse(&fs::read_to_string(&output)?)?;
    assert_eq!(
        names_of(&doc, ElementKind::EntityType),
        vec!["User", "EmpEmployment", "EmpJob", "Position"]
    );
    Ok(())
}

#[test]
fn dry_run_does_not_write_output() -> Result<(), Box<dyn StdError>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("filtered.xml");
    let lines = process_command(&filter(output.clone(), entities(&["User"]), true))?;
    assert!(lines.contains(&"Removed entity sets: 4".to_string()));
    assert!(lines
        .last()
        .is_some_and(|line| line.starts_with("Dry run:")));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn closure_lists_requested_and_dependencies() -> Result<(), Box<dyn StdError>> {
    let lines = process_command(&Commands::Closure {
        input: data_path(HR),
        selection: entities(&["SFOData.User"]),
    })?;
    assert_eq!(
        lines,
        vec![
            "Requested entity types: 1",
            "  - User",
            "Dependencies: 3",
            "  - EmpEmployment",
            "  - EmpJob",
            "  - Position",
            "Kept entity types: 4",
        ]
    );
    Ok(())
}

#[test]
fn profiles_add_requested_entities() -> Result<(), Box<dyn StdError>> {
    let lines = process_command(&Commands::Closure {
        input: data_path(HR),
        selection: profiles(&["hr", "benefits"]),
    })?;
    assert_eq!(lines[0], "Requested entity types: 3");
    assert_eq!(lines.last().map(String::as_str), Some("Kept entity types: 6"));
    Ok(())
}

#[test]
fn unknown_profile_is_rejected() {
    let result = process_command(&Commands::Closure {
        input: data_path(HR),
        selection: profiles(&["payroll"]),
    });
    assert!(matches!(result, Err(Error::UnknownProfile(name)) if name == "payroll"));
}

#[test]
fn empty_request_is_rejected() -> Result<(), Box<dyn StdError>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("filtered.xml");
    let result = process_command(&filter(output.clone(), entities(&[]), false));
    assert!(matches!(result, Err(Error::NoEntitiesRequested)));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn broken_input_is_reported_with_file_name() -> Result<(), Box<dyn StdError>> {
    let dir = TempDir::new()?;
    let input = dir.path().join("broken.xml");
    fs::write(&input, "<edmx:Edmx><Schema></edmx:Edmx>")?;
    let result = process_command(&Commands::Closure {
        input: input.clone(),
        selection: entities(&["User"]),
    });
    assert!(matches!(result, Err(Error::Document(fname, _)) if fname == input));

    let missing = dir.path().join("missing.xml");
    let result = process_command(&Commands::Closure {
        input: missing.clone(),
        selection: entities(&["User"]),
    });
    assert!(matches!(result, Err(Error::Io(fname, _)) if fname == missing));
    Ok(())
}
