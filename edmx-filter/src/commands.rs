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

//! Command-line entry points of the filter
//!
//! Provides two subcommands:
//! - `Filter`: compute closure of requested entity types, remove
//!   everything outside of it and write the pruned document.
//! - `Closure`: only compute and print the closure.
//!
//! Entity types are requested on the command line, through named
//! profiles of a profile manifest or both.

use crate::closure::Closure;
use crate::document::Document;
use crate::filter::prune;
use crate::index::short_name;
use crate::index::SchemaIndex;
use crate::index::ShortName;
use crate::profile::ProfileManifest;
use crate::Error;
use clap::Args;
use clap::Subcommand;
use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;
use tracing::info;

/// Entity types requested by user.
#[derive(Args, Debug, Clone, Default)]
pub struct EntitySelection {
    /// Entity types to keep. Names may be qualified with schema
    /// namespace, only the last segment is used.
    #[arg(short, long, num_args = 1..)]
    pub entities: Vec<String>,
    /// Profile manifest (TOML) with named groups of entity types.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Profiles from the manifest whose entity types are requested.
    #[arg(short = 'f', long = "feature", requires = "profile")]
    pub features: Vec<String>,
}

impl EntitySelection {
    /// Requested entity types in short form.
    ///
    /// # Errors
    ///
    /// - `Error::Profile` if manifest cannot be read
    /// - `Error::UnknownProfile` if feature is not defined in manifest
    /// - `Error::NoEntitiesRequested` if selection is empty
    pub fn requested(&self) -> Result<Vec<ShortName>, Error> {
        let mut requested = self
            .entities
            .iter()
            .map(|name| short_name(name))
            .collect::<Vec<_>>();
        if let Some(fname) = &self.profile {
            let manifest = ProfileManifest::read(fname)
                .map_err(|e| Error::profile_error(fname.clone(), e))?;
            let entities = manifest
                .collect(&self.features)
                .map_err(|e| Error::profile_error(fname.clone(), e))?;
            requested.extend(entities.into_iter().map(|name| short_name(name)));
        }
        requested.retain(|name| !name.inner().is_empty());
        if requested.is_empty() {
            return Err(Error::NoEntitiesRequested);
        }
        Ok(requested)
    }
}

/// Filter high-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove entity types outside of the navigation closure of the
    /// requested ones together with everything that references them.
    Filter {
        /// Input metadata document.
        #[arg(short, long)]
        input: PathBuf,
        /// Output file for the filtered document.
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        selection: EntitySelection,
        /// Run the filter and print summary without writing the
        /// output file.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print navigation closure of the requested entity types.
    Closure {
        /// Input metadata document.
        #[arg(short, long)]
        input: PathBuf,
        #[command(flatten)]
        selection: EntitySelection,
    },
}

/// Process a filter command.
///
/// # Errors
///
/// Returns an error if command processing fails.
pub fn process_command(command: &Commands) -> Result<Vec<String>, Error> {
    let mut display_output = Vec::new();
    match command {
        Commands::Filter {
            input,
            output,
            selection,
            dry_run,
        } => {
            let requested = selection.requested()?;
            let mut doc = read_document(input)?;
            let (closure, report) =
                prune(&mut doc, requested).map_err(|e| Error::Index(input.clone(), e))?;
            display_output.push(format!("Input file: {}", input.display()));
            display_output.extend(closure_lines(&closure));
            display_output.extend(report.summary());
            if *dry_run {
                info!(output = %output.display(), "dry run, output is not written");
                display_output.push(format!("Dry run: {} has not been written", output.display()));
            } else {
                let content = doc
                    .to_xml()
                    .map_err(|e| Error::Document(output.clone(), e))?;
                write(output, content).map_err(|e| Error::WriteOutput(output.clone(), e))?;
                display_output.push(format!("{} file has been written", output.display()));
            }
            Ok(display_output)
        }
        Commands::Closure { input, selection } => {
            let requested = selection.requested()?;
            let doc = read_document(input)?;
            let index = SchemaIndex::build(&doc).map_err(|e| Error::Index(input.clone(), e))?;
            let closure = Closure::compute(requested, &index);
            display_output.extend(closure_lines(&closure));
            Ok(display_output)
        }
    }
}

fn read_document(fname: &Path) -> Result<Document, Error> {
    let content = read_to_string(fname).map_err(|e| Error::Io(fname.to_path_buf(), e))?;
    let doc = Document::parse(&content).map_err(|e| Error::Document(fname.to_path_buf(), e))?;
    info!(input = %fname.display(), "document loaded");
    Ok(doc)
}

fn closure_lines(closure: &Closure) -> Vec<String> {
    let mut lines = vec![format!("Requested entity types: {}", closure.requested().len())];
    lines.extend(closure.requested().iter().map(|name| format!("  - {name}")));
    let dependencies = closure.dependencies().collect::<Vec<_>>();
    lines.push(format!("Dependencies: {}", dependencies.len()));
    lines.extend(dependencies.into_iter().map(|name| format!("  - {name}")));
    lines.push(format!("Kept entity types: {}", closure.len()));
    lines
}
