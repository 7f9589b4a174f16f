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

//! Entity profiles manifest.
//!
//! Recurring selections of entity types can be kept in a TOML file and
//! referenced by name from the command line:
//!
//! ```toml
//! [[profiles]]
//! name = "hr"
//! description = "Human resources"
//! entities = ["Employee", "Position"]
//! ```

use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Read as _;
use std::path::Path;
use toml::de::Error as TomlError;
use tracing::debug;

/// Manifest with named groups of entity types.
#[derive(Deserialize, Debug)]
pub struct ProfileManifest {
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// Named group of entity types.
#[derive(Deserialize, Debug)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Entity type names, qualified or not.
    pub entities: Vec<String>,
}

impl ProfileManifest {
    /// Read profile manifest from toml file.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if failed to read file
    /// - `Error::Toml` if failed to parse content as TOML / invalid manifest.
    pub fn read(fname: &Path) -> Result<Self, Error> {
        let mut file = File::open(fname).map_err(Error::Io)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(Error::Io)?;
        Self::parse(&content)
    }

    /// Parse profile manifest.
    ///
    /// # Errors
    ///
    /// Returns `Error::Toml` if content is not a valid manifest.
    pub fn parse(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(Error::Toml)
    }

    /// Collect entity types of the named profiles.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownProfile` for the first name that is not
    /// defined in the manifest.
    pub fn collect<'a>(&'a self, names: &[String]) -> Result<Vec<&'a String>, Error> {
        names.iter().try_fold(Vec::new(), |mut entities, name| {
            let profile = self
                .profiles
                .iter()
                .find(|p| p.name == *name)
                .ok_or_else(|| Error::UnknownProfile(name.clone()))?;
            debug!(
                profile = %profile.name,
                description = profile.description.as_deref().unwrap_or_default(),
                entities = profile.entities.len(),
                "profile selected"
            );
            entities.extend(profile.entities.iter());
            Ok(entities)
        })
    }
}

#[derive(Debug)]
pub enum Error {
    Io(IoError),
    Toml(TomlError),
    UnknownProfile(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(err) => write!(f, "input/output error: {err}"),
            Self::Toml(err) => write!(f, "profile manifest format error: {err}"),
            Self::UnknownProfile(name) => write!(f, "unknown profile: {name}"),
        }
    }
}

impl StdError for Error {}
