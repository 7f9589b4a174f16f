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

use crate::document::Error as DocumentError;
use crate::index::Error as IndexError;
use crate::profile::Error as ProfileError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::path::PathBuf;

/// EDMX filter errors.
#[derive(Debug)]
pub enum Error {
    NoEntitiesRequested,
    UnknownProfile(String),
    Io(PathBuf, IoError),
    Document(PathBuf, DocumentError),
    Index(PathBuf, IndexError),
    Profile(PathBuf, ProfileError),
    WriteOutput(PathBuf, IoError),
}

impl Error {
    /// Wrap profile manifest error. Unknown profile is user input
    /// error and is reported without the manifest name.
    #[must_use]
    pub fn profile_error(fname: PathBuf, err: ProfileError) -> Self {
        match err {
            ProfileError::UnknownProfile(name) => Self::UnknownProfile(name),
            err => Self::Profile(fname, err),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NoEntitiesRequested => "at least one entity type must be requested".fmt(f),
            Self::UnknownProfile(name) => write!(f, "unknown profile: {name}"),
            Self::Io(fname, error) => {
                write!(f, "input/output error: file: {}: {error}", fname.display())
            }
            Self::Document(fname, error) => {
                write!(f, "document error: file: {}: {error}", fname.display())
            }
            Self::Index(fname, error) => {
                write!(f, "metadata structure error: file: {}: {error}", fname.display())
            }
            Self::Profile(fname, error) => {
                write!(f, "profile manifest error: file: {}: {error}", fname.display())
            }
            Self::WriteOutput(fname, error) => {
                write!(f, "failed write output file: {}: {error}", fname.display())
            }
        }
    }
}

impl StdError for Error {}
