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

use quick_xml::events::attributes::AttrError;
use quick_xml::Error as XmlError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::str::Utf8Error;
use std::string::FromUtf8Error;

/// Errors of reading or writing a metadata document.
#[derive(Debug)]
pub enum Error {
    /// XML syntax error reported by the reader.
    Xml(XmlError),
    /// Malformed attribute of an element.
    Attribute(AttrError),
    /// Document content is not valid UTF-8.
    Utf8(Utf8Error),
    /// End tag without matching start tag.
    UnexpectedEndTag,
    /// Element was not closed before the end of input.
    UnclosedElement(String),
    /// Document doesn't contain any element.
    NoRootElement,
    /// More than one top-level element.
    MultipleRootElements(String),
    /// Failed to write serialized document.
    Write(IoError),
    /// Serialized document is not valid UTF-8.
    WriteUtf8(FromUtf8Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Xml(err) => write!(f, "XML error: {err}"),
            Self::Attribute(err) => write!(f, "invalid attribute: {err}"),
            Self::Utf8(err) => write!(f, "invalid UTF-8 content: {err}"),
            Self::UnexpectedEndTag => "end tag without start tag".fmt(f),
            Self::UnclosedElement(name) => write!(f, "element is not closed: {name}"),
            Self::NoRootElement => "document has no root element".fmt(f),
            Self::MultipleRootElements(name) => {
                write!(f, "unexpected second top-level element: {name}")
            }
            Self::Write(err) => write!(f, "failed to serialize document: {err}"),
            Self::WriteUtf8(err) => write!(f, "serialized document is not UTF-8: {err}"),
        }
    }
}

impl StdError for Error {}
