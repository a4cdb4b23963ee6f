// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error types for sketch operations

use std::fmt;

/// ErrorKind is all kinds of Error of the sketch engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The sketch configuration is invalid.
    InvalidConfig,
    /// A density plot was requested from a sketch with no generations.
    EmptySketch,
    /// The input collapses to a density with no usable mass.
    DegenerateInput,
    /// A cumulative total became non-finite.
    NumericOverflow,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidConfig => "InvalidConfig",
            ErrorKind::EmptySketch => "EmptySketch",
            ErrorKind::DegenerateInput => "DegenerateInput",
            ErrorKind::NumericOverflow => "NumericOverflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all sketch functions.
///
/// Every failure here is a leaf condition — a rejected configuration or a
/// partition rebuild that found nothing usable — so an error carries a
/// kind, a message, and optional key/value context, with no wrapped
/// source.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Create an [`ErrorKind::InvalidConfig`] error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig, message)
    }

    /// Create an [`ErrorKind::EmptySketch`] error.
    pub fn empty_sketch() -> Self {
        Self::new(
            ErrorKind::EmptySketch,
            "density plot requested from a sketch with no generations",
        )
    }

    /// Create an [`ErrorKind::DegenerateInput`] error.
    pub fn degenerate_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DegenerateInput, message)
    }

    /// Create an [`ErrorKind::NumericOverflow`] error.
    pub fn numeric_overflow(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NumericOverflow, message)
    }

    /// Attach a key/value pair to the error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut de = f.debug_struct("Error");
        de.field("kind", &self.kind);
        de.field("message", &self.message);
        if !self.context.is_empty() {
            de.field("context", &self.context);
        }
        de.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some((first, rest)) = self.context.split_first() {
            write!(f, " ({}: {}", first.0, first.1)?;
            for (key, value) in rest {
                write!(f, ", {key}: {value}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_message_and_context() {
        let err = Error::invalid_config("cmap_size must be at least 2")
            .with_context("cmap_size", 1)
            .with_context("cmap_no", 2);
        assert_eq!(
            err.to_string(),
            "InvalidConfig: cmap_size must be at least 2 (cmap_size: 1, cmap_no: 2)"
        );
    }

    #[test]
    fn test_display_without_context_is_bare() {
        let err = Error::empty_sketch();
        assert_eq!(
            err.to_string(),
            "EmptySketch: density plot requested from a sketch with no generations"
        );
    }

    #[test]
    fn test_kind_accessors() {
        assert_eq!(Error::empty_sketch().kind(), ErrorKind::EmptySketch);
        assert_eq!(ErrorKind::NumericOverflow.into_static(), "NumericOverflow");
        assert_eq!(
            Error::degenerate_input("no mass").message(),
            "no mass"
        );
    }
}
