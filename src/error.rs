// Copyright (c) 2025 Snowflake DDL Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for statement generation and result scanning.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by builders and the row scanner.
///
/// Every variant that relates to a result set carries the statement text it
/// was produced for, so callers can report which query went wrong without
/// threading that context themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A builder was constructed with an empty object name.
    #[error("object name must not be empty")]
    EmptyName,

    /// A result row did not satisfy the record's column contract.
    #[error("failed to decode column '{column}' from result of `{statement}`: {message}")]
    Decode {
        /// Statement whose result was being scanned.
        statement: String,
        /// Column that was missing, NULL, or of the wrong type.
        column: String,
        /// What went wrong with the column.
        message: String,
    },

    /// A single-object lookup returned zero rows.
    ///
    /// Distinct from [`Error::Decode`] so callers can implement "object does
    /// not exist" logic without matching on error text.
    #[error("no rows returned for `{statement}`")]
    NotFound {
        /// Statement that produced the empty result set.
        statement: String,
    },

    /// The external executor failed to run a statement.
    #[error("statement execution failed for `{statement}`: {message}")]
    Execution {
        /// Statement that was being executed.
        statement: String,
        /// The executor's error, rendered to text.
        message: String,
    },
}

impl Error {
    /// Wrap an executor error together with the statement it was running.
    pub fn execution(statement: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Error::Execution {
            statement: statement.into(),
            message: source.to_string(),
        }
    }
}
