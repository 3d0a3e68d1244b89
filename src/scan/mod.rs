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

//! Decoding result sets into typed records.
//!
//! ## Module Structure
//!
//! - `reader`: the executor boundary ([`ResultReader`], [`QueryResult`])
//! - `row`: typed per-column access to one row ([`RowView`])
//!
//! Record types implement [`FromRow`]; [`scan_one`] and [`scan_all`] drive
//! the decode. An empty result set is the distinct
//! [`Error::NotFound`](crate::Error::NotFound) condition, never an empty
//! success that could be mistaken for data.

pub mod reader;
pub mod row;

// Re-export commonly used types
pub use reader::{BatchReader, EmptyReader, QueryResult, ResultReader};
pub use row::RowView;

use crate::error::{Error, Result};

/// Decode one result row into a record.
///
/// Implementations read columns by name through the [`RowView`] accessors;
/// each record is constructed fresh per row and owned by the caller.
pub trait FromRow: Sized {
    fn from_row(row: &RowView<'_>) -> Result<Self>;
}

/// Decode a single-object lookup.
///
/// Decodes the first row of the result; zero rows is
/// [`Error::NotFound`](crate::Error::NotFound). Surplus rows are ignored
/// (single-object SHOW/DESCRIBE lookups are expected to return one row).
pub fn scan_one<T: FromRow>(result: QueryResult) -> Result<T> {
    let QueryResult {
        statement,
        mut reader,
    } = result;

    while let Some(batch) = reader.next_batch()? {
        if batch.num_rows() == 0 {
            continue;
        }
        if batch.num_rows() > 1 {
            tracing::debug!(
                statement = %statement,
                rows = batch.num_rows(),
                "single-object scan got multiple rows, using the first"
            );
        }
        let view = RowView::new(&batch, 0, &statement);
        return T::from_row(&view);
    }

    Err(Error::NotFound { statement })
}

/// Decode every row of a result set.
///
/// Eager: the whole result is decoded before returning. The first decode
/// error discards all partial output. Zero rows is
/// [`Error::NotFound`](crate::Error::NotFound), so callers can tell "nothing
/// matched" apart from "matched but empty".
pub fn scan_all<T: FromRow>(result: QueryResult) -> Result<Vec<T>> {
    let QueryResult {
        statement,
        mut reader,
    } = result;

    let mut records = Vec::new();
    while let Some(batch) = reader.next_batch()? {
        for row in 0..batch.num_rows() {
            let view = RowView::new(&batch, row, &statement);
            records.push(T::from_row(&view)?);
        }
    }

    if records.is_empty() {
        return Err(Error::NotFound { statement });
    }
    tracing::debug!(statement = %statement, rows = records.len(), "scanned result set");
    Ok(records)
}
