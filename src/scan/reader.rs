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

//! The boundary to the external statement executor.
//!
//! The executor (transport, pooling, retries) is not part of this crate. It
//! hands results back as a [`QueryResult`]: the statement text plus a
//! [`ResultReader`] yielding Arrow record batches whose columns are
//! addressable by name.

use crate::error::Result;
use arrow_array::RecordBatch;
use arrow_schema::{Schema, SchemaRef};
use std::sync::Arc;

/// Trait for result readers.
///
/// Implemented by the external executor. Executor failures are surfaced as
/// [`Error::Execution`](crate::Error::Execution), carrying the statement
/// text for diagnostics.
pub trait ResultReader: Send {
    /// Get the schema of the result.
    fn schema(&self) -> Result<SchemaRef>;

    /// Get the next record batch, or None if end of results.
    fn next_batch(&mut self) -> Result<Option<RecordBatch>>;
}

/// One statement's result: the text that was executed plus its reader.
pub struct QueryResult {
    /// The SQL statement that produced this result.
    pub statement: String,
    /// Reader over the result batches.
    pub reader: Box<dyn ResultReader + Send>,
}

impl QueryResult {
    /// Pair a statement with the reader its execution produced.
    pub fn new(statement: impl Into<String>, reader: Box<dyn ResultReader + Send>) -> Self {
        Self {
            statement: statement.into(),
            reader,
        }
    }
}

impl std::fmt::Debug for QueryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryResult")
            .field("statement", &self.statement)
            .finish_non_exhaustive()
    }
}

/// Reader over already-materialized batches.
///
/// Useful for executors that buffer whole result sets, and for tests.
pub struct BatchReader {
    batches: Vec<RecordBatch>,
    index: usize,
    schema: SchemaRef,
}

impl BatchReader {
    /// Create a reader that yields the given batches in order.
    ///
    /// The schema is taken from the first batch; an empty batch list gets an
    /// empty schema.
    pub fn new(batches: Vec<RecordBatch>) -> Self {
        let schema = if batches.is_empty() {
            Arc::new(Schema::empty())
        } else {
            batches[0].schema()
        };
        Self {
            batches,
            index: 0,
            schema,
        }
    }
}

impl ResultReader for BatchReader {
    fn schema(&self) -> Result<SchemaRef> {
        Ok(self.schema.clone())
    }

    fn next_batch(&mut self) -> Result<Option<RecordBatch>> {
        if self.index >= self.batches.len() {
            Ok(None)
        } else {
            let batch = self.batches[self.index].clone();
            self.index += 1;
            Ok(Some(batch))
        }
    }
}

/// Reader for statements that returned zero rows.
///
/// The result schema is preserved so callers can still inspect column
/// shapes of an empty result.
pub struct EmptyReader {
    schema: SchemaRef,
}

impl EmptyReader {
    /// Create an empty reader with the given result schema.
    pub fn new(schema: SchemaRef) -> Self {
        Self { schema }
    }
}

impl ResultReader for EmptyReader {
    fn schema(&self) -> Result<SchemaRef> {
        Ok(self.schema.clone())
    }

    fn next_batch(&mut self) -> Result<Option<RecordBatch>> {
        Ok(None)
    }
}
