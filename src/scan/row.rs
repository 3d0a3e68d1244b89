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

//! Typed, name-addressed access to one result row.
//!
//! [`RowView`] borrows a single row of a record batch. Required accessors
//! fail with a decode error naming the statement and column when the column
//! is absent, NULL, or mistyped. Optional accessors decode NULL to `None` —
//! never to a zero value that could be confused with real data.

use crate::error::{Error, Result};
use arrow_array::cast::AsArray;
use arrow_array::{
    Array, ArrayRef, BooleanArray, Int32Array, Int64Array, RecordBatch, TimestampMicrosecondArray,
    TimestampMillisecondArray, TimestampNanosecondArray, TimestampSecondArray,
};
use arrow_schema::{DataType, TimeUnit};
use chrono::{DateTime, Utc};

/// A borrowed view of one row in a result batch.
///
/// Handed to [`FromRow`](crate::scan::FromRow) implementations by the
/// scanner; holds no ownership and is discarded after the row is decoded.
pub struct RowView<'a> {
    batch: &'a RecordBatch,
    row: usize,
    statement: &'a str,
}

impl<'a> RowView<'a> {
    pub(crate) fn new(batch: &'a RecordBatch, row: usize, statement: &'a str) -> Self {
        Self {
            batch,
            row,
            statement,
        }
    }

    fn decode_err(&self, column: &str, message: impl Into<String>) -> Error {
        Error::Decode {
            statement: self.statement.to_string(),
            column: column.to_string(),
            message: message.into(),
        }
    }

    fn column(&self, name: &str) -> Result<&'a ArrayRef> {
        let index = self
            .batch
            .schema()
            .index_of(name)
            .map_err(|_| self.decode_err(name, "column not present in result set"))?;
        Ok(self.batch.column(index))
    }

    fn require_non_null(&self, array: &ArrayRef, column: &str) -> Result<()> {
        if array.is_null(self.row) {
            Err(self.decode_err(column, "unexpected NULL in required column"))
        } else {
            Ok(())
        }
    }

    fn str_value(&self, array: &ArrayRef, column: &str) -> Result<String> {
        match array.data_type() {
            DataType::Utf8 => Ok(array.as_string::<i32>().value(self.row).to_string()),
            DataType::LargeUtf8 => Ok(array.as_string::<i64>().value(self.row).to_string()),
            dt => Err(self.decode_err(column, format!("expected string column, got {dt:?}"))),
        }
    }

    fn i64_value(&self, array: &ArrayRef, column: &str) -> Result<i64> {
        match array.data_type() {
            DataType::Int64 => Ok(array
                .as_any()
                .downcast_ref::<Int64Array>()
                .unwrap()
                .value(self.row)),
            DataType::Int32 => Ok(array
                .as_any()
                .downcast_ref::<Int32Array>()
                .unwrap()
                .value(self.row) as i64),
            dt => Err(self.decode_err(column, format!("expected integer column, got {dt:?}"))),
        }
    }

    fn bool_value(&self, array: &ArrayRef, column: &str) -> Result<bool> {
        match array.data_type() {
            DataType::Boolean => Ok(array
                .as_any()
                .downcast_ref::<BooleanArray>()
                .unwrap()
                .value(self.row)),
            // SHOW commands frequently report booleans as "true"/"false" text.
            DataType::Utf8 | DataType::LargeUtf8 => {
                let text = self.str_value(array, column)?;
                if text.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(self.decode_err(column, format!("expected boolean text, got '{text}'")))
                }
            }
            dt => Err(self.decode_err(column, format!("expected boolean column, got {dt:?}"))),
        }
    }

    fn timestamp_value(&self, array: &ArrayRef, column: &str) -> Result<DateTime<Utc>> {
        let converted = match array.data_type() {
            DataType::Timestamp(TimeUnit::Second, _) => {
                let value = array
                    .as_any()
                    .downcast_ref::<TimestampSecondArray>()
                    .unwrap()
                    .value(self.row);
                DateTime::from_timestamp(value, 0)
            }
            DataType::Timestamp(TimeUnit::Millisecond, _) => {
                let value = array
                    .as_any()
                    .downcast_ref::<TimestampMillisecondArray>()
                    .unwrap()
                    .value(self.row);
                DateTime::from_timestamp_millis(value)
            }
            DataType::Timestamp(TimeUnit::Microsecond, _) => {
                let value = array
                    .as_any()
                    .downcast_ref::<TimestampMicrosecondArray>()
                    .unwrap()
                    .value(self.row);
                DateTime::from_timestamp_micros(value)
            }
            DataType::Timestamp(TimeUnit::Nanosecond, _) => {
                let value = array
                    .as_any()
                    .downcast_ref::<TimestampNanosecondArray>()
                    .unwrap()
                    .value(self.row);
                Some(DateTime::from_timestamp_nanos(value))
            }
            dt => {
                return Err(
                    self.decode_err(column, format!("expected timestamp column, got {dt:?}"))
                )
            }
        };
        converted.ok_or_else(|| self.decode_err(column, "timestamp out of representable range"))
    }

    /// A required string column.
    pub fn get_str(&self, column: &str) -> Result<String> {
        let array = self.column(column)?;
        self.require_non_null(array, column)?;
        self.str_value(array, column)
    }

    /// A nullable string column; NULL decodes to `None`.
    pub fn get_opt_str(&self, column: &str) -> Result<Option<String>> {
        let array = self.column(column)?;
        if array.is_null(self.row) {
            return Ok(None);
        }
        self.str_value(array, column).map(Some)
    }

    /// A required integer column (Int64 or Int32).
    pub fn get_i64(&self, column: &str) -> Result<i64> {
        let array = self.column(column)?;
        self.require_non_null(array, column)?;
        self.i64_value(array, column)
    }

    /// A nullable integer column; NULL decodes to `None`.
    pub fn get_opt_i64(&self, column: &str) -> Result<Option<i64>> {
        let array = self.column(column)?;
        if array.is_null(self.row) {
            return Ok(None);
        }
        self.i64_value(array, column).map(Some)
    }

    /// A required boolean column (native Boolean or "true"/"false" text).
    pub fn get_bool(&self, column: &str) -> Result<bool> {
        let array = self.column(column)?;
        self.require_non_null(array, column)?;
        self.bool_value(array, column)
    }

    /// A nullable boolean column; NULL decodes to `None`.
    pub fn get_opt_bool(&self, column: &str) -> Result<Option<bool>> {
        let array = self.column(column)?;
        if array.is_null(self.row) {
            return Ok(None);
        }
        self.bool_value(array, column).map(Some)
    }

    /// A required timestamp column, in any Arrow time unit.
    pub fn get_timestamp(&self, column: &str) -> Result<DateTime<Utc>> {
        let array = self.column(column)?;
        self.require_non_null(array, column)?;
        self.timestamp_value(array, column)
    }

    /// A nullable timestamp column; NULL decodes to `None`.
    pub fn get_opt_timestamp(&self, column: &str) -> Result<Option<DateTime<Utc>>> {
        let array = self.column(column)?;
        if array.is_null(self.row) {
            return Ok(None);
        }
        self.timestamp_value(array, column).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_array::StringArray;
    use arrow_schema::{Field, Schema};
    use std::sync::Arc;

    fn batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("name", DataType::Utf8, false),
            Field::new("comment", DataType::Utf8, true),
            Field::new("running", DataType::Int64, false),
            Field::new("auto_suspend", DataType::Int64, true),
            Field::new("auto_resume", DataType::Utf8, false),
            Field::new(
                "created_on",
                DataType::Timestamp(TimeUnit::Microsecond, None),
                false,
            ),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["ANALYTICS_WH", "LOAD_WH"])),
                Arc::new(StringArray::from(vec![Some("prod"), None])),
                Arc::new(Int64Array::from(vec![3, 0])),
                Arc::new(Int64Array::from(vec![Some(600), None])),
                Arc::new(StringArray::from(vec!["true", "false"])),
                Arc::new(TimestampMicrosecondArray::from(vec![
                    1_600_000_000_000_000,
                    1_600_000_060_000_000,
                ])),
            ],
        )
        .unwrap()
    }

    fn view(batch: &RecordBatch, row: usize) -> RowView<'_> {
        RowView::new(batch, row, "SHOW WAREHOUSES")
    }

    #[test]
    fn test_required_values_decode_exactly() {
        let batch = batch();
        let row = view(&batch, 0);
        assert_eq!(row.get_str("name").unwrap(), "ANALYTICS_WH");
        assert_eq!(row.get_i64("running").unwrap(), 3);
        assert!(row.get_bool("auto_resume").unwrap());
        assert_eq!(
            row.get_timestamp("created_on").unwrap(),
            DateTime::from_timestamp(1_600_000_000, 0).unwrap()
        );
    }

    #[test]
    fn test_nullable_null_decodes_to_none() {
        let batch = batch();
        let row = view(&batch, 1);
        assert_eq!(row.get_opt_str("comment").unwrap(), None);
        assert_eq!(row.get_opt_i64("auto_suspend").unwrap(), None);
    }

    #[test]
    fn test_nullable_present_decodes_to_some() {
        let batch = batch();
        let row = view(&batch, 0);
        assert_eq!(row.get_opt_str("comment").unwrap(), Some("prod".into()));
        assert_eq!(row.get_opt_i64("auto_suspend").unwrap(), Some(600));
    }

    #[test]
    fn test_none_is_distinguishable_from_zero() {
        let batch = batch();
        let row = view(&batch, 1);
        // running really is zero; auto_suspend really is absent.
        assert_eq!(row.get_i64("running").unwrap(), 0);
        let suspend = row.get_opt_i64("auto_suspend").unwrap();
        assert_ne!(suspend, Some(0));
        assert_eq!(suspend, None);
    }

    #[test]
    fn test_missing_column_is_a_decode_error() {
        let batch = batch();
        let row = view(&batch, 0);
        let err = row.get_str("no_such_column").unwrap_err();
        match err {
            Error::Decode {
                statement, column, ..
            } => {
                assert_eq!(statement, "SHOW WAREHOUSES");
                assert_eq!(column, "no_such_column");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_null_in_required_column_is_a_decode_error() {
        let batch = batch();
        let row = view(&batch, 1);
        let err = row.get_str("comment").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(format!("{err}").contains("NULL"));
    }

    #[test]
    fn test_type_mismatch_is_a_decode_error() {
        let batch = batch();
        let row = view(&batch, 0);
        let err = row.get_i64("name").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        let err = row.get_bool("running").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_bool_text_variants() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("flag_native", DataType::Boolean, false),
            Field::new("flag_text", DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(BooleanArray::from(vec![true])),
                Arc::new(StringArray::from(vec!["FALSE"])),
            ],
        )
        .unwrap();
        let row = view(&batch, 0);
        assert!(row.get_bool("flag_native").unwrap());
        assert!(!row.get_bool("flag_text").unwrap());
    }
}
