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

//! Identifier and string-literal quoting for the Snowflake SQL dialect.
//!
//! Snowflake uses two distinct quoting conventions: double quotes for
//! identifiers and single quotes for string literals. The two must never be
//! conflated — `"prod"` names an object, `'prod'` is a value.

/// Quote an identifier by wrapping it in double quotes.
///
/// Any embedded double quote is doubled (`"` → `""`). Every user-supplied
/// object name must pass through here before interpolation into SQL.
///
/// Quoting is total: any string is quotable, including the empty string,
/// which produces the (semantically odd) token `""`. Callers reject empty
/// names upstream where they are illegal.
pub fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Quote a string literal by wrapping it in single quotes.
///
/// Any embedded single quote is doubled (`'` → `''`). Used for string-valued
/// properties and for `LIKE` patterns, never for identifiers.
pub fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
