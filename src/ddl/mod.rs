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

//! DDL statement generation.
//!
//! ## Module Structure
//!
//! - `quote`: identifier and string-literal quoting
//! - `entity`: the closed registry of object kinds
//! - `statement`: the generic SHOW/DESCRIBE/DROP/RENAME builder
//! - `properties`: typed property accumulators for ALTER and CREATE

pub mod entity;
pub mod properties;
pub mod quote;
pub mod statement;

// Re-export commonly used types
pub use entity::EntityKind;
pub use properties::{AlterPropertiesBuilder, CreateBuilder, Value};
pub use quote::{quote_identifier, quote_string};
pub use statement::StatementBuilder;
