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

//! DDL statement generation and typed result scanning for Snowflake
//! warehouse objects.
//!
//! ## Overview
//!
//! Resource-management tooling needs to create, alter, rename, describe, and
//! drop warehouse-service objects without hand-writing SQL text or
//! hand-parsing heterogeneous result rows. This crate provides the two
//! reusable halves of that job:
//!
//! - [`StatementBuilder`] — one polymorphic builder that, given an
//!   [`EntityKind`] and a name, emits SHOW / DESCRIBE / DROP / RENAME text
//!   and hands out property accumulators for ALTER and CREATE.
//! - [`scan_one`] / [`scan_all`] — decode column-named result rows into
//!   typed records via the [`FromRow`] trait, honoring nullable columns and
//!   reporting the distinct not-found condition for empty results.
//!
//! Executing the generated SQL is out of scope: the executor hands results
//! back through the [`ResultReader`] boundary and this crate never performs
//! I/O itself. Every builder and scan operation is synchronous and pure.
//!
//! ## Example
//!
//! ```
//! use snowflake_ddl::{EntityKind, StatementBuilder};
//!
//! let builder = StatementBuilder::new("ANALYTICS_WH", EntityKind::Warehouse)?;
//! assert_eq!(builder.drop(), "DROP WAREHOUSE \"ANALYTICS_WH\"");
//!
//! let alter = builder
//!     .alter()
//!     .set_property("min_cluster_count", 2)
//!     .set_property("comment", "prod");
//! assert_eq!(
//!     alter.render(),
//!     "ALTER WAREHOUSE \"ANALYTICS_WH\" SET min_cluster_count = 2, comment = 'prod'"
//! );
//! # Ok::<(), snowflake_ddl::Error>(())
//! ```
//!
//! The warehouse instantiation of the pattern, including its `SHOW
//! PARAMETERS` auxiliary query and full record type, lives in
//! [`warehouse`].

pub mod ddl;
pub mod error;
pub mod scan;
pub mod warehouse;

// Re-export main types
pub use ddl::{
    quote_identifier, quote_string, AlterPropertiesBuilder, CreateBuilder, EntityKind,
    StatementBuilder, Value,
};
pub use error::{Error, Result};
pub use scan::{
    scan_all, scan_one, BatchReader, EmptyReader, FromRow, QueryResult, ResultReader, RowView,
};
pub use warehouse::{Warehouse, WarehouseBuilder, WarehouseParameter};
