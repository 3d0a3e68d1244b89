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

//! The warehouse specialization of the generic builder and scanner.
//!
//! Wraps [`StatementBuilder`] with the kind fixed to
//! [`EntityKind::Warehouse`] and adds the warehouse-only auxiliary query
//! `SHOW PARAMETERS IN WAREHOUSE`. The [`Warehouse`] and
//! [`WarehouseParameter`] records decode the rows those statements return.

use crate::ddl::entity::EntityKind;
use crate::ddl::properties::{AlterPropertiesBuilder, CreateBuilder};
use crate::ddl::quote::quote_identifier;
use crate::ddl::statement::StatementBuilder;
use crate::error::Result;
use crate::scan::{scan_all, scan_one, FromRow, QueryResult, RowView};
use chrono::{DateTime, Utc};

/// Statement listing every warehouse visible to the current role.
pub fn list_warehouses_statement() -> &'static str {
    "SHOW WAREHOUSES"
}

/// Builds DDL statements for one warehouse.
///
/// Re-exposes the generic operations and adds [`show_parameters`]
/// (`SHOW PARAMETERS IN WAREHOUSE`), which only exists for this kind.
///
/// [`show_parameters`]: WarehouseBuilder::show_parameters
#[derive(Debug, Clone)]
pub struct WarehouseBuilder {
    inner: StatementBuilder,
}

impl WarehouseBuilder {
    /// Create a builder for the named warehouse.
    ///
    /// Fails on an empty name, like [`StatementBuilder::new`].
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            inner: StatementBuilder::new(name, EntityKind::Warehouse)?,
        })
    }

    /// The warehouse name this builder targets.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Build `SHOW WAREHOUSES LIKE '<name>'`.
    pub fn show(&self) -> String {
        self.inner.show()
    }

    /// Build `DESCRIBE WAREHOUSE "<name>"`.
    pub fn describe(&self) -> String {
        self.inner.describe()
    }

    /// Build `DROP WAREHOUSE "<name>"`.
    pub fn drop(&self) -> String {
        self.inner.drop()
    }

    /// Build `ALTER WAREHOUSE "<name>" RENAME TO "<new_name>"`.
    pub fn rename(&self, new_name: &str) -> String {
        self.inner.rename(new_name)
    }

    /// A fresh property accumulator for `ALTER WAREHOUSE … SET`.
    pub fn alter(&self) -> AlterPropertiesBuilder {
        self.inner.alter()
    }

    /// A fresh property accumulator for `CREATE WAREHOUSE`.
    pub fn create(&self) -> CreateBuilder {
        self.inner.create()
    }

    /// Build `SHOW PARAMETERS IN WAREHOUSE "<name>"`.
    pub fn show_parameters(&self) -> String {
        format!(
            "SHOW PARAMETERS IN WAREHOUSE {}",
            quote_identifier(self.inner.name())
        )
    }
}

/// One row of `SHOW WAREHOUSES`.
///
/// Fields map 1:1 onto the result columns by name. `auto_suspend` is the
/// one nullable setting: a warehouse with suspension disabled reports NULL,
/// which decodes to `None` — distinct from a real zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    pub name: String,
    pub state: String,
    pub r#type: String,
    pub size: String,
    pub min_cluster_count: i64,
    pub max_cluster_count: i64,
    pub started_clusters: i64,
    pub running: i64,
    pub queued: i64,
    pub is_default: String,
    pub is_current: String,
    pub auto_suspend: Option<i64>,
    pub auto_resume: bool,
    pub available: String,
    pub provisioning: String,
    pub quiescing: String,
    pub other: String,
    pub created_on: DateTime<Utc>,
    pub resumed_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub owner: String,
    pub comment: String,
    pub enable_query_acceleration: bool,
    pub query_acceleration_max_scale_factor: i64,
    pub resource_monitor: String,
    pub actives: i64,
    pub pendings: i64,
    pub failed: i64,
    pub suspended: i64,
    pub uuid: String,
    pub scaling_policy: String,
    pub warehouse_type: String,
}

impl FromRow for Warehouse {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(Warehouse {
            name: row.get_str("name")?,
            state: row.get_str("state")?,
            r#type: row.get_str("type")?,
            size: row.get_str("size")?,
            min_cluster_count: row.get_i64("min_cluster_count")?,
            max_cluster_count: row.get_i64("max_cluster_count")?,
            started_clusters: row.get_i64("started_clusters")?,
            running: row.get_i64("running")?,
            queued: row.get_i64("queued")?,
            is_default: row.get_str("is_default")?,
            is_current: row.get_str("is_current")?,
            auto_suspend: row.get_opt_i64("auto_suspend")?,
            auto_resume: row.get_bool("auto_resume")?,
            available: row.get_str("available")?,
            provisioning: row.get_str("provisioning")?,
            quiescing: row.get_str("quiescing")?,
            other: row.get_str("other")?,
            created_on: row.get_timestamp("created_on")?,
            resumed_on: row.get_timestamp("resumed_on")?,
            updated_on: row.get_timestamp("updated_on")?,
            owner: row.get_str("owner")?,
            comment: row.get_str("comment")?,
            enable_query_acceleration: row.get_bool("enable_query_acceleration")?,
            query_acceleration_max_scale_factor: row.get_i64("query_acceleration_max_scale_factor")?,
            resource_monitor: row.get_str("resource_monitor")?,
            actives: row.get_i64("actives")?,
            pendings: row.get_i64("pendings")?,
            failed: row.get_i64("failed")?,
            suspended: row.get_i64("suspended")?,
            uuid: row.get_str("uuid")?,
            scaling_policy: row.get_str("scaling_policy")?,
            warehouse_type: row.get_str("warehouse_type")?,
        })
    }
}

/// One row of `SHOW PARAMETERS IN WAREHOUSE` — a generic
/// key/value/default/level/description/type parameter description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseParameter {
    pub key: String,
    pub value: String,
    pub default: String,
    pub level: String,
    pub description: String,
    pub r#type: String,
}

impl FromRow for WarehouseParameter {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(WarehouseParameter {
            key: row.get_str("key")?,
            value: row.get_str("value")?,
            default: row.get_str("default")?,
            level: row.get_str("level")?,
            description: row.get_str("description")?,
            r#type: row.get_str("type")?,
        })
    }
}

/// Decode a single-warehouse lookup (`SHOW WAREHOUSES LIKE` or equivalent).
pub fn scan_warehouse(result: QueryResult) -> Result<Warehouse> {
    scan_one(result)
}

/// Decode a `SHOW WAREHOUSES` listing.
pub fn scan_warehouses(result: QueryResult) -> Result<Vec<Warehouse>> {
    scan_all(result)
}

/// Decode a `SHOW PARAMETERS IN WAREHOUSE` result, one record per parameter.
pub fn scan_warehouse_parameters(result: QueryResult) -> Result<Vec<WarehouseParameter>> {
    scan_all(result)
}
