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

//! The closed registry of object kinds a statement can target.

use std::fmt;

/// Kind of warehouse-service object a statement targets.
///
/// Each kind maps to the SQL noun emitted immediately after
/// SHOW / DESCRIBE / DROP / ALTER / CREATE. The enum is closed: the noun
/// mapping matches exhaustively, so adding a kind without a noun is a
/// compile error rather than a runtime one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Warehouse,
    Database,
    Schema,
    Table,
    View,
    User,
    Role,
    ResourceMonitor,
}

impl EntityKind {
    /// The SQL noun for this kind, e.g. `WAREHOUSE`.
    pub fn sql_noun(&self) -> &'static str {
        match self {
            EntityKind::Warehouse => "WAREHOUSE",
            EntityKind::Database => "DATABASE",
            EntityKind::Schema => "SCHEMA",
            EntityKind::Table => "TABLE",
            EntityKind::View => "VIEW",
            EntityKind::User => "USER",
            EntityKind::Role => "ROLE",
            EntityKind::ResourceMonitor => "RESOURCE MONITOR",
        }
    }

    /// The plural form used by SHOW, e.g. `WAREHOUSES`.
    pub fn sql_noun_plural(&self) -> String {
        format!("{}S", self.sql_noun())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_noun())
    }
}
