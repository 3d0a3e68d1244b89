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

//! The generic DDL statement builder.
//!
//! One builder type, parameterized by an [`EntityKind`], emits the correct
//! SQL text for every object kind. Kind-specific auxiliary queries (like the
//! warehouse's `SHOW PARAMETERS`) live on wrapper types in their own
//! modules; see [`crate::warehouse`].

use crate::ddl::entity::EntityKind;
use crate::ddl::properties::{AlterPropertiesBuilder, CreateBuilder};
use crate::ddl::quote::{quote_identifier, quote_string};
use crate::error::{Error, Result};

/// Builds DDL statements for one named object of one kind.
///
/// Construction validates the name; every generation method afterwards is a
/// pure, infallible string producer. The builder is immutable and can be
/// reused for any number of statements.
///
/// # Examples
///
/// ```
/// use snowflake_ddl::{EntityKind, StatementBuilder};
///
/// let builder = StatementBuilder::new("ANALYTICS_WH", EntityKind::Warehouse)?;
/// assert_eq!(builder.drop(), "DROP WAREHOUSE \"ANALYTICS_WH\"");
/// assert_eq!(builder.show(), "SHOW WAREHOUSES LIKE 'ANALYTICS_WH'");
/// # Ok::<(), snowflake_ddl::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    name: String,
    kind: EntityKind,
}

impl StatementBuilder {
    /// Create a builder for the named object.
    ///
    /// Returns [`Error::EmptyName`] for an empty name — raised here, never
    /// deferred to statement generation.
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self { name, kind })
    }

    /// The object name this builder targets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object kind this builder targets.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Build `SHOW <NOUNS> LIKE '<name>'`.
    ///
    /// The name is a string literal in the LIKE position, so it uses the
    /// single-quote convention.
    pub fn show(&self) -> String {
        format!(
            "SHOW {} LIKE {}",
            self.kind.sql_noun_plural(),
            quote_string(&self.name)
        )
    }

    /// Build `DESCRIBE <NOUN> "<name>"`.
    pub fn describe(&self) -> String {
        format!(
            "DESCRIBE {} {}",
            self.kind.sql_noun(),
            quote_identifier(&self.name)
        )
    }

    /// Build `DROP <NOUN> "<name>"`.
    pub fn drop(&self) -> String {
        format!(
            "DROP {} {}",
            self.kind.sql_noun(),
            quote_identifier(&self.name)
        )
    }

    /// Build `ALTER <NOUN> "<name>" RENAME TO "<new_name>"`.
    ///
    /// The new name passes through the same quoting rule as the old one.
    /// Target-name collisions are a service-side concern.
    pub fn rename(&self, new_name: &str) -> String {
        format!(
            "ALTER {} {} RENAME TO {}",
            self.kind.sql_noun(),
            quote_identifier(&self.name),
            quote_identifier(new_name)
        )
    }

    /// A fresh, empty property accumulator for `ALTER … SET`.
    pub fn alter(&self) -> AlterPropertiesBuilder {
        AlterPropertiesBuilder::new(&self.name, self.kind)
    }

    /// A fresh, empty property accumulator for `CREATE`.
    ///
    /// Idempotent creation (`IF NOT EXISTS`) and replacement (`OR REPLACE`)
    /// are explicit flags on the returned builder, never defaults.
    pub fn create(&self) -> CreateBuilder {
        CreateBuilder::new(&self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(name: &str, kind: EntityKind) -> StatementBuilder {
        StatementBuilder::new(name, kind).unwrap()
    }

    #[test]
    fn test_empty_name_rejected_at_construction() {
        let err = StatementBuilder::new("", EntityKind::Warehouse).unwrap_err();
        assert_eq!(err, Error::EmptyName);
    }

    #[test]
    fn test_show() {
        let sql = builder("ANALYTICS_WH", EntityKind::Warehouse).show();
        assert_eq!(sql, "SHOW WAREHOUSES LIKE 'ANALYTICS_WH'");

        let sql = builder("REPORTING", EntityKind::Database).show();
        assert_eq!(sql, "SHOW DATABASES LIKE 'REPORTING'");
    }

    #[test]
    fn test_describe() {
        let sql = builder("ANALYTICS_WH", EntityKind::Warehouse).describe();
        assert_eq!(sql, "DESCRIBE WAREHOUSE \"ANALYTICS_WH\"");
    }

    #[test]
    fn test_drop() {
        let sql = builder("ANALYTICS_WH", EntityKind::Warehouse).drop();
        assert_eq!(sql, "DROP WAREHOUSE \"ANALYTICS_WH\"");

        let sql = builder("LOADER", EntityKind::Role).drop();
        assert_eq!(sql, "DROP ROLE \"LOADER\"");
    }

    #[test]
    fn test_rename_contains_both_names_in_order() {
        let sql = builder("OLD_WH", EntityKind::Warehouse).rename("NEW_WH");
        assert_eq!(
            sql,
            "ALTER WAREHOUSE \"OLD_WH\" RENAME TO \"NEW_WH\""
        );
        let old = sql.find("\"OLD_WH\"").unwrap();
        let new = sql.find("\"NEW_WH\"").unwrap();
        assert!(old < new);
    }

    #[test]
    fn test_quoted_name_appears_exactly_once() {
        let b = builder("MY_WH", EntityKind::Warehouse);
        for sql in [b.show(), b.describe(), b.drop()] {
            assert_eq!(sql.matches("MY_WH").count(), 1, "in {sql}");
            assert!(sql.contains("WAREHOUSE"), "in {sql}");
        }
    }

    #[test]
    fn test_names_with_embedded_quotes_are_escaped() {
        let sql = builder("odd\"name", EntityKind::Table).drop();
        assert_eq!(sql, "DROP TABLE \"odd\"\"name\"");

        let sql = builder("it's", EntityKind::Schema).show();
        assert_eq!(sql, "SHOW SCHEMAS LIKE 'it''s'");
    }

    #[test]
    fn test_same_code_path_for_every_kind() {
        for kind in [
            EntityKind::Warehouse,
            EntityKind::Database,
            EntityKind::Schema,
            EntityKind::Table,
            EntityKind::View,
            EntityKind::User,
            EntityKind::Role,
            EntityKind::ResourceMonitor,
        ] {
            let b = builder("OBJ", kind);
            assert_eq!(b.drop(), format!("DROP {} \"OBJ\"", kind.sql_noun()));
            assert_eq!(
                b.show(),
                format!("SHOW {} LIKE 'OBJ'", kind.sql_noun_plural())
            );
        }
    }

    #[test]
    fn test_alter_and_create_are_bound_to_builder() {
        let b = builder("ANALYTICS_WH", EntityKind::Warehouse);
        assert_eq!(b.alter().render(), "ALTER WAREHOUSE \"ANALYTICS_WH\"");
        assert_eq!(b.create().render(), "CREATE WAREHOUSE \"ANALYTICS_WH\"");
    }
}
