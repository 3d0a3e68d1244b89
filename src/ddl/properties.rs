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

//! Property accumulators for ALTER and CREATE statements.
//!
//! Both builders collect `(property, value)` pairs and render them with
//! type-aware formatting. The two statements use different separator
//! conventions in the Snowflake dialect: ALTER's SET clause is
//! comma-separated, CREATE's property list is space-separated.

use crate::ddl::entity::EntityKind;
use crate::ddl::quote::{quote_identifier, quote_string};

/// A typed property value.
///
/// The tag decides how the value is rendered into SQL:
/// - [`Value::Text`] is single-quoted per the string-literal convention,
/// - [`Value::Int`], [`Value::Float`], and [`Value::Bool`] are bare literals
///   (booleans in canonical lowercase),
/// - [`Value::Identifier`] is emitted verbatim, for positions where the
///   dialect expects an unquoted reference to another named object (e.g. a
///   resource monitor assigned to a warehouse).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Identifier(String),
}

impl Value {
    /// A verbatim, unquoted identifier value.
    pub fn identifier(name: impl Into<String>) -> Self {
        Value::Identifier(name.into())
    }

    fn render(&self) -> String {
        match self {
            Value::Text(s) => quote_string(s),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Value::Identifier(name) => name.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Ordered set of property assignments.
///
/// Property names are unique; re-setting a name replaces the value while
/// keeping the original insertion position, so rendered output stays
/// deterministic for diffing and tests.
#[derive(Debug, Clone, Default)]
struct PropertySet {
    properties: Vec<(String, Value)>,
}

impl PropertySet {
    fn set(&mut self, name: String, value: Value) {
        if let Some(slot) = self.properties.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.properties.push((name, value));
        }
    }

    fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn assignments(&self) -> impl Iterator<Item = String> + '_ {
        self.properties
            .iter()
            .map(|(name, value)| format!("{} = {}", name, value.render()))
    }
}

/// Accumulates properties for an `ALTER … SET` statement.
///
/// Obtained from [`StatementBuilder::alter`](crate::ddl::StatementBuilder::alter);
/// bound to that builder's name and kind.
#[derive(Debug, Clone)]
pub struct AlterPropertiesBuilder {
    name: String,
    kind: EntityKind,
    properties: PropertySet,
}

impl AlterPropertiesBuilder {
    pub(crate) fn new(name: &str, kind: EntityKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            properties: PropertySet::default(),
        }
    }

    /// Add or replace a property assignment.
    pub fn set_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.set(name.into(), value.into());
        self
    }

    /// Render the ALTER statement.
    ///
    /// Assignments are comma-separated in insertion order. An empty property
    /// set renders the bare `ALTER <NOUN> "<name>"` with no SET clause.
    pub fn render(&self) -> String {
        let head = format!(
            "ALTER {} {}",
            self.kind.sql_noun(),
            quote_identifier(&self.name)
        );
        if self.properties.is_empty() {
            return head;
        }
        let assignments: Vec<String> = self.properties.assignments().collect();
        format!("{} SET {}", head, assignments.join(", "))
    }
}

/// Accumulates properties for a `CREATE` statement.
///
/// `OR REPLACE` and `IF NOT EXISTS` are explicit, caller-controlled flags;
/// neither is implied, so nothing is silently replaced. No validation of the
/// flag combination is done here — that is a service-side concern.
#[derive(Debug, Clone)]
pub struct CreateBuilder {
    name: String,
    kind: EntityKind,
    or_replace: bool,
    if_not_exists: bool,
    properties: PropertySet,
}

impl CreateBuilder {
    pub(crate) fn new(name: &str, kind: EntityKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            or_replace: false,
            if_not_exists: false,
            properties: PropertySet::default(),
        }
    }

    /// Emit `CREATE OR REPLACE`.
    pub fn or_replace(mut self) -> Self {
        self.or_replace = true;
        self
    }

    /// Emit `IF NOT EXISTS` after the noun.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Add or replace a property assignment.
    pub fn set_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.set(name.into(), value.into());
        self
    }

    /// Render the CREATE statement.
    ///
    /// Assignments are space-separated in insertion order — CREATE uses a
    /// different separator convention than ALTER's SET clause. An empty
    /// property set renders the bare CREATE with no trailing space.
    pub fn render(&self) -> String {
        let mut sql = String::from("CREATE ");
        if self.or_replace {
            sql.push_str("OR REPLACE ");
        }
        sql.push_str(self.kind.sql_noun());
        if self.if_not_exists {
            sql.push_str(" IF NOT EXISTS");
        }
        sql.push(' ');
        sql.push_str(&quote_identifier(&self.name));
        for assignment in self.properties.assignments() {
            sql.push(' ');
            sql.push_str(&assignment);
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alter() -> AlterPropertiesBuilder {
        AlterPropertiesBuilder::new("ANALYTICS_WH", EntityKind::Warehouse)
    }

    fn create() -> CreateBuilder {
        CreateBuilder::new("ANALYTICS_WH", EntityKind::Warehouse)
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(Value::from("prod").render(), "'prod'");
        assert_eq!(Value::from("it's").render(), "'it''s'");
        assert_eq!(Value::from(42).render(), "42");
        assert_eq!(Value::from(8i64).render(), "8");
        assert_eq!(Value::from(0.5).render(), "0.5");
        assert_eq!(Value::from(true).render(), "true");
        assert_eq!(Value::from(false).render(), "false");
        assert_eq!(Value::identifier("MONITOR_A").render(), "MONITOR_A");
    }

    #[test]
    fn test_alter_with_properties() {
        let sql = alter()
            .set_property("min_cluster_count", 2)
            .set_property("comment", "prod")
            .render();
        assert_eq!(
            sql,
            "ALTER WAREHOUSE \"ANALYTICS_WH\" SET min_cluster_count = 2, comment = 'prod'"
        );
    }

    #[test]
    fn test_alter_empty_property_set() {
        assert_eq!(alter().render(), "ALTER WAREHOUSE \"ANALYTICS_WH\"");
    }

    #[test]
    fn test_alter_comma_count_matches_property_count() {
        let mut builder = alter();
        for (i, key) in ["a", "b", "c", "d"].iter().enumerate() {
            builder = builder.set_property(*key, i as i64);
            let rendered = builder.render();
            assert_eq!(rendered.matches(", ").count(), i);
        }
    }

    #[test]
    fn test_alter_preserves_insertion_order() {
        let sql = alter()
            .set_property("zeta", 1)
            .set_property("alpha", 2)
            .set_property("mid", 3)
            .render();
        let zeta = sql.find("zeta").unwrap();
        let alpha = sql.find("alpha").unwrap();
        let mid = sql.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_resetting_property_keeps_position() {
        let sql = alter()
            .set_property("auto_suspend", 600)
            .set_property("comment", "first")
            .set_property("auto_suspend", 60)
            .render();
        assert_eq!(
            sql,
            "ALTER WAREHOUSE \"ANALYTICS_WH\" SET auto_suspend = 60, comment = 'first'"
        );
    }

    #[test]
    fn test_alter_identifier_value_unquoted() {
        let sql = alter()
            .set_property("resource_monitor", Value::identifier("ACCT_MONITOR"))
            .render();
        assert_eq!(
            sql,
            "ALTER WAREHOUSE \"ANALYTICS_WH\" SET resource_monitor = ACCT_MONITOR"
        );
    }

    #[test]
    fn test_create_with_properties_is_space_separated() {
        let sql = create()
            .set_property("warehouse_size", "XSMALL")
            .set_property("auto_suspend", 300)
            .set_property("auto_resume", true)
            .render();
        assert_eq!(
            sql,
            "CREATE WAREHOUSE \"ANALYTICS_WH\" warehouse_size = 'XSMALL' auto_suspend = 300 auto_resume = true"
        );
        assert!(!sql.contains(','));
    }

    #[test]
    fn test_create_empty_property_set() {
        let sql = create().render();
        assert_eq!(sql, "CREATE WAREHOUSE \"ANALYTICS_WH\"");
        assert!(!sql.ends_with(' '));
    }

    #[test]
    fn test_create_flags() {
        assert_eq!(
            create().or_replace().render(),
            "CREATE OR REPLACE WAREHOUSE \"ANALYTICS_WH\""
        );
        assert_eq!(
            create().if_not_exists().render(),
            "CREATE WAREHOUSE IF NOT EXISTS \"ANALYTICS_WH\""
        );
        // Both flags render in fixed positions; the service rejects the
        // combination, not this builder.
        assert_eq!(
            create().or_replace().if_not_exists().render(),
            "CREATE OR REPLACE WAREHOUSE IF NOT EXISTS \"ANALYTICS_WH\""
        );
    }

    #[test]
    fn test_create_for_other_kinds() {
        let sql = CreateBuilder::new("REPORTING", EntityKind::Database)
            .set_property("comment", "reporting db")
            .render();
        assert_eq!(
            sql,
            "CREATE DATABASE \"REPORTING\" comment = 'reporting db'"
        );
    }
}
