//! Host-facing column contract.
//!
//! These are the interfaces the mapping layer consumes when it finalizes a
//! table, renders DDL, and fills in omitted insert values. Columns defined by
//! this crate implement [`SQLColumnInfo`]; the table a column is built against
//! is anything implementing [`SQLTableInfo`].

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::Result;

/// Runtime default-value generator attached to a column.
///
/// Called by the mapping layer immediately before insertion whenever the row
/// omits a value for the column. Generation is all-or-nothing: a failure is
/// surfaced as an error, never as a short or malformed identifier.
pub type DefaultFn = dyn Fn() -> Result<String> + Send + Sync;

/// Reference to the table a column belongs to.
///
/// Schema metadata lives for the process lifetime, so columns hold a
/// `&'static dyn SQLTableInfo` handed to them at build time.
pub trait SQLTableInfo: Send + Sync {
    fn name(&self) -> &str;

    /// Schema/namespace qualifier, if the dialect has one.
    fn schema(&self) -> Option<&str> {
        None
    }
}

/// Read surface consumed by the mapping layer's DDL-rendering and insertion
/// paths.
pub trait SQLColumnInfo: Send + Sync {
    /// Column name within its table. May be empty when the host infers the
    /// name from the enclosing schema declaration.
    fn name(&self) -> &str;

    /// Logical data type tag (`"string"` for every column in this crate).
    fn data_type(&self) -> &'static str;

    /// Dialect-specific column type tag used by the host's internal dispatch.
    fn column_type(&self) -> &'static str;

    /// Physical SQL type string emitted during DDL generation.
    fn sql_type(&self) -> String;

    /// True exactly when a generator callback is attached.
    fn has_default(&self) -> bool;

    /// Generator invoked when an insert omits a value for this column.
    fn default_fn(&self) -> Option<&DefaultFn>;

    fn table(&self) -> &dyn SQLTableInfo;
}

impl std::fmt::Debug for dyn SQLColumnInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SQLColumnInfo")
            .field("name", &self.name())
            .field("data_type", &self.data_type())
            .field("column_type", &self.column_type())
            .field("sql_type", &self.sql_type())
            .field("has_default", &self.has_default())
            .field("table", &self.table().name())
            .finish()
    }
}

/// Runtime configuration record a builder hands to the column it produces.
///
/// Frozen at build time; the column owns its copy outright, so later use of
/// the originating builder (there is none, `build` consumes it) can never
/// reach an already-built column.
#[derive(Clone)]
pub struct ColumnRuntimeConfig {
    pub name: Cow<'static, str>,
    pub has_default: bool,
    pub default_fn: Option<Arc<DefaultFn>>,
}

impl std::fmt::Debug for ColumnRuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnRuntimeConfig")
            .field("name", &self.name)
            .field("has_default", &self.has_default)
            .field("default_fn", &self.default_fn.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
