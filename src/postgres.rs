//! PostgreSQL cuid2 column builder.

use std::borrow::Cow;

use crate::column::{ColumnRuntimeConfig, DefaultFn, SQLColumnInfo, SQLTableInfo};
use crate::config::{self, Cuid2Config};

/// Builder for PostgreSQL cuid2 columns.
///
/// Accumulates length/prefix configuration before the table is finalized.
/// Rendered as `VARCHAR(n)` where `n` covers the identifier and any prefix.
///
/// # Example
///
/// ```rust,ignore
/// let id = cuid2("id").prefix("usr_").default_random().build(&USERS);
/// assert_eq!(id.sql_type(), "varchar(28)");
/// ```
#[derive(Debug, Clone)]
pub struct PgCuid2Builder {
    name: Cow<'static, str>,
    config: Cuid2Config,
    has_default: bool,
}

impl PgCuid2Builder {
    /// Creates a builder with the default 24-character length and no prefix.
    ///
    /// `name` may be empty when the host infers it from the enclosing schema
    /// declaration.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            config: Cuid2Config::new(),
            has_default: false,
        }
    }

    /// Sets the identifier length (default: 24), excluding any prefix.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero. A zero-width identifier can never satisfy
    /// the declared column width.
    #[inline]
    pub fn length(mut self, length: usize) -> Self {
        assert!(length > 0, "cuid2 length must be positive");
        self.config.length = length;
        self
    }

    /// Sets a literal prefix prepended to every generated value.
    ///
    /// No separator is inserted: `prefix("usr_")` yields `usr_<id>`.
    #[inline]
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Generates a random cuid2 value as the column default.
    ///
    /// The generator runs when a row is inserted without a value for this
    /// column. It reads the length and prefix frozen at [`build`] time, so
    /// the order of `length`/`prefix` calls relative to this one does not
    /// matter.
    ///
    /// [`build`]: Self::build
    #[inline]
    pub fn default_random(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Finalizes the builder into a column attached to `table`.
    ///
    /// Called by the mapping layer while finalizing a table definition.
    /// Configuration is frozen here: the column owns its copies of length and
    /// prefix, and the generator closure (if requested) is composed from
    /// those copies.
    pub fn build(self, table: &'static dyn SQLTableInfo) -> PgCuid2 {
        let default_fn = self.has_default.then(|| config::generator(&self.config));
        PgCuid2 {
            table,
            runtime: ColumnRuntimeConfig {
                name: self.name,
                has_default: self.has_default,
                default_fn,
            },
            config: self.config,
        }
    }
}

/// Finalized PostgreSQL cuid2 column descriptor.
///
/// Immutable after construction; safe for unsynchronized concurrent reads.
pub struct PgCuid2 {
    table: &'static dyn SQLTableInfo,
    runtime: ColumnRuntimeConfig,
    config: Cuid2Config,
}

impl PgCuid2 {
    /// Physical SQL type string: `varchar(W)` with `W` = identifier length
    /// plus prefix character count.
    pub fn sql_type(&self) -> String {
        format!("varchar({})", self.config.sql_width())
    }
}

impl SQLColumnInfo for PgCuid2 {
    fn name(&self) -> &str {
        &self.runtime.name
    }

    fn data_type(&self) -> &'static str {
        "string"
    }

    fn column_type(&self) -> &'static str {
        "PgCuid2"
    }

    fn sql_type(&self) -> String {
        PgCuid2::sql_type(self)
    }

    fn has_default(&self) -> bool {
        self.runtime.has_default
    }

    fn default_fn(&self) -> Option<&DefaultFn> {
        self.runtime.default_fn.as_deref()
    }

    fn table(&self) -> &dyn SQLTableInfo {
        self.table
    }
}

/// Creates a PostgreSQL cuid2 column builder.
///
/// Re-exported at the crate root as `pg_cuid2`.
#[inline]
pub fn cuid2(name: impl Into<Cow<'static, str>>) -> PgCuid2Builder {
    PgCuid2Builder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Users;
    impl SQLTableInfo for Users {
        fn name(&self) -> &str {
            "users"
        }
    }
    static USERS: Users = Users;

    #[test]
    fn builder_freezes_config_at_build() {
        let column = cuid2("id").length(8).prefix("x_").default_random().build(&USERS);
        assert_eq!(column.sql_type(), "varchar(10)");

        let id = column.default_fn().unwrap()().unwrap();
        assert_eq!(id.chars().count(), 10);
        assert!(id.starts_with("x_"));
    }

    #[test]
    #[should_panic(expected = "cuid2 length must be positive")]
    fn zero_length_is_a_precondition_violation() {
        let _ = cuid2("id").length(0);
    }
}
