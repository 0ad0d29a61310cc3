//! SQLite cuid2 column builder.

use std::borrow::Cow;

use crate::column::{ColumnRuntimeConfig, DefaultFn, SQLColumnInfo, SQLTableInfo};
use crate::config::{self, Cuid2Config};

/// Builder for SQLite cuid2 columns.
///
/// SQLite has no bounded character type; the column is rendered as `TEXT(n)`,
/// a length hint SQLite accepts and ignores, where `n` covers the identifier
/// and any prefix.
#[derive(Debug, Clone)]
pub struct SQLiteCuid2Builder {
    name: Cow<'static, str>,
    config: Cuid2Config,
    has_default: bool,
}

impl SQLiteCuid2Builder {
    /// Creates a builder with the default 24-character length and no prefix.
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
    /// Panics if `length` is zero.
    #[inline]
    pub fn length(mut self, length: usize) -> Self {
        assert!(length > 0, "cuid2 length must be positive");
        self.config.length = length;
        self
    }

    /// Sets a literal prefix prepended to every generated value.
    #[inline]
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Generates a random cuid2 value as the column default. The generator
    /// reads the length and prefix frozen at [`build`](Self::build) time.
    #[inline]
    pub fn default_random(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Finalizes the builder into a column attached to `table`, freezing
    /// length and prefix into the column's own copies.
    pub fn build(self, table: &'static dyn SQLTableInfo) -> SQLiteCuid2 {
        let default_fn = self.has_default.then(|| config::generator(&self.config));
        SQLiteCuid2 {
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

/// Finalized SQLite cuid2 column descriptor.
pub struct SQLiteCuid2 {
    table: &'static dyn SQLTableInfo,
    runtime: ColumnRuntimeConfig,
    config: Cuid2Config,
}

impl SQLiteCuid2 {
    /// Physical SQL type string: `text(W)` with `W` = identifier length plus
    /// prefix character count.
    pub fn sql_type(&self) -> String {
        format!("text({})", self.config.sql_width())
    }
}

impl SQLColumnInfo for SQLiteCuid2 {
    fn name(&self) -> &str {
        &self.runtime.name
    }

    fn data_type(&self) -> &'static str {
        "string"
    }

    fn column_type(&self) -> &'static str {
        "SQLiteCuid2"
    }

    fn sql_type(&self) -> String {
        SQLiteCuid2::sql_type(self)
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

/// Creates a SQLite cuid2 column builder.
///
/// Re-exported at the crate root as `sqlite_cuid2`.
#[inline]
pub fn cuid2(name: impl Into<Cow<'static, str>>) -> SQLiteCuid2Builder {
    SQLiteCuid2Builder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sessions;
    impl SQLTableInfo for Sessions {
        fn name(&self) -> &str {
            "sessions"
        }
    }
    static SESSIONS: Sessions = Sessions;

    #[test]
    fn text_length_hint() {
        let column = cuid2("id").build(&SESSIONS);
        assert_eq!(column.sql_type(), "text(24)");
    }

    #[test]
    fn sql_type_is_idempotent() {
        let column = cuid2("id").prefix("ses_").build(&SESSIONS);
        let first = column.sql_type();
        assert_eq!(first, column.sql_type());
        assert_eq!(first, "text(28)");
    }
}
