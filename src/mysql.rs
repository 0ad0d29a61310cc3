//! MySQL cuid2 column builder.

use std::borrow::Cow;

use crate::column::{ColumnRuntimeConfig, DefaultFn, SQLColumnInfo, SQLTableInfo};
use crate::config::{self, Cuid2Config};

/// Builder for MySQL cuid2 columns.
///
/// Rendered as `VARCHAR(n)` where `n` covers the identifier and any prefix.
#[derive(Debug, Clone)]
pub struct MySqlCuid2Builder {
    name: Cow<'static, str>,
    config: Cuid2Config,
    has_default: bool,
}

impl MySqlCuid2Builder {
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
    pub fn build(self, table: &'static dyn SQLTableInfo) -> MySqlCuid2 {
        let default_fn = self.has_default.then(|| config::generator(&self.config));
        MySqlCuid2 {
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

/// Finalized MySQL cuid2 column descriptor.
pub struct MySqlCuid2 {
    table: &'static dyn SQLTableInfo,
    runtime: ColumnRuntimeConfig,
    config: Cuid2Config,
}

impl MySqlCuid2 {
    /// Physical SQL type string: `varchar(W)` with `W` = identifier length
    /// plus prefix character count.
    pub fn sql_type(&self) -> String {
        format!("varchar({})", self.config.sql_width())
    }
}

impl SQLColumnInfo for MySqlCuid2 {
    fn name(&self) -> &str {
        &self.runtime.name
    }

    fn data_type(&self) -> &'static str {
        "string"
    }

    fn column_type(&self) -> &'static str {
        "MySqlCuid2"
    }

    fn sql_type(&self) -> String {
        MySqlCuid2::sql_type(self)
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

/// Creates a MySQL cuid2 column builder.
///
/// Re-exported at the crate root as `mysql_cuid2`.
#[inline]
pub fn cuid2(name: impl Into<Cow<'static, str>>) -> MySqlCuid2Builder {
    MySqlCuid2Builder::new(name)
}
