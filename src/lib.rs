//! # drizzle-cuid2
//!
//! cuid2 identifier columns for drizzle-style schemas: collision-resistant,
//! URL-safe textual identifiers generated in Rust at insert time, with no
//! database-side default expression.
//!
//! One builder/column pair per dialect (PostgreSQL, MySQL, SQLite), gated
//! behind the matching cargo feature. The shared configuration core keeps the
//! declared column width and the generated value length in lockstep:
//! `width = length + prefix characters`, for every dialect.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drizzle_cuid2::pg_cuid2;
//!
//! // id VARCHAR(28), values like "usr_pfh0haxw3seukrxnbskqcuk3"
//! let id = pg_cuid2("id").prefix("usr_").default_random().build(&USERS);
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod tracing;

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use column::{ColumnRuntimeConfig, DefaultFn, SQLColumnInfo, SQLTableInfo};
pub use config::{Cuid2Config, DEFAULT_LENGTH};
pub use error::{Cuid2Error, Result};

#[cfg(feature = "mysql")]
pub use mysql::{MySqlCuid2, MySqlCuid2Builder, cuid2 as mysql_cuid2};
#[cfg(feature = "postgres")]
pub use postgres::{PgCuid2, PgCuid2Builder, cuid2 as pg_cuid2};
#[cfg(feature = "sqlite")]
pub use sqlite::{SQLiteCuid2, SQLiteCuid2Builder, cuid2 as sqlite_cuid2};

/// Convenience re-exports for schema modules.
pub mod prelude {
    pub use crate::column::{SQLColumnInfo, SQLTableInfo};

    #[cfg(feature = "mysql")]
    pub use crate::mysql_cuid2;
    #[cfg(feature = "postgres")]
    pub use crate::pg_cuid2;
    #[cfg(feature = "sqlite")]
    pub use crate::sqlite_cuid2;
}
