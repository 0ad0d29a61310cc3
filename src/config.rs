//! Dialect-agnostic configuration and generator composition.
//!
//! The per-dialect builders differ only in the physical type keyword they
//! report; length/prefix bookkeeping, width computation, and generator
//! composition all live here.

use std::borrow::Cow;
use std::sync::Arc;

use cuid2::CuidConstructor;

use crate::column::DefaultFn;
use crate::error::Cuid2Error;

/// Identifier length used when the schema author does not call `length`.
pub const DEFAULT_LENGTH: usize = 24;

/// Per-column identifier configuration accumulated by a builder and frozen
/// into the column at build time.
#[derive(Debug, Clone)]
pub struct Cuid2Config {
    /// Character length of the generated identifier, excluding any prefix.
    pub length: usize,
    /// Literal prepended to every generated value. No separator is inserted
    /// beyond what the prefix itself contains.
    pub prefix: Option<Cow<'static, str>>,
}

impl Cuid2Config {
    pub const fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            prefix: None,
        }
    }

    /// Declared width of the physical column type.
    ///
    /// Always `length` plus the character count of the prefix, so DDL width
    /// and generated-value length stay consistent.
    pub fn sql_width(&self) -> usize {
        self.length + self.prefix.as_deref().map_or(0, |p| p.chars().count())
    }
}

impl Default for Cuid2Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Composes the default-value generator from a frozen configuration.
///
/// The closure owns copies of `length` and `prefix`; it never reads back into
/// the builder it came from. A wrong-width identifier from the underlying
/// capability is an error, not a value.
pub(crate) fn generator(config: &Cuid2Config) -> Arc<DefaultFn> {
    let length = config.length;
    let prefix = config.prefix.clone();

    Arc::new(move || {
        let len = u16::try_from(length).map_err(|_| Cuid2Error::InvalidLength(length))?;
        if len == 0 {
            return Err(Cuid2Error::InvalidLength(length));
        }

        let id = CuidConstructor::new().with_length(len).create_id();
        let actual = id.chars().count();
        if actual != length {
            return Err(Cuid2Error::Generation {
                expected: length,
                actual,
            });
        }

        crate::cuid2_trace_generate!(length, prefix.is_some());

        Ok(match &prefix {
            Some(p) => format!("{p}{id}"),
            None => id,
        })
    })
}
