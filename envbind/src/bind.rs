//! Binding pass state and entry points

use std::env;

use crate::error::EnvError;
use crate::parsers::Parsers;

/// State shared by one binding pass: the variable name prefix and the
/// custom parser registry.
///
/// A `Binder` is the composable core behind the free functions
/// [`bind`], [`bind_with_prefix`], [`bind_with_parsers`] and
/// [`bind_with_prefix_and_parsers`]:
///
/// ```rust
/// use envbind::{Binder, EnvBind};
///
/// #[derive(Default, EnvBind)]
/// struct Config {
///     #[env("BINDER_DOC_PORT", default = "8080")]
///     port: u16,
/// }
///
/// let mut config = Config::default();
/// Binder::new().prefix("APP_").bind(&mut config)?;
/// assert_eq!(config.port, 8080);
/// # Ok::<(), envbind::EnvError>(())
/// ```
#[derive(Debug, Default)]
pub struct Binder {
    prefix: String,
    parsers: Parsers,
}

impl Binder {
    /// Create a binder with no prefix and no custom parsers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every variable name looked up during the pass,
    /// including inside nested configuration blocks.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Supply custom parsers for this pass.
    pub fn parsers(mut self, parsers: Parsers) -> Self {
        self.parsers = parsers;
        self
    }

    /// Run the binding pass over `target`.
    pub fn bind<T: EnvBind>(&self, target: &mut T) -> Result<(), EnvError> {
        target.bind_fields(self)
    }

    /// Full variable name for a field: prefix + annotated name.
    pub(crate) fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Resolve a field's variable against the process environment.
    ///
    /// `Ok(None)` means the variable is not set. A set-but-non-unicode
    /// value is an error, not an absence.
    pub(crate) fn lookup(&self, name: &str) -> Result<Option<String>, EnvError> {
        let full = self.var_name(name);
        match env::var(&full) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(EnvError::NotUnicode { name: full }),
        }
    }

    pub(crate) fn custom_parsers(&self) -> &Parsers {
        &self.parsers
    }
}

/// A struct whose fields can be bound from environment variables.
///
/// Implemented with `#[derive(EnvBind)]`; the derive walks the struct's
/// fields in declaration order and generates the binding body from the
/// `#[env(...)]` annotations. See the crate-level documentation for the
/// annotation syntax.
pub trait EnvBind {
    /// Bind every annotated field of `self`, fail-fast.
    ///
    /// Generated by the derive macro; call it through [`Binder::bind`] or
    /// the free functions rather than directly.
    #[doc(hidden)]
    fn bind_fields(&mut self, binder: &Binder) -> Result<(), EnvError>;

    /// Construct a value from the environment with no prefix and no custom
    /// parsers.
    fn from_env() -> Result<Self, EnvError>
    where
        Self: Default + Sized,
    {
        let mut target = Self::default();
        bind(&mut target)?;
        Ok(target)
    }
}

/// Bind `target`'s annotated fields from the process environment.
pub fn bind<T: EnvBind>(target: &mut T) -> Result<(), EnvError> {
    Binder::new().bind(target)
}

/// Bind with `prefix` prepended to every variable name, nested blocks
/// included.
pub fn bind_with_prefix<T: EnvBind>(target: &mut T, prefix: &str) -> Result<(), EnvError> {
    Binder::new().prefix(prefix).bind(target)
}

/// Bind with custom parsers taking precedence over the built-in rules.
pub fn bind_with_parsers<T: EnvBind>(target: &mut T, parsers: Parsers) -> Result<(), EnvError> {
    Binder::new().parsers(parsers).bind(target)
}

/// Bind with both a variable name prefix and custom parsers.
pub fn bind_with_prefix_and_parsers<T: EnvBind>(
    target: &mut T,
    prefix: &str,
    parsers: Parsers,
) -> Result<(), EnvError> {
    Binder::new().prefix(prefix).parsers(parsers).bind(target)
}
