//! Caller-supplied custom parsers, consulted before the built-in rules

use std::any::{Any, TypeId};
use std::collections::HashMap;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A type-erased entry holding the strongly-typed parser for one target type.
struct TypedParser<T> {
    parse: Box<dyn Fn(&str) -> Result<T, BoxError>>,
}

/// Registry of custom string-to-value parsers, keyed by target type.
///
/// A registered parser takes precedence over the built-in conversion rule
/// for its exact type, and is the only way to bind fields whose type has no
/// built-in rule. The registry is handed to a binding pass by value and
/// dropped with it; it is never retained across passes.
///
/// # Example
///
/// ```rust
/// use envbind::Parsers;
///
/// struct Endpoint {
///     host: String,
/// }
///
/// let parsers = Parsers::new().with(|raw: &str| {
///     Ok::<_, std::convert::Infallible>(Endpoint { host: raw.to_owned() })
/// });
/// assert!(!parsers.is_empty());
/// ```
#[derive(Default)]
pub struct Parsers {
    entries: HashMap<TypeId, Box<dyn Any>>,
}

impl Parsers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser for `T`, replacing any previous entry for `T`.
    pub fn register<T, E, F>(&mut self, parse: F)
    where
        T: 'static,
        E: Into<BoxError>,
        F: Fn(&str) -> Result<T, E> + 'static,
    {
        let entry = TypedParser::<T> {
            parse: Box::new(move |raw| parse(raw).map_err(Into::into)),
        };
        self.entries.insert(TypeId::of::<T>(), Box::new(entry));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<T, E, F>(mut self, parse: F) -> Self
    where
        T: 'static,
        E: Into<BoxError>,
        F: Fn(&str) -> Result<T, E> + 'static,
    {
        self.register(parse);
        self
    }

    /// Whether no parser has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered parsers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Run the registered parser for `T`, if any.
    pub(crate) fn parse<T: 'static>(&self, raw: &str) -> Option<Result<T, BoxError>> {
        let entry = self
            .entries
            .get(&TypeId::of::<T>())?
            .downcast_ref::<TypedParser<T>>()?;
        Some((entry.parse)(raw))
    }

    /// Whether a parser is registered for `T`.
    pub(crate) fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for Parsers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parsers")
            .field("len", &self.entries.len())
            .finish()
    }
}
