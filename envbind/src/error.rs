//! Error types for environment variable binding

/// Errors that can occur when binding a struct from environment variables.
///
/// This error type covers the failure scenarios of a binding pass:
/// - Missing required environment variables
/// - Values that cannot be converted into the field's type
/// - Fields whose type has no conversion rule and no registered parser
/// - Failures reported by caller-registered custom parsers
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Required environment variable is not set.
    ///
    /// Occurs when a field is annotated with the `required` option and its
    /// (possibly prefixed) environment variable is not found.
    #[error("environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing environment variable, prefix included
        name: String,
    },

    /// Failed to convert an environment variable value into the field's type.
    ///
    /// The message names the offending text; for sequence fields it also
    /// identifies the failing element and preserves the element parser's
    /// own message.
    #[error("failed to parse environment variable '{name}' as {type_name}: {message}")]
    Parse {
        /// Name of the environment variable being parsed, prefix included
        name: String,
        /// Fully qualified type name that conversion was attempted for
        type_name: String,
        /// Message from the conversion rule
        message: String,
    },

    /// A field's declared type has no built-in conversion rule and no
    /// custom parser was registered for it.
    ///
    /// Raised whether or not the variable is set: an unbindable field is a
    /// configuration mistake, not a missing value.
    #[error("field '{field}' has unsupported type {type_name} and no custom parser is registered")]
    Unsupported {
        /// Name of the struct field
        field: String,
        /// Fully qualified type name of the field
        type_name: String,
    },

    /// A registered custom parser returned an error.
    ///
    /// The underlying message is preserved behind a fixed prefix.
    #[error("custom parser error: {message}")]
    Custom {
        /// Message from the custom parser
        message: String,
    },

    /// The environment variable is set but its value is not valid unicode.
    #[error("environment variable '{name}' is not valid unicode")]
    NotUnicode {
        /// Name of the environment variable, prefix included
        name: String,
    },
}

impl EnvError {
    /// Create a parse error (used by the binding helpers)
    #[doc(hidden)]
    pub fn parse_error<T>(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing environment variable error (used by the binding helpers)
    #[doc(hidden)]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Create an unsupported type error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unsupported<T>(field: impl Into<String>) -> Self {
        Self::Unsupported {
            field: field.into(),
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Wrap a custom parser failure (used by the binding helpers)
    #[doc(hidden)]
    pub fn custom(message: impl std::fmt::Display) -> Self {
        Self::Custom {
            message: message.to_string(),
        }
    }
}
