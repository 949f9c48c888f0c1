//! Built-in conversion rules from environment variable text to field values

use std::fmt;
use std::time::Duration;

/// A type with a built-in conversion rule from environment variable text.
///
/// Implemented for `String`, `bool`, the integer and float primitives,
/// [`Duration`] and `Vec<T>` of each of those. The `separator` argument is
/// only meaningful for sequence types, which split the raw value before
/// converting each element; scalar rules ignore it.
///
/// Conversion is pure: no environment access, no field context. The binding
/// layer attaches the variable name and target type to failures.
pub trait EnvValue: Sized {
    /// Convert raw environment variable text into a value.
    fn parse_env(raw: &str, separator: &str) -> Result<Self, ValueError>;
}

/// Failure of a single conversion rule, before field context is attached.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ValueError {
    message: String,
}

impl ValueError {
    fn invalid(raw: &str, cause: impl fmt::Display) -> Self {
        Self {
            message: format!("invalid value '{raw}': {cause}"),
        }
    }

    fn element(index: usize, cause: ValueError) -> Self {
        Self {
            message: format!("element {index}: {cause}"),
        }
    }
}

impl EnvValue for String {
    fn parse_env(raw: &str, _separator: &str) -> Result<Self, ValueError> {
        Ok(raw.to_owned())
    }
}

impl EnvValue for bool {
    fn parse_env(raw: &str, _separator: &str) -> Result<Self, ValueError> {
        // Case-insensitive true/false (with t/f shorthand) plus 1/0.
        match raw.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => Ok(true),
            "0" | "f" | "false" => Ok(false),
            _ => Err(ValueError::invalid(
                raw,
                "expected a boolean literal (true/false, t/f or 1/0)",
            )),
        }
    }
}

macro_rules! from_str_rule {
    ($($ty:ty),* $(,)?) => {$(
        impl EnvValue for $ty {
            fn parse_env(raw: &str, _separator: &str) -> Result<Self, ValueError> {
                raw.parse().map_err(|e| ValueError::invalid(raw, e))
            }
        }
    )*};
}

from_str_rule!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl EnvValue for Duration {
    fn parse_env(raw: &str, _separator: &str) -> Result<Self, ValueError> {
        humantime::parse_duration(raw).map_err(|e| ValueError::invalid(raw, e))
    }
}

impl<T: EnvValue> EnvValue for Vec<T> {
    fn parse_env(raw: &str, separator: &str) -> Result<Self, ValueError> {
        raw.split(separator)
            .enumerate()
            .map(|(index, token)| {
                T::parse_env(token, separator).map_err(|cause| ValueError::element(index, cause))
            })
            .collect()
    }
}
