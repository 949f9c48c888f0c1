//! Binding helpers for derive-generated code
//!
//! The derive macro compiles each annotated field into a call to one of the
//! helpers in this module. They are public so generated code can reach them
//! but are not part of the supported API surface.

use crate::bind::Binder;
use crate::error::EnvError;
use crate::value::EnvValue;

/// Per-field binding metadata, generated from the `#[env(...)]` annotation.
#[doc(hidden)]
#[derive(Debug)]
pub struct FieldSpec {
    /// Annotated variable name, without prefix
    pub name: &'static str,
    /// Whether the variable must be set
    pub required: bool,
    /// Default literal, run through the conversion path when the variable
    /// is absent
    pub default: Option<&'static str>,
    /// Separator for sequence fields
    pub separator: &'static str,
}

/// Resolve the raw text for a field: environment value, then default.
///
/// `Ok(None)` means the field should keep its current value.
fn resolve(binder: &Binder, spec: &FieldSpec) -> Result<Option<String>, EnvError> {
    if let Some(value) = binder.lookup(spec.name)? {
        return Ok(Some(value));
    }
    if spec.required {
        return Err(EnvError::missing(binder.var_name(spec.name)));
    }
    Ok(spec.default.map(str::to_owned))
}

/// Convert raw text, consulting the custom parser registry before the
/// built-in rule for `T`.
fn convert<T>(binder: &Binder, spec: &FieldSpec, raw: &str) -> Result<T, EnvError>
where
    T: EnvValue + 'static,
{
    if let Some(result) = binder.custom_parsers().parse::<T>(raw) {
        return result.map_err(EnvError::custom);
    }
    T::parse_env(raw, spec.separator)
        .map_err(|e| EnvError::parse_error::<T>(binder.var_name(spec.name), e))
}

/// Bind a field with a built-in conversion rule.
#[doc(hidden)]
pub fn bind_value<T>(slot: &mut T, binder: &Binder, spec: &FieldSpec) -> Result<(), EnvError>
where
    T: EnvValue + 'static,
{
    if let Some(raw) = resolve(binder, spec)? {
        *slot = convert(binder, spec, &raw)?;
    }
    Ok(())
}

/// Bind an `Option<T>` field with a built-in inner conversion rule.
///
/// An absent variable leaves the slot untouched; a present value (or
/// default literal) parses into `Some`.
#[doc(hidden)]
pub fn bind_optional<T>(
    slot: &mut Option<T>,
    binder: &Binder,
    spec: &FieldSpec,
) -> Result<(), EnvError>
where
    T: EnvValue + 'static,
{
    if let Some(raw) = resolve(binder, spec)? {
        *slot = Some(convert(binder, spec, &raw)?);
    }
    Ok(())
}

/// Bind a field whose type has no built-in conversion rule.
///
/// Such a field is only bindable through the custom parser registry; with
/// no parser registered for `T` the whole pass fails, whether or not the
/// variable is set.
#[doc(hidden)]
pub fn bind_custom<T>(
    slot: &mut T,
    binder: &Binder,
    field: &'static str,
    spec: &FieldSpec,
) -> Result<(), EnvError>
where
    T: 'static,
{
    if !binder.custom_parsers().contains::<T>() {
        return Err(EnvError::unsupported::<T>(field));
    }
    if let Some(raw) = resolve(binder, spec)? {
        match binder.custom_parsers().parse::<T>(&raw) {
            Some(result) => *slot = result.map_err(EnvError::custom)?,
            None => return Err(EnvError::unsupported::<T>(field)),
        }
    }
    Ok(())
}
