//! Attribute parsing for `#[env(...)]` annotations

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Field, LitStr, Meta, Token};

/// Parsed `#[env(...)]` annotation from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable name. `None` means the field is not bound to
    /// any variable, regardless of the other carriers.
    pub var_name: Option<String>,
    /// Whether an absent variable is a binding error
    pub required: bool,
    /// Default literal, converted exactly like a found value
    pub default: Option<String>,
    /// Separator for sequence fields
    pub separator: Option<String>,
    /// Recurse into the field as a nested configuration block
    pub nested: bool,
}

/// One argument inside `#[env(...)]`: the leading name specification
/// string, a `default`/`separator` carrier, or the `nested` marker.
/// Anything else is rejected, naming the offender.
enum EnvArg {
    Name(LitStr),
    Default(LitStr),
    Separator(LitStr),
    Nested,
}

impl Parse for EnvArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Name(input.parse()?));
        }
        let ident: syn::Ident = input.parse()?;
        if ident == "nested" {
            Ok(Self::Nested)
        } else if ident == "default" {
            input.parse::<Token![=]>()?;
            Ok(Self::Default(input.parse()?))
        } else if ident == "separator" {
            input.parse::<Token![=]>()?;
            Ok(Self::Separator(input.parse()?))
        } else {
            Err(syn::Error::new(
                ident.span(),
                format!("unsupported env attribute `{ident}`"),
            ))
        }
    }
}

impl FieldAttrs {
    /// Extract the `#[env(...)]` annotation from a field.
    ///
    /// Returns `Ok(None)` for fields with no annotation at all — those are
    /// skipped silently by the walker.
    pub fn from_field(field: &Field) -> syn::Result<Option<Self>> {
        let mut attrs = Self::default();
        let mut annotated = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            annotated = true;

            // A bare `#[env]` carries no arguments.
            if matches!(attr.meta, Meta::Path(_)) {
                continue;
            }

            let args = attr.parse_args_with(Punctuated::<EnvArg, Token![,]>::parse_terminated)?;
            for arg in args {
                match arg {
                    EnvArg::Name(spec) => parse_name_spec(&spec, &mut attrs)?,
                    EnvArg::Default(lit) => attrs.default = Some(lit.value()),
                    EnvArg::Separator(lit) => attrs.separator = Some(lit.value()),
                    EnvArg::Nested => attrs.nested = true,
                }
            }
        }

        if !annotated {
            return Ok(None);
        }

        if attrs.nested
            && (attrs.var_name.is_some()
                || attrs.required
                || attrs.default.is_some()
                || attrs.separator.is_some())
        {
            return Err(syn::Error::new_spanned(
                field,
                "`nested` cannot be combined with other env attributes",
            ));
        }

        Ok(Some(attrs))
    }
}

/// Parse the name specification string: `name[,option[,option...]]`.
///
/// The first comma-delimited token is the variable name and may be empty;
/// empty option tokens are valid and ignored. Only `required` is a
/// recognized option.
fn parse_name_spec(spec: &LitStr, attrs: &mut FieldAttrs) -> syn::Result<()> {
    let raw = spec.value();
    let mut tokens = raw.split(',');

    if let Some(name) = tokens.next() {
        if !name.is_empty() {
            attrs.var_name = Some(name.to_owned());
        }
    }

    for token in tokens {
        match token {
            "" => {}
            "required" => attrs.required = true,
            other => {
                return Err(syn::Error::new(
                    spec.span(),
                    format!("env option `{other}` is not supported"),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn attrs_of(field: Field) -> syn::Result<Option<FieldAttrs>> {
        FieldAttrs::from_field(&field)
    }

    #[test]
    fn test_parse_name() {
        let attrs = attrs_of(parse_quote! {
            #[env("DATABASE_URL")]
            pub database_url: String
        })
        .unwrap()
        .unwrap();

        assert_eq!(attrs.var_name, Some("DATABASE_URL".to_string()));
        assert!(!attrs.required);
    }

    #[test]
    fn test_parse_required_option() {
        let attrs = attrs_of(parse_quote! {
            #[env("SECRET_KEY,required")]
            pub secret_key: String
        })
        .unwrap()
        .unwrap();

        assert_eq!(attrs.var_name, Some("SECRET_KEY".to_string()));
        assert!(attrs.required);
    }

    #[test]
    fn test_trailing_comma_is_valid() {
        let attrs = attrs_of(parse_quote! {
            #[env("VAR,")]
            pub var: String
        })
        .unwrap()
        .unwrap();

        assert_eq!(attrs.var_name, Some("VAR".to_string()));
        assert!(!attrs.required);
    }

    #[test]
    fn test_unrecognized_option_is_rejected() {
        let err = attrs_of(parse_quote! {
            #[env("VAR,not_supported!")]
            pub var: String
        })
        .unwrap_err();

        assert!(err.to_string().contains("`not_supported!` is not supported"));
    }

    #[test]
    fn test_unrecognized_option_rejected_even_beside_required() {
        let err = attrs_of(parse_quote! {
            #[env("SECRET_KEY,required,option1")]
            pub secret_key: String
        })
        .unwrap_err();

        assert!(err.to_string().contains("`option1` is not supported"));
    }

    #[test]
    fn test_empty_name_leaves_field_unbound() {
        let attrs = attrs_of(parse_quote! {
            #[env("", default = "x")]
            pub var: String
        })
        .unwrap()
        .unwrap();

        assert_eq!(attrs.var_name, None);
        assert_eq!(attrs.default, Some("x".to_string()));
    }

    #[test]
    fn test_parse_default_carrier() {
        let attrs = attrs_of(parse_quote! {
            #[env("DATABASE_URL", default = "postgres://localhost:5432/db")]
            pub database_url: String
        })
        .unwrap()
        .unwrap();

        assert_eq!(
            attrs.default,
            Some("postgres://localhost:5432/db".to_string())
        );
    }

    #[test]
    fn test_parse_separator_carrier() {
        let attrs = attrs_of(parse_quote! {
            #[env("SEPSTRINGS", separator = ":")]
            pub sep_strings: Vec<String>
        })
        .unwrap()
        .unwrap();

        assert_eq!(attrs.separator, Some(":".to_string()));
    }

    #[test]
    fn test_parse_nested() {
        let attrs = attrs_of(parse_quote! {
            #[env(nested)]
            pub inner: Inner
        })
        .unwrap()
        .unwrap();

        assert!(attrs.nested);
    }

    #[test]
    fn test_nested_rejects_other_attributes() {
        let err = attrs_of(parse_quote! {
            #[env("VAR", nested)]
            pub inner: Inner
        })
        .unwrap_err();

        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn test_unsupported_attribute_key() {
        let err = attrs_of(parse_quote! {
            #[env("VAR", from_file)]
            pub var: String
        })
        .unwrap_err();

        assert!(err.to_string().contains("unsupported env attribute `from_file`"));
    }

    #[test]
    fn test_no_annotation_is_skipped() {
        let attrs = attrs_of(parse_quote! {
            pub not_an_env: String
        })
        .unwrap();

        assert!(attrs.is_none());
    }

    #[test]
    fn test_multiple_attributes_merge() {
        let attrs = attrs_of(parse_quote! {
            #[env("VAR,required")]
            #[env(default = "fallback")]
            pub var: String
        })
        .unwrap()
        .unwrap();

        assert_eq!(attrs.var_name, Some("VAR".to_string()));
        assert!(attrs.required);
        assert_eq!(attrs.default, Some("fallback".to_string()));
    }
}
