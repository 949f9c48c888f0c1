//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::FieldAttrs;

/// Types with a built-in conversion rule, recognized by the last path
/// segment of the field's declared type.
const SCALAR_TYPES: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64", "Duration",
];

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    if let Type::Path(type_path) = ty {
        type_path.path.segments.last()
    } else {
        None
    }
}

fn generic_inner_type(segment: &syn::PathSegment) -> Option<&Type> {
    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
            return Some(inner);
        }
    }
    None
}

fn is_scalar(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|segment| {
        segment.arguments.is_empty() && SCALAR_TYPES.contains(&segment.ident.to_string().as_str())
    })
}

/// Whether the type has a built-in conversion rule: a recognized scalar or
/// a `Vec` of recognized scalars. Everything else binds through the custom
/// parser registry.
fn has_builtin_rule(ty: &Type) -> bool {
    if is_scalar(ty) {
        return true;
    }
    match last_segment(ty) {
        Some(segment) if segment.ident == "Vec" => {
            generic_inner_type(segment).is_some_and(is_scalar)
        }
        _ => false,
    }
}

/// Extract the inner type of `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty)?;
    if segment.ident == "Option" {
        generic_inner_type(segment)
    } else {
        None
    }
}

/// `EnvBind` derive macro
///
/// Implements `envbind::EnvBind` for a struct with named fields: the
/// generated `bind_fields` visits the fields in declaration order and binds
/// each annotated field from its environment variable.
///
/// # Supported annotations
///
/// - `#[env("NAME")]`: bind the field to the variable `NAME`
/// - `#[env("NAME,required")]`: absent variable is a binding error; any
///   option token other than `required` is a compile error
/// - `#[env("NAME", default = "literal")]`: default literal, converted like
///   a found value
/// - `#[env("NAME", separator = ":")]`: separator for sequence fields
/// - `#[env(nested)]`: recurse into a nested configuration block
///
/// Fields without an annotation, or with an empty variable name, are
/// skipped. See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "EnvBind only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "EnvBind only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let mut statements = Vec::new();
    for field in fields {
        match expand_field(field) {
            Ok(Some(statement)) => statements.push(statement),
            Ok(None) => {}
            Err(err) => return err.to_compile_error().into(),
        }
    }

    if statements.is_empty() {
        statements.push(quote! { let _ = binder; });
    }

    let expanded = quote! {
        #[automatically_derived]
        impl ::envbind::EnvBind for #struct_name {
            fn bind_fields(
                &mut self,
                binder: &::envbind::Binder,
            ) -> ::core::result::Result<(), ::envbind::EnvError> {
                #(#statements)*
                ::core::result::Result::Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}

/// Generate the binding statement for one field, or `None` for fields the
/// walker skips.
fn expand_field(field: &syn::Field) -> syn::Result<Option<proc_macro2::TokenStream>> {
    let Some(attrs) = FieldAttrs::from_field(field)? else {
        return Ok(None);
    };

    let field_name = field.ident.as_ref().unwrap();
    let field_type = &field.ty;

    if attrs.nested {
        let statement = if option_inner(field_type).is_some() {
            // An absent optional block is not an error.
            quote! {
                if let ::core::option::Option::Some(nested) = self.#field_name.as_mut() {
                    ::envbind::EnvBind::bind_fields(nested, binder)?;
                }
            }
        } else {
            quote! {
                ::envbind::EnvBind::bind_fields(&mut self.#field_name, binder)?;
            }
        };
        return Ok(Some(statement));
    }

    let Some(var_name) = attrs.var_name else {
        // Annotated but without a variable name: nothing to look up.
        return Ok(None);
    };

    let required = attrs.required;
    let default = match &attrs.default {
        Some(literal) => quote! { ::core::option::Option::Some(#literal) },
        None => quote! { ::core::option::Option::None },
    };
    let separator = attrs.separator.as_deref().unwrap_or(",");

    let spec = quote! {
        ::envbind::de::FieldSpec {
            name: #var_name,
            required: #required,
            default: #default,
            separator: #separator,
        }
    };

    let statement = if let Some(inner) = option_inner(field_type) {
        if attrs.default.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "Option fields cannot have a default value (they already default to None)",
            ));
        }
        if has_builtin_rule(inner) {
            quote! {
                ::envbind::de::bind_optional::<#inner>(&mut self.#field_name, binder, &#spec)?;
            }
        } else {
            let field_label = field_name.to_string();
            quote! {
                ::envbind::de::bind_custom(&mut self.#field_name, binder, #field_label, &#spec)?;
            }
        }
    } else if has_builtin_rule(field_type) {
        quote! {
            ::envbind::de::bind_value(&mut self.#field_name, binder, &#spec)?;
        }
    } else {
        let field_label = field_name.to_string();
        quote! {
            ::envbind::de::bind_custom(&mut self.#field_name, binder, #field_label, &#spec)?;
        }
    };

    Ok(Some(statement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_scalars_have_builtin_rules() {
        let types: Vec<Type> = vec![
            parse_quote!(String),
            parse_quote!(bool),
            parse_quote!(i64),
            parse_quote!(u16),
            parse_quote!(f64),
            parse_quote!(std::time::Duration),
            parse_quote!(Vec<i32>),
            parse_quote!(Vec<std::string::String>),
        ];
        for ty in &types {
            assert!(has_builtin_rule(ty), "{}", quote!(#ty));
        }
    }

    #[test]
    fn test_foreign_types_have_no_builtin_rule() {
        let types: Vec<Type> = vec![
            parse_quote!(std::net::IpAddr),
            parse_quote!(char),
            parse_quote!(Vec<Vec<i32>>),
            parse_quote!(Vec<std::net::IpAddr>),
            parse_quote!(std::collections::HashMap<String, String>),
        ];
        for ty in &types {
            assert!(!has_builtin_rule(ty), "{}", quote!(#ty));
        }
    }

    #[test]
    fn test_option_inner_extraction() {
        let ty: Type = parse_quote!(Option<u32>);
        let inner = option_inner(&ty).unwrap();
        assert!(is_scalar(inner));

        let ty: Type = parse_quote!(std::option::Option<Vec<String>>);
        assert!(has_builtin_rule(option_inner(&ty).unwrap()));

        let ty: Type = parse_quote!(Vec<u32>);
        assert!(option_inner(&ty).is_none());
    }

    #[test]
    fn test_skipped_fields_generate_no_statement() {
        let unannotated: syn::Field = parse_quote! {
            pub not_an_env: String
        };
        assert!(expand_field(&unannotated).unwrap().is_none());

        let unnamed: syn::Field = parse_quote! {
            #[env("")]
            pub unbound: String
        };
        assert!(expand_field(&unnamed).unwrap().is_none());
    }

    #[test]
    fn test_option_with_default_is_rejected() {
        let field: syn::Field = parse_quote! {
            #[env("VAR", default = "x")]
            pub var: Option<String>
        };
        let err = expand_field(&field).unwrap_err();
        assert!(err.to_string().contains("Option fields cannot have a default"));
    }
}
