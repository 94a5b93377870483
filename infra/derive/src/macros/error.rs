use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Type};

pub(crate) fn expand(input: &DeriveInput) -> TokenStream {
    let enum_name = &input.ident;
    let ext_trait = format_ident!("{}Ext", enum_name);

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(enum_name, "dforge_error can only be applied to enums")
            .to_compile_error();
    };

    let mut context_arms = Vec::new();
    let mut source_impls = Vec::new();
    let mut has_internal = false;

    for variant in &data.variants {
        let v_ident = &variant.ident;
        let Fields::Named(fields) = &variant.fields else {
            return syn::Error::new_spanned(
                variant,
                "dforge_error requires named fields for source/context handling",
            )
            .to_compile_error();
        };

        let cfg_attrs: Vec<&Attribute> =
            variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect();

        let context_field = fields.named.iter().find(|f| named(f, "context"));
        if let Some(field) = context_field {
            if !is_context_type(&field.ty) {
                return syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                )
                .to_compile_error();
            }
            context_arms.push(quote! {
                #(#cfg_attrs)*
                #enum_name::#v_ident { context: slot, .. } => *slot = Some(context.into()),
            });
        }

        if v_ident == "Internal" {
            has_internal = true;
            continue;
        }

        let source_field = fields.named.iter().find(|f| {
            named(f, "source")
                || f.attrs
                    .iter()
                    .any(|attr| attr.path().is_ident("source") || attr.path().is_ident("from"))
        });
        let Some(field) = source_field else { continue };

        if context_field.is_none() {
            return syn::Error::new_spanned(
                v_ident,
                "dforge_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            )
            .to_compile_error();
        }

        let Some(s_ident) = &field.ident else { continue };
        let s_ty = &field.ty;
        source_impls.push(quote! {
            #(#cfg_attrs)*
            #[automatically_derived]
            impl From<#s_ty> for #enum_name {
                #[inline]
                fn from(#s_ident: #s_ty) -> Self { Self::#v_ident { #s_ident, context: None } }
            }

            #(#cfg_attrs)*
            impl<T> #ext_trait<T> for std::result::Result<T, #s_ty> {
                #[inline]
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #enum_name> {
                    self.map_err(|#s_ident| #enum_name::#v_ident { #s_ident, context: Some(context.into()) })
                }
            }
        });
    }

    let internal_impls = has_internal.then(|| {
        quote! {
            impl From<&'static str> for #enum_name {
                #[inline]
                fn from(s: &'static str) -> Self {
                    Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None }
                }
            }
            impl From<String> for #enum_name {
                #[inline]
                fn from(s: String) -> Self {
                    Self::Internal { message: std::borrow::Cow::Owned(s), context: None }
                }
            }
        }
    });

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #[derive(Debug, ::thiserror::Error)]
        #input

        pub trait #ext_trait<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #enum_name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #enum_name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    #[allow(unreachable_patterns)]
                    match &mut e {
                        #(#context_arms)*
                        _ => {}
                    }
                    e
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn named(field: &Field, name: &str) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == name)
}

// Accepts the exact conventional spelling, with or without the std::borrow path.
fn is_context_type(ty: &Type) -> bool {
    let rendered = ty.to_token_stream().to_string().replace(' ', "");
    rendered == "Option<Cow<'static,str>>"
        || rendered == "Option<std::borrow::Cow<'static,str>>"
}
