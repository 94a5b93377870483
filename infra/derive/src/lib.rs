#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! This crate provides attribute macros to cut the boilerplate of the
//! workspace error convention (context-carrying `thiserror` enums).

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// This macro transforms a standard enum into a fully-featured error type
/// following the workspace conventions.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`; do not
///   add those derives yourself.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source`
///   field, enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>`
///   implementations if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field (or a field
///    marked `#[source]`/`#[from]`) together with a `context` field.
/// 4. At most one error enum per module: the expansion emits a module-local
///    `format_context` helper used by the `#[error(...)]` format strings.
///
/// # Example
///
/// ```rust,ignore
/// use dforge_derive::dforge_error;
/// use std::borrow::Cow;
///
/// #[dforge_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io {
///         source: std::io::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn dforge_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(&input).into()
}
