//! Derive macro for `kw_reflect`, see [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static TAG_ATTRIBUTE_NAME: &str = "tag";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// Implements `Typed`, `Reflect` and `Struct` for a struct with named fields.
///
/// Every field type must itself implement `Reflect` and `Typed`. Type
/// parameters receive those bounds automatically; lifetime parameters are
/// not supported.
///
/// ## Field annotations
///
/// `#[tag(...)]` attaches `name = "value"` pairs to a field. Names are
/// identifiers, or string literals when they are not valid identifiers.
/// Each name may appear once per field.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// pub struct Person {
///     #[tag(json = "_id")]
///     pub id: String,
///     #[tag(json = "secret", toJson = "-")]
///     pub secret: String,
///     #[tag("original-json" = "firstName")]
///     pub first_name: String,
/// }
/// ```
///
/// ## Visibility
///
/// A field declared with any `pub` visibility is recorded as exported.
/// Private fields are still reflected, but are recorded as not exported.
///
/// ## Ignored fields
///
/// `#[reflect(ignore)]` leaves a field out of the descriptor and out of
/// field access entirely.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// pub struct Session {
///     pub user: String,
///     #[reflect(ignore)]
///     pub handle: std::sync::Arc<std::sync::Mutex<()>>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect, tag))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_derive_input(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
