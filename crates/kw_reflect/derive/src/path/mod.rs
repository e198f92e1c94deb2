//! Paths into `kw_reflect` used by generated code.
//!
//! Kept in one place so a layout change in `kw_reflect` only touches this
//! module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Path to the `kw_reflect` crate as seen from the deriving crate.
///
/// - crates depending on `kw_reflect` get `::kw_reflect`.
/// - crates depending on the `keyway` facade get `::keyway::reflect`.
/// - anything else falls back to `::kw_reflect`.
///
/// Reads the caller's `Cargo.toml`, so it is resolved once per derive.
pub(crate) fn kw_reflect() -> syn::Path {
    kw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("kw_reflect"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! define_path {
    ($($name:ident => $($segment:ident)::+;)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $name(kw_reflect_path: &syn::Path) -> TokenStream {
                quote! { #kw_reflect_path $(:: $segment)+ }
            }
        )*
    };
}

define_path! {
    reflect_ => Reflect;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    named_field_ => info::NamedField;
    reflect_kind_ => info::ReflectKind;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    struct_ => ops::Struct;
    struct_field_iter_ => ops::StructFieldIter;
    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}
