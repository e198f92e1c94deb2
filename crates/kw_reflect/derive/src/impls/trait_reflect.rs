use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates the `Reflect` impl of a struct.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let kw_reflect_path = info.kw_reflect_path();
    let reflect_ = crate::path::reflect_(kw_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(kw_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(kw_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(kw_reflect_path);

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }
        }
    }
}
