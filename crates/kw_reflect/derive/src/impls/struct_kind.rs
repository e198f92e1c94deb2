use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_typed};
use crate::derive_data::{FieldAccessors, ReflectStruct};

/// Implements `Typed`, `Reflect` and `Struct` for a named struct.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let typed_trait_tokens = impl_trait_typed(info);
    let reflect_trait_tokens = impl_trait_reflect(info);
    let struct_trait_tokens = impl_trait_struct(info);

    quote! {
        const _: () = {
            #typed_trait_tokens

            #reflect_trait_tokens

            #struct_trait_tokens
        };
    }
}

/// Generates the `Struct` impl.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let kw_reflect_path = info.kw_reflect_path();
    let struct_ = crate::path::struct_(kw_reflect_path);
    let reflect_ = crate::path::reflect_(kw_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(kw_reflect_path);
    let option_ = crate::path::option_();

    let FieldAccessors {
        names,
        indices,
        fields_ref,
        fields_mut,
    } = info.accessors();
    let field_count = names.len();

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#indices => #option_::Some(#names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
