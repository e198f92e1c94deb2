use proc_macro2::TokenStream;
use syn::{Attribute, Meta};

use super::FieldTags;
use crate::{REFLECT_ATTRIBUTE_NAME, TAG_ATTRIBUTE_NAME};

/// Attributes of one struct field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(ignore)]`
    pub ignore: bool,
    /// `#[tag(...)]`
    tags: FieldTags,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                let Meta::List(list) = &attr.meta else {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected `#[reflect(...)]`",
                    ));
                };
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("ignore") {
                        out.ignore = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported field attribute, expected `ignore`"))
                    }
                })?;
            } else if attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                let Meta::List(list) = &attr.meta else {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected `#[tag(name = \"value\", ...)]`",
                    ));
                };
                list.parse_args_with(|input: syn::parse::ParseStream| {
                    out.tags.parse_inner_stream(input)
                })?;
            }
        }

        Ok(out)
    }

    #[inline]
    pub fn with_tags_expression(&self) -> TokenStream {
        self.tags.get_expression_with()
    }
}
