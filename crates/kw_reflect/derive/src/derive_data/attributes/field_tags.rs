use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Token};

/// One `name = "value"` pair of a `#[tag(...)]` list.
struct TagEntry {
    name: String,
    span: Span,
    value: LitStr,
}

impl Parse for TagEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let (name, span) = if input.peek(LitStr) {
            let lit = input.parse::<LitStr>()?;
            (lit.value(), lit.span())
        } else {
            let ident = input.call(Ident::parse_any)?;
            (ident.unraw().to_string(), ident.span())
        };

        if name.is_empty() {
            return Err(syn::Error::new(span, "tag name must not be empty"));
        }

        input.parse::<Token![=]>()?;
        let value = input.parse::<LitStr>()?;

        Ok(Self { name, span, value })
    }
}

/// All tags of one field, in declaration order.
///
/// Corresponds to `kw_reflect::info::FieldTags`.
#[derive(Default)]
pub(crate) struct FieldTags {
    entries: Vec<(String, LitStr)>,
}

impl core::fmt::Debug for FieldTags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, value)| (name, value.value())))
            .finish()
    }
}

impl FieldTags {
    /// Parses the content of one `#[tag(...)]`, which may be repeated on a
    /// field. A name seen before on the same field is an error.
    pub fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        let entries = Punctuated::<TagEntry, Token![,]>::parse_terminated(input)?;
        for entry in entries {
            if self.entries.iter().any(|(name, _)| *name == entry.name) {
                return Err(syn::Error::new(
                    entry.span,
                    format!("duplicate tag `{}`", entry.name),
                ));
            }
            self.entries.push((entry.name, entry.value));
        }
        Ok(())
    }

    /// Returns `.with_tags(&[("name", "value"), ...])`, or nothing when empty.
    pub fn get_expression_with(&self) -> TokenStream {
        if self.entries.is_empty() {
            return TokenStream::new();
        }

        let pairs = self.entries.iter().map(|(name, value)| {
            quote! { (#name, #value) }
        });

        quote! {
            .with_tags(&[ #(#pairs),* ])
        }
    }
}
