use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Index, Type, Visibility};

use super::FieldAttributes;

/// One declared field of the derived struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub exported: bool,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The name recorded in the descriptor, `r#` prefix removed.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// A named struct accepted by `#[derive(Reflect)]`.
pub(crate) struct ReflectStruct<'a> {
    kw_reflect_path: syn::Path,
    ident: &'a Ident,
    generics: &'a Generics,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Reflect` can only be derived for structs with named fields",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "`Reflect` can only be derived for structs with named fields",
            ));
        };

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Reflect` cannot be derived for types with lifetime parameters",
            ));
        }

        let fields = named
            .named
            .iter()
            .map(|field| {
                let ident = field
                    .ident
                    .as_ref()
                    .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
                Ok(StructField {
                    ident,
                    ty: &field.ty,
                    exported: !matches!(field.vis, Visibility::Inherited),
                    attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            kw_reflect_path: crate::path::kw_reflect(),
            ident: &ast.ident,
            generics: &ast.generics,
            fields,
        })
    }

    #[inline]
    pub fn kw_reflect_path(&self) -> &syn::Path {
        &self.kw_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Fields not marked `#[reflect(ignore)]`, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.ignore)
    }

    /// `true` when the type has type or const parameters, so one `static`
    /// cell is shared by several instantiations.
    pub fn is_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    /// Splits generics for an impl block, adding `Reflect + Typed` bounds
    /// to every type parameter and every active field type.
    pub fn split_generics(&self) -> (TokenStream, TokenStream, TokenStream) {
        let reflect_ = crate::path::reflect_(&self.kw_reflect_path);
        let typed_ = crate::path::typed_(&self.kw_reflect_path);

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates = where_clause
            .map(|clause| clause.predicates.iter().map(|p| quote!(#p)).collect::<Vec<_>>())
            .unwrap_or_default();

        if self.is_generic() {
            for param in self.generics.type_params() {
                let ident = &param.ident;
                predicates.push(quote!(#ident: #reflect_ + #typed_));
            }
            for field in self.active_fields() {
                let ty = field.ty;
                predicates.push(quote!(#ty: #reflect_ + #typed_));
            }
        }

        let where_tokens = if predicates.is_empty() {
            TokenStream::new()
        } else {
            quote!(where #(#predicates,)*)
        };

        (quote!(#impl_generics), quote!(#ty_generics), where_tokens)
    }

    /// Field access expressions, for use in `match` arms.
    pub fn accessors(&self) -> FieldAccessors {
        let members = self.active_fields().map(|field| field.ident).collect::<Vec<_>>();
        FieldAccessors {
            names: self.active_fields().map(StructField::name).collect(),
            indices: (0..members.len()).map(Index::from).collect(),
            fields_ref: members.iter().map(|ident| quote!(&self.#ident)).collect(),
            fields_mut: members.iter().map(|ident| quote!(&mut self.#ident)).collect(),
        }
    }
}

/// Parallel lists describing the active fields.
pub(crate) struct FieldAccessors {
    pub names: Vec<String>,
    pub indices: Vec<Index>,
    pub fields_ref: Vec<TokenStream>,
    pub fields_mut: Vec<TokenStream>,
}
