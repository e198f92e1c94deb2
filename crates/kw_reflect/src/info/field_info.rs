use core::any::{Any, TypeId};

use crate::info::{FieldTags, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Descriptor of one declared struct field.
///
/// # Examples
///
/// ```
/// use kw_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[tag(json = "a")]
///     pub field_a: f32,
///     field_b: bool,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
///
/// let a = info.field_at(0).unwrap();
/// assert!(a.type_is::<f32>());
/// assert_eq!(a.name(), "field_a");
/// assert!(a.is_exported());
/// assert_eq!(a.tags().get("json"), Some("a"));
///
/// let b = info.field_at(1).unwrap();
/// assert!(!b.is_exported());
/// assert!(b.tags().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    exported: bool,
    tags: FieldTags,
    // created on first access
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates an exported, untagged field called `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            exported: true,
            tags: FieldTags::EMPTY,
            type_info: T::type_info,
        }
    }

    /// Sets whether the field is visible outside its defining module.
    #[inline]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    #[inline]
    pub const fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = FieldTags::new(tags);
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// The declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `false` for fields only visible inside their module. Such fields are
    /// never given an external key.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    #[inline]
    pub const fn tags(&self) -> &FieldTags {
        &self.tags
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
