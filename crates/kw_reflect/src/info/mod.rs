//! Static type descriptors.
//!
//! - [`Type`]: a [`TypeId`](core::any::TypeId) paired with the type's path.
//! - [`TypeInfo`]: the descriptor of one type, one of:
//!     - [`StructInfo`]: a named struct and its ordered [`NamedField`]s.
//!     - [`ListInfo`]: a growable sequence such as `Vec<T>`.
//!     - [`MapInfo`]: a string-keyed map such as `BTreeMap<String, V>`.
//!     - [`OptionalInfo`]: `Option<T>`.
//!     - [`OpaqueInfo`]: a leaf value serialized as a whole.
//! - [`FieldTags`]: the `name = "value"` annotations attached to a field.
//! - [`Typed`] / [`DynamicTyped`]: static and dynamic access to a [`TypeInfo`].

// -----------------------------------------------------------------------------
// Modules

mod container_info;
mod field_info;
mod field_tags;
mod struct_info;
mod ty;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use container_info::{ListInfo, MapInfo, OpaqueInfo, OptionalInfo};
pub use field_info::NamedField;
pub use field_tags::FieldTags;
pub use struct_info::StructInfo;
pub use ty::Type;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use typed::{DynamicTyped, Typed};
