//! Access traits for reflected values.
//!
//! Each [`ReflectKind`](crate::info::ReflectKind) has a subtrait of
//! [`Reflect`](crate::Reflect), reached through
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) and
//! [`Reflect::reflect_mut`](crate::Reflect::reflect_mut):
//!
//! - [`Struct`]: declared fields by name or by index.
//! - [`List`]: a growable sequence (e.g. `Vec<T>`).
//! - [`Map`]: string-keyed entries (e.g. `BTreeMap<String, V>`).
//! - [`Optional`]: `Option<T>`.
//! - [`Opaque`]: a leaf value serialized as a whole through `serde`.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod opaque_ops;
mod optional_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use opaque_ops::Opaque;
pub use optional_ops::Optional;
pub use struct_ops::{Struct, StructFieldIter};
