//! Built-in [`Reflect`](crate::Reflect) impls and the storage cells used by
//! [`Typed`](crate::info::Typed) impls.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod map;
mod opaque;
mod option;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
