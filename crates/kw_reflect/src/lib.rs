#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `::kw_reflect`, which must also resolve
// inside the crate itself.
extern crate self as kw_reflect;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use info::Typed;
pub use kw_reflect_derive as derive;
pub use reflection::Reflect;

#[doc(hidden)]
pub mod __macro_exports {
    pub use erased_serde;
}
