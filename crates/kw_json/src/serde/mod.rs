//! `serde` drivers walking reflected values with a codec's field plans.
//!
//! - [`SerializeDriver`]: a [`Serialize`](serde_core::Serialize) view of a
//!   `&dyn Reflect`. Structs become maps keyed by the encode plan, lists
//!   become sequences, string maps become maps with sorted keys, options
//!   become `null` or their value, opaque leaves use their own `serde` impl.
//! - [`DeserializeDriver`]: a [`DeserializeSeed`](serde_core::de::DeserializeSeed)
//!   writing into a `&mut dyn Reflect` in place, keyed by the decode plan.
//!
//! Nested structs, including those inside containers, resolve their plans
//! against the same codec as the outermost value.
//!
//! With the `debug` feature and `debug_assertions`, errors raised by the
//! drivers themselves carry the stack of types being traversed.

// -----------------------------------------------------------------------------
// Debug utils

#[cfg(all(debug_assertions, feature = "debug"))]
mod info_stack;
#[cfg(all(debug_assertions, feature = "debug"))]
use info_stack::TypeInfoStack;

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::DeserializeDriver;
pub use ser::SerializeDriver;
