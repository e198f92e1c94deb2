//! Parsing of the derive input into the data the generators need.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::FieldAttributes;
pub(crate) use reflect_struct::{FieldAccessors, ReflectStruct};
