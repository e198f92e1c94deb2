//! Field-level attributes: `#[reflect(...)]` and `#[tag(...)]`.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod field_tags;

// -----------------------------------------------------------------------------
// Internal API

use field_tags::FieldTags;

pub(crate) use field_attributes::FieldAttributes;
