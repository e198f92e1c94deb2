// -----------------------------------------------------------------------------
// Modules

mod driver;
mod error_utils;

mod list_serializer;
mod map_serializer;
mod struct_serializer;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;
