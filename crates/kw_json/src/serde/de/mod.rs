// -----------------------------------------------------------------------------
// Modules

mod driver;
mod error_utils;

mod list_visitor;
mod map_visitor;
mod option_visitor;
mod struct_visitor;

// -----------------------------------------------------------------------------
// Exports

pub use driver::DeserializeDriver;
