#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use kw_json as json;
pub use kw_reflect as reflect;
pub use kw_utils as utils;

/// Commonly used items, `use keyway::prelude::*;` to import them.
pub mod prelude {
    pub use kw_json::{JsonCodec, NamingRule, marshal, unmarshal};
    pub use kw_reflect::derive::Reflect;
    pub use kw_reflect::{Reflect, Typed};
}
