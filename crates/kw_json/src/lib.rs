#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod chain;
mod codec;
mod error;
mod naming;
mod plan;
mod serde;
mod settings;

// -----------------------------------------------------------------------------
// Exports

pub use cache::PlanCache;
pub use chain::{EXCLUSION_MARKER, TagChain, TagStep};
pub use codec::{JsonCodec, marshal, marshal_pretty, unmarshal};
pub use error::{DecodeError, EncodeError};
pub use naming::NamingRule;
pub use plan::{ExposedKey, FieldDecision, FieldPlan};
pub use crate::serde::{DeserializeDriver, SerializeDriver};
pub use settings::{Direction, TagSettings};
