use std::fmt;

use serde_core::Deserializer;
use serde_core::de::{DeserializeSeed, Error, Visitor};

use super::DeserializeDriver;

use crate::JsonCodec;
use kw_reflect::ops::Optional;

/// A [`Visitor`] for [`Optional`] values.
pub(super) struct OptionVisitor<'a> {
    pub optional: &'a mut dyn Optional,
    pub codec: &'a JsonCodec,
    pub lenient_null: bool,
}

impl<'de> Visitor<'de> for OptionVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an optional value")
    }

    fn visit_none<E: Error>(self) -> Result<(), E> {
        self.optional.set_none();
        Ok(())
    }

    fn visit_unit<E: Error>(self) -> Result<(), E> {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = self.optional.get_or_insert_default();
        DeserializeDriver::nested(value, self.codec, self.lenient_null).deserialize(deserializer)
    }
}
