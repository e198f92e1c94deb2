use std::fmt;

use serde_core::de::{MapAccess, Visitor};

use super::DeserializeDriver;

use crate::JsonCodec;
use kw_reflect::ops::Map;

/// A [`Visitor`] replacing the entries of a string-keyed [`Map`].
pub(super) struct MapVisitor<'a> {
    pub map: &'a mut dyn Map,
    pub codec: &'a JsonCodec,
    pub lenient_null: bool,
}

impl<'de> Visitor<'de> for MapVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<V>(self, mut access: V) -> Result<(), V::Error>
    where
        V: MapAccess<'de>,
    {
        let map = self.map;
        map.clear();

        while let Some(key) = access.next_key::<String>()? {
            let value = map.insert_default(key);
            let driver = DeserializeDriver::nested(value, self.codec, self.lenient_null);
            access.next_value_seed(driver)?;
        }

        Ok(())
    }
}
