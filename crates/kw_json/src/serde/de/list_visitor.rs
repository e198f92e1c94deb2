use std::fmt;

use serde_core::Deserializer;
use serde_core::de::{DeserializeSeed, SeqAccess, Visitor};

use super::DeserializeDriver;

use crate::JsonCodec;
use kw_reflect::ops::List;

/// A [`Visitor`] replacing the items of a [`List`].
pub(super) struct ListVisitor<'a> {
    pub list: &'a mut dyn List,
    pub codec: &'a JsonCodec,
    pub lenient_null: bool,
}

impl<'de> Visitor<'de> for ListVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<(), V::Error>
    where
        V: SeqAccess<'de>,
    {
        let list = self.list;
        list.clear();

        while seq
            .next_element_seed(ItemSeed {
                list: &mut *list,
                codec: self.codec,
                lenient_null: self.lenient_null,
            })?
            .is_some()
        {}

        Ok(())
    }
}

/// Appends a default item, then decodes into it.
struct ItemSeed<'a> {
    list: &'a mut dyn List,
    codec: &'a JsonCodec,
    lenient_null: bool,
}

impl<'de> DeserializeSeed<'de> for ItemSeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        let item = self.list.push_default();
        DeserializeDriver::nested(item, self.codec, self.lenient_null).deserialize(deserializer)
    }
}
