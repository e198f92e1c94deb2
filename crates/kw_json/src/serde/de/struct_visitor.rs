use std::fmt;

use serde_core::de::{IgnoredAny, MapAccess, Visitor};

use super::DeserializeDriver;
use super::error_utils::make_custom_error;

use crate::{FieldPlan, JsonCodec};
use kw_reflect::info::StructInfo;
use kw_reflect::ops::Struct;

/// Reads a map into a [`Struct`], routing every key through the decode plan.
pub(super) struct StructVisitor<'a> {
    pub struct_value: &'a mut dyn Struct,
    pub struct_info: &'static StructInfo,
    pub plan: &'a FieldPlan,
    pub codec: &'a JsonCodec,
    pub lenient_null: bool,
}

impl<'de> Visitor<'de> for StructVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a map for struct `{}`", self.struct_info.type_path())
    }

    fn visit_map<V>(self, mut map: V) -> Result<(), V::Error>
    where
        V: MapAccess<'de>,
    {
        while let Some(key) = map.next_key::<String>()? {
            let Some(index) = self.plan.index_of_key(&key) else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            let Some(field) = self.struct_value.field_at_mut(index) else {
                return Err(make_custom_error(format!(
                    "no field at index `{index}` on struct `{}`",
                    self.struct_info.type_path(),
                )));
            };

            let driver = DeserializeDriver::nested(field, self.codec, self.lenient_null);
            map.next_value_seed(driver)?;
        }

        Ok(())
    }
}
