use serde_core::ser::SerializeMap;
use serde_core::{Serialize, Serializer};

use super::SerializeDriver;
use super::error_utils::make_custom_error;

use crate::{Direction, JsonCodec};
use kw_reflect::ops::Struct;

/// Serializes a [`Struct`] as a map of its exposed keys, in plan order.
pub(super) struct StructSerializer<'a> {
    pub struct_value: &'a dyn Struct,
    pub codec: &'a JsonCodec,
}

impl Serialize for StructSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let struct_info = match self.struct_value.reflect_type_info().as_struct() {
            Ok(info) => info,
            Err(err) => return Err(make_custom_error(err)),
        };

        let plan = self.codec.plan_for(Direction::Encode, struct_info);

        let mut state = serializer.serialize_map(Some(plan.exposed_len()))?;

        for (index, key) in plan.iter_exposed() {
            let Some(value) = self.struct_value.field_at(index) else {
                return Err(make_custom_error(format!(
                    "field at index `{index}` was missing while serializing `{}`",
                    struct_info.type_path()
                )));
            };
            state.serialize_entry(key, &SerializeDriver::new(value, self.codec))?;
        }

        state.end()
    }
}
