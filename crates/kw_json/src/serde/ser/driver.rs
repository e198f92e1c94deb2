use serde_core::{Serialize, Serializer};

use super::list_serializer::ListSerializer;
use super::map_serializer::MapSerializer;
use super::struct_serializer::StructSerializer;

#[cfg(all(debug_assertions, feature = "debug"))]
use super::error_utils::TYPE_INFO_STACK;

use crate::JsonCodec;
use kw_reflect::Reflect;
use kw_reflect::ops::ReflectRef;

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializes a reflected value with the encode plans of a [`JsonCodec`].
///
/// Usually obtained from [`JsonCodec::serializer`]. The driver is format
/// agnostic: any `serde` serializer can consume it.
///
/// # Examples
///
/// ```
/// use kw_json::{JsonCodec, SerializeDriver};
/// use kw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Tagged {
///     #[tag(json = "_id")]
///     pub id: u32,
///     pub labels: Vec<String>,
///     pub parent: Option<u32>,
/// }
///
/// let codec = JsonCodec::new();
/// let value = Tagged { id: 7, labels: vec!["a".into()], parent: None };
///
/// let driver = SerializeDriver::new(&value, &codec);
/// let text = serde_json::to_string(&driver).unwrap();
/// assert_eq!(text, r#"{"_id":7,"labels":["a"],"parent":null}"#);
/// ```
pub struct SerializeDriver<'a> {
    value: &'a dyn Reflect,
    codec: &'a JsonCodec,
}

impl<'a> SerializeDriver<'a> {
    #[inline]
    pub const fn new(value: &'a dyn Reflect, codec: &'a JsonCodec) -> Self {
        Self { value, codec }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[cfg(all(debug_assertions, feature = "debug"))]
        TYPE_INFO_STACK.with_borrow_mut(|stack| stack.push(self.value.reflect_type_info()));

        let output: Result<S::Ok, S::Error> = match self.value.reflect_ref() {
            ReflectRef::Struct(struct_value) => StructSerializer {
                struct_value,
                codec: self.codec,
            }
            .serialize(serializer),
            ReflectRef::List(list) => ListSerializer {
                list,
                codec: self.codec,
            }
            .serialize(serializer),
            ReflectRef::Map(map) => MapSerializer {
                map,
                codec: self.codec,
            }
            .serialize(serializer),
            ReflectRef::Optional(optional) => match optional.value() {
                Some(value) => serializer.serialize_some(&SerializeDriver::new(value, self.codec)),
                None => serializer.serialize_none(),
            },
            ReflectRef::Opaque(opaque) => Serialize::serialize(opaque.as_serialize(), serializer),
        };

        #[cfg(all(debug_assertions, feature = "debug"))]
        TYPE_INFO_STACK.with_borrow_mut(|stack| stack.pop());

        output
    }
}
