use std::fmt;

use serde_core::Deserializer;
use serde_core::de::{DeserializeSeed, Error, Visitor};

use super::error_utils::make_custom_error;
use super::list_visitor::ListVisitor;
use super::map_visitor::MapVisitor;
use super::option_visitor::OptionVisitor;
use super::struct_visitor::StructVisitor;

#[cfg(all(debug_assertions, feature = "debug"))]
use super::error_utils::TYPE_INFO_STACK;

use crate::{Direction, JsonCodec};
use kw_reflect::Reflect;
use kw_reflect::info::ReflectKind;
use kw_reflect::ops::ReflectMut;

// -----------------------------------------------------------------------------
// DeserializeDriver

/// Deserializes into an existing reflected value with the decode plans of a
/// [`JsonCodec`].
///
/// Usually obtained from [`JsonCodec::deserializer_seed`]. The value is
/// updated in place:
///
/// - struct fields whose key is absent from the input keep their values,
///   unknown and excluded keys are skipped, a repeated key is applied again;
/// - lists are cleared, then filled from the input;
/// - maps are cleared, then every entry is decoded into a fresh default;
/// - `null` sets an option to `None`, anything else decodes into its value;
/// - opaque leaves are replaced through their own `serde` impl.
///
/// With [`lenient_null`](Self::lenient_null), which [`JsonCodec::unmarshal`]
/// turns on, `null` for any other value clears a list or map and leaves
/// structs and opaque leaves unchanged. Formats without a `null` reject
/// that mode, so it is off by default.
///
/// # Examples
///
/// ```
/// use serde_core::de::DeserializeSeed;
/// use kw_json::{DeserializeDriver, JsonCodec};
/// use kw_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Counter {
///     #[tag(json = "n")]
///     pub count: u64,
///     pub label: String,
/// }
///
/// let codec = JsonCodec::new();
/// let mut counter = Counter { count: 1, label: "kept".into() };
///
/// let mut input = serde_json::Deserializer::from_str(r#"{"n":5,"other":[1,2]}"#);
/// DeserializeDriver::new(&mut counter, &codec).deserialize(&mut input).unwrap();
///
/// assert_eq!(counter.count, 5);
/// assert_eq!(counter.label, "kept");
/// ```
pub struct DeserializeDriver<'a> {
    target: &'a mut dyn Reflect,
    codec: &'a JsonCodec,
    lenient_null: bool,
}

impl<'a> DeserializeDriver<'a> {
    #[inline]
    pub fn new(target: &'a mut dyn Reflect, codec: &'a JsonCodec) -> Self {
        Self {
            target,
            codec,
            lenient_null: false,
        }
    }

    /// Sets whether `null` is accepted for values that are not options,
    /// here and in every nested value.
    #[inline]
    pub fn lenient_null(mut self, lenient: bool) -> Self {
        self.lenient_null = lenient;
        self
    }

    #[inline]
    pub(super) fn nested(
        target: &'a mut dyn Reflect,
        codec: &'a JsonCodec,
        lenient_null: bool,
    ) -> Self {
        Self {
            target,
            codec,
            lenient_null,
        }
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        let type_info = self.target.reflect_type_info();
        let codec = self.codec;
        let lenient_null = self.lenient_null;

        #[cfg(all(debug_assertions, feature = "debug"))]
        TYPE_INFO_STACK.with_borrow_mut(|stack| stack.push(type_info));

        let output: Result<(), D::Error> = match self.target.reflect_mut() {
            ReflectMut::Struct(struct_value) => match type_info.as_struct() {
                Ok(struct_info) => {
                    let plan = codec.plan_for(Direction::Decode, struct_info);
                    deserializer.deserialize_map(StructVisitor {
                        struct_value,
                        struct_info,
                        plan: &plan,
                        codec,
                        lenient_null,
                    })
                }
                Err(err) => Err(make_custom_error(err)),
            },
            ReflectMut::List(list) => deserializer.deserialize_seq(ListVisitor {
                list,
                codec,
                lenient_null,
            }),
            ReflectMut::Map(map) => deserializer.deserialize_map(MapVisitor {
                map,
                codec,
                lenient_null,
            }),
            ReflectMut::Optional(optional) => deserializer.deserialize_option(OptionVisitor {
                optional,
                codec,
                lenient_null,
            }),
            ReflectMut::Opaque(opaque) => {
                let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
                opaque
                    .deserialize_in_place(&mut erased)
                    .map_err(<D::Error as Error>::custom)
            }
        };

        #[cfg(all(debug_assertions, feature = "debug"))]
        TYPE_INFO_STACK.with_borrow_mut(|stack| stack.pop());

        output
    }
}

impl<'de> DeserializeSeed<'de> for DeserializeDriver<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        if self.lenient_null && self.target.reflect_kind() != ReflectKind::Optional {
            deserializer.deserialize_option(NullVisitor { driver: self })
        } else {
            self.deserialize_value(deserializer)
        }
    }
}

// -----------------------------------------------------------------------------
// NullVisitor

/// Peeks for `null` before a value that is not an option.
struct NullVisitor<'a> {
    driver: DeserializeDriver<'a>,
}

impl<'de> Visitor<'de> for NullVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a value or null")
    }

    fn visit_none<E: Error>(self) -> Result<(), E> {
        match self.driver.target.reflect_mut() {
            ReflectMut::List(list) => list.clear(),
            ReflectMut::Map(map) => map.clear(),
            _ => {}
        }
        Ok(())
    }

    fn visit_unit<E: Error>(self) -> Result<(), E> {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        self.driver.deserialize_value(deserializer)
    }
}
