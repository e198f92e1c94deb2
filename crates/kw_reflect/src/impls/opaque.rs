/// Implements [`Typed`], [`Reflect`] and [`Opaque`] for leaf types that
/// implement `serde::Serialize` and `serde::Deserialize`. Decoding replaces
/// the old value with the decoded one.
///
/// Only non-generic types are accepted; invoke the macro in the crate that
/// defines the type.
///
/// # Examples
///
/// ```
/// use kw_reflect::{Reflect, impl_reflect_opaque, info::{ReflectKind, Typed}};
///
/// #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
/// struct Rgb(u8, u8, u8);
///
/// impl_reflect_opaque!(Rgb);
///
/// assert_eq!(Rgb::type_info().kind(), ReflectKind::Opaque);
/// assert_eq!(Rgb(1, 2, 3).reflect_kind(), ReflectKind::Opaque);
/// ```
///
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
/// [`Opaque`]: crate::ops::Opaque
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::info::Typed for $ty {
                fn type_info() -> &'static $crate::info::TypeInfo {
                    static CELL: $crate::impls::NonGenericTypeInfoCell =
                        $crate::impls::NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| {
                        $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<Self>())
                    })
                }
            }

            impl $crate::Reflect for $ty {
                #[inline]
                fn reflect_kind(&self) -> $crate::info::ReflectKind {
                    $crate::info::ReflectKind::Opaque
                }

                #[inline]
                fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                    $crate::ops::ReflectRef::Opaque(self)
                }

                #[inline]
                fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                    $crate::ops::ReflectMut::Opaque(self)
                }
            }

            impl $crate::ops::Opaque for $ty {
                #[inline]
                fn as_serialize(&self) -> &dyn $crate::__macro_exports::erased_serde::Serialize {
                    self
                }

                fn deserialize_in_place(
                    &mut self,
                    deserializer: &mut dyn $crate::__macro_exports::erased_serde::Deserializer<'_>,
                ) -> ::core::result::Result<(), $crate::__macro_exports::erased_serde::Error> {
                    *self = $crate::__macro_exports::erased_serde::deserialize::<Self>(deserializer)?;
                    Ok(())
                }
            }
        )+
    };
}

crate::impl_reflect_opaque!(
    bool, char, String, //
    i8, i16, i32, i64, i128, isize, //
    u8, u16, u32, u64, u128, usize, //
    f32, f64,
);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::ReflectMut;

    #[test]
    fn deserialize_replaces_value() {
        let mut value = String::from("old");
        let ReflectMut::Opaque(opaque) = value.reflect_mut() else {
            panic!("String should be opaque");
        };

        let mut json = serde_json::Deserializer::from_str(r#""new""#);
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut json);
        opaque.deserialize_in_place(&mut erased).unwrap();

        assert_eq!(value, "new");
    }

    #[test]
    fn serialize_through_erased() {
        let value = 42_u16;
        let crate::ops::ReflectRef::Opaque(opaque) = value.reflect_ref() else {
            panic!("u16 should be opaque");
        };
        let text = serde_json::to_string(opaque.as_serialize()).unwrap();
        assert_eq!(text, "42");
    }
}
