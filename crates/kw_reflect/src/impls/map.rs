use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{Map, ReflectMut, ReflectRef};

macro_rules! impl_string_map {
    ($ty:ty, [$($bounds:tt)*]) => {
        impl<$($bounds)*> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, V>()))
            }
        }

        impl<$($bounds)*> Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Map
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Map(self)
            }
        }

        impl<$($bounds)*> Map for $ty {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            #[inline]
            fn get(&self, key: &str) -> Option<&dyn Reflect> {
                <$ty>::get(self, key).map(V::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
                <$ty>::get_mut(self, key).map(V::as_reflect_mut)
            }

            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }

            fn insert_default(&mut self, key: String) -> &mut dyn Reflect {
                let slot = <$ty>::entry(self, key).or_default();
                *slot = V::default();
                slot
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
                Box::new(<$ty>::iter(self).map(|(key, value)| (key.as_str(), value.as_reflect())))
            }
        }
    };
}

impl_string_map!(BTreeMap<String, V>, [V: Reflect + Typed + Default]);
impl_string_map!(
    HashMap<String, V, S>,
    [V: Reflect + Typed + Default, S: BuildHasher + Default + Send + Sync + 'static]
);
