use crate::info::ReflectKind;
use crate::ops::{List, Map, Opaque, Optional, Struct};

macro_rules! impl_kind_fn {
    () => {
        pub fn kind(&self) -> ReflectKind {
            match self {
                Self::Struct(_) => ReflectKind::Struct,
                Self::List(_) => ReflectKind::List,
                Self::Map(_) => ReflectKind::Map,
                Self::Optional(_) => ReflectKind::Optional,
                Self::Opaque(_) => ReflectKind::Opaque,
            }
        }
    };
}

/// An immutable view of a reflected value, by kind.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Opaque(&'a dyn Opaque),
}

impl ReflectRef<'_> {
    impl_kind_fn!();
}

/// A mutable view of a reflected value, by kind.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Opaque(&'a mut dyn Opaque),
}

impl ReflectMut<'_> {
    impl_kind_fn!();
}
