use crate::info::{Type, TypeInfo, Typed};

/// Descriptor of a growable sequence such as `Vec<T>`.
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    pub fn new<TList: 'static, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}

/// Descriptor of a map with string keys, such as `BTreeMap<String, V>`.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    pub fn new<TMap: 'static, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            value_ty: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}

/// Descriptor of `Option<T>`.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    inner_ty: Type,
    inner_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    pub fn new<TOption: 'static, TInner: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            inner_ty: Type::of::<TInner>(),
            inner_info: TInner::type_info,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn inner_ty(&self) -> &Type {
        &self.inner_ty
    }

    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }
}

/// Descriptor of a leaf value that is serialized as a whole,
/// such as `i32` or `String`.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    #[inline]
    pub fn new<T: ?Sized + 'static>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}
