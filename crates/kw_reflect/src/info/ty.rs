use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

/// A [`TypeId`] together with the type's path.
///
/// The path comes from [`core::any::type_name`] and is only meant for
/// diagnostics; identity is decided by the id alone.
///
/// # Example
///
/// ```
/// # use core::any::TypeId;
/// # use kw_reflect::info::Type;
/// let ty = Type::of::<String>();
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert!(ty.is::<String>());
/// assert_eq!(ty.short_path(), "String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Full path, e.g. `alloc::string::String`.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// The path with every module prefix removed, generics included:
    /// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
    pub fn short_path(&self) -> String {
        let mut out = String::with_capacity(self.path.len());
        let mut segment_start = 0;
        for (index, ch) in self.path.char_indices() {
            match ch {
                ':' => segment_start = index + 1,
                '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                    out.push_str(&self.path[segment_start..index]);
                    out.push(ch);
                    segment_start = index + 1;
                }
                _ => {}
            }
        }
        out.push_str(&self.path[segment_start..]);
        out
    }

    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::Type;
    use std::collections::BTreeMap;

    #[test]
    fn short_path_strips_modules() {
        assert_eq!(Type::of::<Vec<String>>().short_path(), "Vec<String>");
        assert_eq!(
            Type::of::<BTreeMap<String, Option<i32>>>().short_path(),
            "BTreeMap<String, Option<i32>>"
        );
        assert_eq!(Type::of::<u8>().short_path(), "u8");
    }

    #[test]
    fn identity_is_the_type_id() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
    }
}
