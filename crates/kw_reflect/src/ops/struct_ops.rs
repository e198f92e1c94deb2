use core::iter::FusedIterator;

use crate::Reflect;

/// Field access for named structs.
///
/// Indices run over the reflected fields in declaration order, exported or
/// not, and agree with [`StructInfo::field_at`](crate::info::StructInfo::field_at).
///
/// # Examples
///
/// ```
/// use kw_reflect::{Reflect, derive::Reflect, ops::ReflectMut};
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let mut p = Point::default();
/// let ReflectMut::Struct(s) = p.reflect_mut() else { unreachable!() };
///
/// *s.field_mut("y").unwrap().downcast_mut::<i32>().unwrap() = 7;
/// assert_eq!(s.name_at(1), Some("y"));
/// assert_eq!(p.y, 7);
/// ```
pub trait Struct: Reflect {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;

    /// Iterates over `(name, value)` pairs in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

/// Iterator returned by [`Struct::iter_fields`].
pub struct StructFieldIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(target: &'a dyn Struct) -> Self {
        Self { target, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.target.name_at(self.index)?;
        let value = self.target.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.target.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
impl FusedIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::ReflectRef;
    use crate::Reflect;

    #[derive(Reflect, Default)]
    struct Record {
        #[tag(json = "_id")]
        pub id: String,
        pub(crate) r#type: u8,
        #[reflect(ignore)]
        pub scratch: Vec<u8>,
        #[tag(json = "-", "original-json" = "note")]
        note: Option<String>,
    }

    #[derive(Reflect, Default)]
    struct Wrapper<T> {
        pub items: Vec<T>,
        pub first: Option<T>,
    }

    #[test]
    fn derived_descriptor() {
        let info = Record::type_info().as_struct().unwrap();
        let names: Vec<_> = info.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["id", "type", "note"]);

        assert!(info.field("type").unwrap().is_exported());
        let note = info.field("note").unwrap();
        assert!(!note.is_exported());
        assert_eq!(note.tags().get("json"), Some("-"));
        assert_eq!(note.tags().get("original-json"), Some("note"));
        assert!(note.type_is::<Option<String>>());
    }

    #[test]
    fn derived_field_access() {
        let mut record = Record {
            id: "No.1".into(),
            ..Default::default()
        };
        record.scratch.push(1);

        let ReflectRef::Struct(s) = record.reflect_ref() else {
            panic!("Record should be a struct");
        };
        assert_eq!(s.field_len(), 3);
        assert_eq!(s.field("id").unwrap().downcast_ref::<String>().unwrap(), "No.1");
        assert!(s.field("scratch").is_none());
        assert_eq!(s.name_at(2), Some("note"));
        assert!(s.field_at(3).is_none());

        let visited: Vec<_> = s.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(visited, ["id", "type", "note"]);
    }

    #[test]
    fn generic_instantiations_have_distinct_info() {
        let a = <Wrapper<u8>>::type_info().as_struct().unwrap();
        let b = <Wrapper<String>>::type_info().as_struct().unwrap();
        assert!(a.ty().is::<Wrapper<u8>>());
        assert!(b.ty().is::<Wrapper<String>>());
        assert!(b.field("items").unwrap().type_is::<Vec<String>>());
    }
}
