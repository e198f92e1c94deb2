use core::fmt;

/// The `name = "value"` annotations attached to a struct field.
///
/// Written with `#[tag(...)]` on a derived field. Lookup is by exact,
/// case-sensitive name; values are returned verbatim, so an annotation
/// present with an empty value is distinct from an absent one.
///
/// # Examples
///
/// ```
/// use kw_reflect::info::FieldTags;
///
/// let tags = FieldTags::new(&[("json", "_id"), ("toJson", "")]);
/// assert_eq!(tags.get("json"), Some("_id"));
/// assert_eq!(tags.get("toJson"), Some(""));
/// assert_eq!(tags.get("JSON"), None);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTags(&'static [(&'static str, &'static str)]);

impl FieldTags {
    pub const EMPTY: Self = Self(&[]);

    #[inline]
    pub const fn new(tags: &'static [(&'static str, &'static str)]) -> Self {
        Self(tags)
    }

    /// Returns the value of the annotation called `name`.
    ///
    /// If a hand-built list repeats a name, the first entry wins.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, value)| *value)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.0.iter().copied()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for FieldTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
