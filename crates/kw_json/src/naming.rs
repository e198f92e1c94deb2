use std::fmt;
use std::sync::Arc;

// -----------------------------------------------------------------------------
// NamingRule

/// Maps a field's declared name to the key it is exposed under when no
/// annotation decides the key.
///
/// A rule must be pure: the same name always yields the same key. Plans are
/// cached per [`JsonCodec`](crate::JsonCodec) and only recomputed when the
/// codec is reconfigured, so a rule whose output drifts leaves stale keys in
/// the caches.
///
/// # Examples
///
/// ```
/// use kw_json::NamingRule;
///
/// assert_eq!(NamingRule::identity().apply("LastName"), "LastName");
/// assert_eq!(NamingRule::lower_initial().apply("LastName"), "lastName");
///
/// let upper = NamingRule::new(|name| name.to_uppercase());
/// assert_eq!(upper.apply("id"), "ID");
/// ```
#[derive(Clone)]
pub struct NamingRule {
    name: &'static str,
    func: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl NamingRule {
    /// Wraps a custom rule.
    pub fn new(func: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            name: "custom",
            func: Arc::new(func),
        }
    }

    /// Keeps the field name unchanged.
    pub fn identity() -> Self {
        Self {
            name: "identity",
            func: Arc::new(|name: &str| name.to_owned()),
        }
    }

    /// Lower-cases the first character only.
    ///
    /// ```
    /// use kw_json::NamingRule;
    ///
    /// let rule = NamingRule::lower_initial();
    /// assert_eq!(rule.apply(""), "");
    /// assert_eq!(rule.apply("ID"), "iD");
    /// assert_eq!(rule.apply("Ärger"), "ärger");
    /// ```
    pub fn lower_initial() -> Self {
        Self {
            name: "lower_initial",
            func: Arc::new(lower_initial),
        }
    }

    #[inline]
    pub fn apply(&self, field_name: &str) -> String {
        (self.func)(field_name)
    }

    /// Returns `true` if both values wrap the same rule instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Default for NamingRule {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamingRule").field(&self.name).finish()
    }
}

/// Lowers the first `char` only. A first `char` whose lower case is not a
/// single `char` is kept as is.
fn lower_initial(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut lower = first.to_lowercase();
    let initial = match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut out = String::with_capacity(name.len());
    out.push(initial);
    out.push_str(chars.as_str());
    out
}

// -----------------------------------------------------------------------------
// Tests
