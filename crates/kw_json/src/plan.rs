use std::fmt;

use kw_reflect::info::{StructInfo, Type};
use kw_utils::hash::{FixedHashState, HashMap};
use log::warn;

use crate::{Direction, TagChain, TagSettings};

// -----------------------------------------------------------------------------
// ExposedKey

/// What a field resolved to for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExposedKey {
    /// The field is read or written under this key.
    Key(Box<str>),
    /// The field takes no part in the conversion.
    Excluded,
}

impl ExposedKey {
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Excluded => None,
        }
    }

    #[inline]
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }
}

impl fmt::Display for ExposedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key:?}"),
            Self::Excluded => f.write_str("excluded"),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldDecision

/// The resolved key of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecision {
    index: usize,
    name: &'static str,
    key: ExposedKey,
}

impl FieldDecision {
    /// Declaration index, usable with [`Struct::field_at`](kw_reflect::ops::Struct::field_at).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Declared field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn key(&self) -> &ExposedKey {
        &self.key
    }
}

// -----------------------------------------------------------------------------
// FieldPlan

/// The field exposure plan of one struct type, for one direction, under one
/// [`TagSettings`].
///
/// Decisions follow declaration order, which is the key order of encoded
/// output. When several fields resolve to the same key, [`index_of_key`]
/// returns the first declared one and a warning is logged while building.
///
/// A plan is immutable once built and shared through the plan caches.
///
/// # Examples
///
/// ```
/// use kw_json::{Direction, FieldPlan, TagSettings};
/// use kw_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Account {
///     #[tag(json = "_id")]
///     pub id: String,
///     #[tag(json = "secret", toJson = "-")]
///     pub secret: String,
///     token: String,
/// }
///
/// let info = Account::type_info().as_struct().unwrap();
/// let settings = TagSettings::default();
///
/// let encode = FieldPlan::build(Direction::Encode, info, &settings);
/// let keys: Vec<_> = encode.iter_exposed().map(|(_, key)| key).collect();
/// assert_eq!(keys, ["_id"]);
///
/// let decode = FieldPlan::build(Direction::Decode, info, &settings);
/// assert_eq!(decode.index_of_key("secret"), Some(1));
/// assert_eq!(decode.index_of_key("token"), None);
/// ```
///
/// [`index_of_key`]: FieldPlan::index_of_key
#[derive(Debug, Clone)]
pub struct FieldPlan {
    ty: Type,
    direction: Direction,
    decisions: Box<[FieldDecision]>,
    keys: HashMap<Box<str>, usize>,
}

impl FieldPlan {
    /// Resolves every field of `info` with the chain `settings` describes.
    pub fn build(direction: Direction, info: &StructInfo, settings: &TagSettings) -> Self {
        let chain = TagChain::new(direction, settings);
        Self::from_chain(&chain, info, settings)
    }

    pub(crate) fn from_chain(chain: &TagChain, info: &StructInfo, settings: &TagSettings) -> Self {
        let mut decisions: Box<[FieldDecision]> = info
            .iter()
            .enumerate()
            .map(|(index, field)| FieldDecision {
                index,
                name: field.name(),
                key: chain.resolve(field, &settings.naming_rule),
            })
            .collect();

        // A key belongs to the first field resolving to it; later ones are
        // excluded so encoding never writes a key twice.
        let mut keys: HashMap<Box<str>, usize> =
            HashMap::with_capacity_and_hasher(decisions.len(), FixedHashState);
        for position in 0..decisions.len() {
            let ExposedKey::Key(key) = &decisions[position].key else {
                continue;
            };
            if let Some(&first) = keys.get(key) {
                warn!(
                    "`{}` exposes fields `{}` and `{}` under the same {} key \"{key}\"; \
                     `{}` is excluded",
                    info.type_path(),
                    decisions[first].name,
                    decisions[position].name,
                    chain.direction(),
                    decisions[position].name,
                );
                decisions[position].key = ExposedKey::Excluded;
            } else {
                keys.insert(key.clone(), decisions[position].index);
            }
        }

        Self {
            ty: *info.ty(),
            direction: chain.direction(),
            decisions,
            keys,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All decisions, excluded fields included, in declaration order.
    #[inline]
    pub fn decisions(&self) -> &[FieldDecision] {
        &self.decisions
    }

    #[inline]
    pub fn decision(&self, index: usize) -> Option<&FieldDecision> {
        self.decisions.get(index)
    }

    /// Iterates `(field index, key)` over the exposed fields in declaration order.
    pub fn iter_exposed(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.decisions
            .iter()
            .filter_map(|d| d.key.as_key().map(|key| (d.index, key)))
    }

    /// Number of fields that are not excluded.
    pub fn exposed_len(&self) -> usize {
        self.decisions.iter().filter(|d| !d.key.is_excluded()).count()
    }

    /// Index of the field exposed under `key`, matched exactly.
    #[inline]
    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.keys.get(key).copied()
    }
}

// -----------------------------------------------------------------------------
// Tests
