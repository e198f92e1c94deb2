use std::fmt;

use kw_reflect::info::NamedField;

use crate::plan::ExposedKey;
use crate::{Direction, NamingRule, TagSettings};

/// The reserved annotation value that excludes a field.
pub const EXCLUSION_MARKER: &str = "-";

// -----------------------------------------------------------------------------
// TagStep

/// One step of a [`TagChain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagStep {
    /// Excludes the field when it carries the annotation with value `"-"`.
    /// Any other value falls through to the next step.
    Suppress(Box<str>),
    /// Decides the key when the field carries the annotation: `"-"`
    /// excludes, anything else is the key verbatim.
    Lookup(Box<str>),
}

impl TagStep {
    #[inline]
    pub fn tag(&self) -> &str {
        match self {
            Self::Suppress(tag) | Self::Lookup(tag) => tag,
        }
    }

    /// Evaluates the step against one field. `None` defers to the next step.
    pub fn evaluate(&self, field: &NamedField) -> Option<ExposedKey> {
        match self {
            Self::Suppress(tag) => match field.tags().get(tag) {
                Some(EXCLUSION_MARKER) => Some(ExposedKey::Excluded),
                _ => None,
            },
            Self::Lookup(tag) => field.tags().get(tag).map(|value| match value {
                EXCLUSION_MARKER => ExposedKey::Excluded,
                key => ExposedKey::Key(key.into()),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// TagChain

/// The ordered annotation lookups for one direction.
///
/// Built from [`TagSettings`]; empty annotation names are dropped and a
/// lookup repeating an earlier lookup's name is unreachable, so it is dropped
/// as well. Fields are then resolved in this order:
///
/// 1. unexported fields are excluded;
/// 2. encode only: the suppress annotation with value `"-"` excludes;
/// 3. the direction tag, the custom tag, the default tag, in that order,
///    the first present annotation deciding;
/// 4. the naming rule applied to the field name.
///
/// # Examples
///
/// ```
/// use kw_json::{Direction, TagChain, TagSettings};
///
/// let settings = TagSettings::default();
/// let encode = TagChain::new(Direction::Encode, &settings);
/// assert_eq!(encode.to_string(), "suppress(toJson) > toJson > json > naming rule");
///
/// let decode = TagChain::new(Direction::Decode, &settings);
/// assert_eq!(decode.to_string(), "fromJson > json > naming rule");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChain {
    direction: Direction,
    steps: Vec<TagStep>,
}

impl TagChain {
    pub fn new(direction: Direction, settings: &TagSettings) -> Self {
        let mut steps = Vec::with_capacity(4);

        if direction == Direction::Encode && !settings.suppress_tag.is_empty() {
            steps.push(TagStep::Suppress(settings.suppress_tag.as_str().into()));
        }

        let lookups = [
            settings.direction_tag(direction),
            settings.custom_tag.as_str(),
            settings.default_tag.as_str(),
        ];
        for tag in lookups {
            let repeated = steps
                .iter()
                .any(|step| matches!(step, TagStep::Lookup(t) if &**t == tag));
            if !tag.is_empty() && !repeated {
                steps.push(TagStep::Lookup(tag.into()));
            }
        }

        Self { direction, steps }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn steps(&self) -> &[TagStep] {
        &self.steps
    }

    /// Resolves the key `field` is exposed under. Never fails.
    pub fn resolve(&self, field: &NamedField, naming_rule: &NamingRule) -> ExposedKey {
        if !field.is_exported() {
            return ExposedKey::Excluded;
        }
        self.steps
            .iter()
            .find_map(|step| step.evaluate(field))
            .unwrap_or_else(|| ExposedKey::Key(naming_rule.apply(field.name()).into()))
    }
}

impl fmt::Display for TagChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match step {
                TagStep::Suppress(tag) => write!(f, "suppress({tag}) > ")?,
                TagStep::Lookup(tag) => write!(f, "{tag} > ")?,
            }
        }
        f.write_str("naming rule")
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use kw_reflect::info::NamedField;

    use super::{TagChain, TagStep};
    use crate::plan::ExposedKey;
    use crate::{Direction, NamingRule, TagSettings};

    fn key(s: &str) -> ExposedKey {
        ExposedKey::Key(s.into())
    }

    fn resolve(settings: &TagSettings, direction: Direction, field: &NamedField) -> ExposedKey {
        TagChain::new(direction, settings).resolve(field, &settings.naming_rule)
    }

    #[test]
    fn untagged_fields_use_the_naming_rule() {
        let settings = TagSettings {
            naming_rule: NamingRule::lower_initial(),
            ..Default::default()
        };
        let field = NamedField::new::<u32>("Age");
        assert_eq!(resolve(&settings, Direction::Encode, &field), key("age"));
        assert_eq!(resolve(&settings, Direction::Decode, &field), key("age"));
    }

    #[test]
    fn decode_annotation_does_not_leak_into_encode() {
        let settings = TagSettings {
            naming_rule: NamingRule::lower_initial(),
            ..Default::default()
        };
        let field = NamedField::new::<String>("LastName").with_tags(&[("fromJson", "lastName")]);
        assert_eq!(resolve(&settings, Direction::Decode, &field), key("lastName"));
        assert_eq!(resolve(&settings, Direction::Encode, &field), key("lastName"));

        let field = NamedField::new::<String>("LastName").with_tags(&[("fromJson", "surname")]);
        assert_eq!(resolve(&settings, Direction::Decode, &field), key("surname"));
        assert_eq!(resolve(&settings, Direction::Encode, &field), key("lastName"));
    }

    #[test]
    fn direction_tag_beats_custom_and_default() {
        let settings = TagSettings {
            custom_tag: "originalJson".into(),
            ..Default::default()
        };
        let field = NamedField::new::<String>("Name").with_tags(&[
            ("json", "n"),
            ("originalJson", "original"),
            ("fromJson", "from"),
        ]);
        assert_eq!(resolve(&settings, Direction::Decode, &field), key("from"));
        assert_eq!(resolve(&settings, Direction::Encode, &field), key("original"));
    }

    #[test]
    fn exclusion_marker_stops_the_chain() {
        let settings = TagSettings {
            custom_tag: "originalJson".into(),
            ..Default::default()
        };
        let field = NamedField::new::<String>("FirstName")
            .with_tags(&[("fromJson", "-"), ("originalJson", "firstName")]);
        assert_eq!(resolve(&settings, Direction::Decode, &field), ExposedKey::Excluded);
        assert_eq!(resolve(&settings, Direction::Encode, &field), key("firstName"));

        let field = NamedField::new::<String>("Name").with_tags(&[("json", "-")]);
        assert_eq!(resolve(&settings, Direction::Decode, &field), ExposedKey::Excluded);
    }

    #[test]
    fn suppress_hides_on_encode_only() {
        let settings = TagSettings::default();
        let field =
            NamedField::new::<String>("Secret").with_tags(&[("json", "secret"), ("toJson", "-")]);
        assert_eq!(resolve(&settings, Direction::Encode, &field), ExposedKey::Excluded);
        assert_eq!(resolve(&settings, Direction::Decode, &field), key("secret"));

        // a separate suppress annotation keeps the encode tag free for keys
        let settings = TagSettings {
            suppress_tag: "hidden".into(),
            ..Default::default()
        };
        let field = NamedField::new::<String>("Secret")
            .with_tags(&[("hidden", "-"), ("toJson", "shown")]);
        assert_eq!(resolve(&settings, Direction::Encode, &field), ExposedKey::Excluded);

        let field = NamedField::new::<String>("Secret").with_tags(&[("hidden", "yes")]);
        assert_eq!(resolve(&settings, Direction::Encode, &field), key("Secret"));
    }

    #[test]
    fn unexported_fields_are_always_excluded() {
        let settings = TagSettings::default();
        let field = NamedField::new::<String>("secret")
            .with_exported(false)
            .with_tags(&[("json", "secret"), ("fromJson", "secret")]);
        assert_eq!(resolve(&settings, Direction::Encode, &field), ExposedKey::Excluded);
        assert_eq!(resolve(&settings, Direction::Decode, &field), ExposedKey::Excluded);
    }

    #[test]
    fn empty_and_repeated_tags_are_dropped() {
        let settings = TagSettings {
            decode_tag: String::new(),
            custom_tag: "json".into(),
            default_tag: "json".into(),
            suppress_tag: String::new(),
            ..Default::default()
        };
        let decode = TagChain::new(Direction::Decode, &settings);
        assert_eq!(decode.steps(), [TagStep::Lookup("json".into())]);
        assert_eq!(decode.direction(), Direction::Decode);

        let encode = TagChain::new(Direction::Encode, &settings);
        let tags: Vec<_> = encode.steps().iter().map(TagStep::tag).collect();
        assert_eq!(tags, ["toJson", "json"]);

        let field = NamedField::new::<u8>("Age").with_tags(&[("json", "years")]);
        assert_eq!(decode.resolve(&field, &settings.naming_rule), key("years"));
    }

    #[test]
    fn annotation_names_match_exactly() {
        let settings = TagSettings::default();
        let field = NamedField::new::<u8>("Age").with_tags(&[("JSON", "a"), ("json ", "b")]);
        assert_eq!(resolve(&settings, Direction::Decode, &field), key("Age"));
    }
}
