use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use kw_reflect::Reflect;
use kw_reflect::info::{ReflectKindError, StructInfo, Typed};
use log::{debug, trace};

use crate::serde::{DeserializeDriver, SerializeDriver};
use crate::{DecodeError, EncodeError};
use crate::{Direction, FieldPlan, NamingRule, PlanCache, TagChain, TagSettings};

// -----------------------------------------------------------------------------
// JsonCodec

/// A configuration instance: tag settings plus the plan caches resolved
/// under them.
///
/// Codecs are independent. The same type converted through two codecs is
/// resolved and cached once per codec, and reconfiguring one never touches
/// another, including [`JsonCodec::global`].
///
/// # Reconfiguration
///
/// Every setter replaces its setting and empties both plan caches before it
/// returns, so conversions started afterwards see the new settings. Setters
/// take `&self` and chain:
///
/// ```
/// use kw_json::{JsonCodec, NamingRule};
///
/// let codec = JsonCodec::new();
/// codec
///     .set_custom_tag("originalJson")
///     .set_naming_rule(NamingRule::lower_initial());
/// assert_eq!(codec.settings().custom_tag, "originalJson");
/// ```
///
/// Reconfiguring while other threads are converting through the same codec
/// is memory safe but not ordered: a conversion in flight may finish with the
/// old settings. Callers needing a clean cutover must stop conversions first.
///
/// # Examples
///
/// ```
/// use kw_json::JsonCodec;
/// use kw_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// struct Login {
///     #[tag(json = "user")]
///     pub name: String,
///     #[tag(json = "password", toJson = "-")]
///     pub password: String,
/// }
///
/// let codec = JsonCodec::new();
///
/// let mut login = Login::default();
/// codec.unmarshal(br#"{"user":"tom","password":"hunter2"}"#, &mut login)?;
/// assert_eq!(login.password, "hunter2");
///
/// let text = codec.marshal_to_string(&login)?;
/// assert_eq!(text, r#"{"user":"tom"}"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct JsonCodec {
    settings: RwLock<TagSettings>,
    encode_plans: PlanCache,
    decode_plans: PlanCache,
}

impl JsonCodec {
    /// Creates a codec with [`TagSettings::default`] and empty caches.
    pub fn new() -> Self {
        Self::with_settings(TagSettings::default())
    }

    pub fn with_settings(settings: TagSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
            encode_plans: PlanCache::new(),
            decode_plans: PlanCache::new(),
        }
    }

    /// The process-wide default codec, created on first use.
    ///
    /// The free functions [`marshal`](crate::marshal),
    /// [`marshal_pretty`](crate::marshal_pretty) and
    /// [`unmarshal`](crate::unmarshal) go through it.
    pub fn global() -> &'static JsonCodec {
        static GLOBAL: LazyLock<JsonCodec> = LazyLock::new(JsonCodec::new);
        &GLOBAL
    }

    /// A copy of the current settings.
    pub fn settings(&self) -> TagSettings {
        self.settings.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn reconfigure(&self, what: &str, f: impl FnOnce(&mut TagSettings)) -> &Self {
        let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut settings);
        self.encode_plans.clear();
        self.decode_plans.clear();
        debug!("{what} changed, plan caches cleared");
        self
    }

    /// Replaces the decode and encode direction tags. An empty name disables
    /// that direction's step.
    pub fn set_encode_and_decode_tags(
        &self,
        decode_tag: impl Into<String>,
        encode_tag: impl Into<String>,
    ) -> &Self {
        let (decode_tag, encode_tag) = (decode_tag.into(), encode_tag.into());
        self.reconfigure("direction tags", |s| {
            s.decode_tag = decode_tag;
            s.encode_tag = encode_tag;
        })
    }

    /// Replaces the custom tag consulted in both directions.
    pub fn set_custom_tag(&self, tag: impl Into<String>) -> &Self {
        let tag = tag.into();
        self.reconfigure("custom tag", |s| s.custom_tag = tag)
    }

    /// Replaces the default tag, `"json"` unless changed.
    pub fn set_default_tag(&self, tag: impl Into<String>) -> &Self {
        let tag = tag.into();
        self.reconfigure("default tag", |s| s.default_tag = tag)
    }

    /// Same as `set_default_tag("")`.
    pub fn disable_default_tag(&self) -> &Self {
        self.set_default_tag("")
    }

    /// Replaces the encode-only suppress tag, `"toJson"` unless changed.
    pub fn set_suppress_tag(&self, tag: impl Into<String>) -> &Self {
        let tag = tag.into();
        self.reconfigure("suppress tag", |s| s.suppress_tag = tag)
    }

    pub fn set_naming_rule(&self, rule: NamingRule) -> &Self {
        self.reconfigure("naming rule", |s| s.naming_rule = rule)
    }

    /// Empties both plan caches without touching the settings.
    pub fn clear_caches(&self) -> &Self {
        self.encode_plans.clear();
        self.decode_plans.clear();
        self
    }

    #[inline]
    fn plans(&self, direction: Direction) -> &PlanCache {
        match direction {
            Direction::Encode => &self.encode_plans,
            Direction::Decode => &self.decode_plans,
        }
    }

    /// Number of cached plans for `direction`.
    pub fn cached_plans(&self, direction: Direction) -> usize {
        self.plans(direction).len()
    }

    /// Returns the cached plan of `info`, building and caching it on a miss.
    pub fn plan_for(&self, direction: Direction, info: &StructInfo) -> Arc<FieldPlan> {
        let cache = self.plans(direction);
        let type_id = info.ty().id();

        if let Some(plan) = cache.get(type_id) {
            return plan;
        }

        // Held until the plan is stored, so a setter cannot clear the cache
        // between building with old settings and storing.
        let settings = self.settings.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(plan) = cache.get(type_id) {
            return plan;
        }

        let chain = TagChain::new(direction, &settings);
        trace!("building {direction} plan for `{}` with {chain}", info.type_path());
        let plan = Arc::new(FieldPlan::from_chain(&chain, info, &settings));
        cache.put(type_id, plan.clone());
        plan
    }

    /// The encode plan of struct `T`.
    pub fn encode_plan<T: Typed>(&self) -> Result<Arc<FieldPlan>, ReflectKindError> {
        let info = T::type_info().as_struct()?;
        Ok(self.plan_for(Direction::Encode, info))
    }

    /// The decode plan of struct `T`.
    pub fn decode_plan<T: Typed>(&self) -> Result<Arc<FieldPlan>, ReflectKindError> {
        let info = T::type_info().as_struct()?;
        Ok(self.plan_for(Direction::Decode, info))
    }

    // -------------------------------------------------------------------------
    // Conversion

    /// A [`serde::Serialize`](serde_core::Serialize) view of `value`, keyed
    /// by this codec's encode plans.
    ///
    /// ```
    /// use kw_json::JsonCodec;
    /// use kw_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// struct Point {
    ///     #[tag(json = "X")]
    ///     pub x: i32,
    /// }
    ///
    /// let codec = JsonCodec::new();
    /// let value = Point { x: 3 };
    /// let text = serde_json::to_string(&codec.serializer(&value)).unwrap();
    /// assert_eq!(text, r#"{"X":3}"#);
    /// ```
    #[inline]
    pub fn serializer<'a>(&'a self, value: &'a dyn Reflect) -> SerializeDriver<'a> {
        SerializeDriver::new(value, self)
    }

    /// A [`DeserializeSeed`](serde_core::de::DeserializeSeed) decoding into
    /// `target` in place, keyed by this codec's decode plans.
    #[inline]
    pub fn deserializer_seed<'a>(&'a self, target: &'a mut dyn Reflect) -> DeserializeDriver<'a> {
        DeserializeDriver::new(target, self)
    }

    /// Encodes `value` as compact JSON.
    pub fn marshal(&self, value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&self.serializer(value))?)
    }

    /// Encodes `value` as indented JSON.
    pub fn marshal_pretty(&self, value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec_pretty(&self.serializer(value))?)
    }

    pub fn marshal_to_string(&self, value: &dyn Reflect) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(&self.serializer(value))?)
    }

    /// Decodes `bytes` into `target`.
    ///
    /// Struct fields absent from the input keep their current values. A
    /// `null` clears lists and maps, sets options to `None`, and leaves any
    /// other value unchanged. On error `target` may be partially updated.
    pub fn unmarshal(&self, bytes: &[u8], target: &mut dyn Reflect) -> Result<(), DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        serde_core::de::DeserializeSeed::deserialize(
            self.deserializer_seed(target).lenient_null(true),
            &mut deserializer,
        )?;
        deserializer.end()?;
        Ok(())
    }

    pub fn unmarshal_str(&self, text: &str, target: &mut dyn Reflect) -> Result<(), DecodeError> {
        self.unmarshal(text.as_bytes(), target)
    }

    /// [`marshal`](Self::marshal), panicking on error.
    pub fn must_marshal(&self, value: &dyn Reflect) -> Vec<u8> {
        self.marshal(value).unwrap_or_else(|err| err.handle_error())
    }

    /// [`unmarshal`](Self::unmarshal), panicking on error.
    pub fn must_unmarshal(&self, bytes: &[u8], target: &mut dyn Reflect) {
        if let Err(err) = self.unmarshal(bytes, target) {
            err.handle_error()
        }
    }
}

impl Default for JsonCodec {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for JsonCodec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JsonCodec")
            .field("settings", &self.settings())
            .field("encode_plans", &self.encode_plans)
            .field("decode_plans", &self.decode_plans)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Default instance

/// Encodes `value` with [`JsonCodec::global`].
///
/// ```
/// use kw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Item {
///     #[tag(json = "_id")]
///     pub id: u32,
///     pub label: String,
/// }
///
/// let bytes = kw_json::marshal(&Item { id: 1, label: "a".into() }).unwrap();
/// assert_eq!(bytes, br#"{"_id":1,"label":"a"}"#);
/// ```
pub fn marshal(value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
    JsonCodec::global().marshal(value)
}

/// Encodes `value` as indented JSON with [`JsonCodec::global`].
pub fn marshal_pretty(value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
    JsonCodec::global().marshal_pretty(value)
}

/// Decodes `bytes` into `target` with [`JsonCodec::global`].
pub fn unmarshal(bytes: &[u8], target: &mut dyn Reflect) -> Result<(), DecodeError> {
    JsonCodec::global().unmarshal(bytes, target)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kw_reflect::derive::Reflect;

    use super::JsonCodec;
    use crate::{Direction, NamingRule};

    #[allow(non_snake_case)]
    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Profile {
        #[tag(json = "display")]
        pub display_name: String,
        pub Age: u32,
    }

    #[test]
    fn plans_are_cached_per_direction() {
        let codec = JsonCodec::new();
        let first = codec.encode_plan::<Profile>().unwrap();
        let again = codec.encode_plan::<Profile>().unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(codec.cached_plans(Direction::Encode), 1);
        assert_eq!(codec.cached_plans(Direction::Decode), 0);

        codec.decode_plan::<Profile>().unwrap();
        assert_eq!(codec.cached_plans(Direction::Decode), 1);
    }

    #[test]
    fn setters_clear_both_caches() {
        let codec = JsonCodec::new();
        let before = codec.encode_plan::<Profile>().unwrap();
        codec.decode_plan::<Profile>().unwrap();

        codec.set_naming_rule(NamingRule::lower_initial());
        assert_eq!(codec.cached_plans(Direction::Encode), 0);
        assert_eq!(codec.cached_plans(Direction::Decode), 0);

        let after = codec.encode_plan::<Profile>().unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        let keys: Vec<_> = after.iter_exposed().map(|(_, k)| k).collect();
        assert_eq!(keys, ["display", "age"]);
    }

    #[test]
    fn clear_caches_keeps_settings() {
        let codec = JsonCodec::new();
        codec.set_custom_tag("wire").set_suppress_tag("");
        codec.encode_plan::<Profile>().unwrap();
        codec.clear_caches();
        assert_eq!(codec.cached_plans(Direction::Encode), 0);

        let settings = codec.settings();
        assert_eq!(settings.custom_tag, "wire");
        assert_eq!(settings.suppress_tag, "");
        assert_eq!(settings.default_tag, "json");
    }

    #[test]
    fn non_struct_types_have_no_plan() {
        let codec = JsonCodec::new();
        assert!(codec.encode_plan::<Vec<u32>>().is_err());
        assert!(codec.decode_plan::<String>().is_err());
    }

    #[test]
    #[should_panic]
    fn must_unmarshal_panics_on_bad_input() {
        let mut target = Profile::default();
        JsonCodec::new().must_unmarshal(b"{\"display\":", &mut target);
    }
}
