use serde_core::{Serialize, Serializer, ser::SerializeMap};

use super::SerializeDriver;

use crate::JsonCodec;
use kw_reflect::ops::Map;

/// A serializer for [`Map`] values. Entries are written in key order so that
/// hash maps encode deterministically.
pub(super) struct MapSerializer<'a> {
    pub map: &'a dyn Map,
    pub codec: &'a JsonCodec,
}

impl Serialize for MapSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut state = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            state.serialize_entry(key, &SerializeDriver::new(value, self.codec))?;
        }
        state.end()
    }
}
