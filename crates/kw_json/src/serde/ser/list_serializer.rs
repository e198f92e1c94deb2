use serde_core::{Serialize, Serializer, ser::SerializeSeq};

use super::SerializeDriver;

use crate::JsonCodec;
use kw_reflect::ops::List;

/// A serializer for [`List`] values.
pub(super) struct ListSerializer<'a> {
    pub list: &'a dyn List,
    pub codec: &'a JsonCodec,
}

impl Serialize for ListSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_seq(Some(self.list.len()))?;
        for value in self.list.iter() {
            state.serialize_element(&SerializeDriver::new(value, self.codec))?;
        }
        state.end()
    }
}
