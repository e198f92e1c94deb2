use crate::Reflect;

/// Access to maps whose keys are strings.
pub trait Map: Reflect {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Removes every entry.
    fn clear(&mut self);

    /// Stores a default value under `key`, replacing any previous value,
    /// and returns it for in-place filling.
    fn insert_default(&mut self, key: String) -> &mut dyn Reflect;

    /// Iterates over the entries in the map's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;
}
