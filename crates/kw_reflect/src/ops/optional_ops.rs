use crate::Reflect;

/// Access to `Option<T>`.
pub trait Optional: Reflect {
    fn value(&self) -> Option<&dyn Reflect>;

    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    fn set_none(&mut self);

    /// Returns the contained value, storing a default one first if empty.
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect;
}
