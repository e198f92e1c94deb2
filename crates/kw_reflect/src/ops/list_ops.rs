use core::iter::FusedIterator;

use crate::Reflect;

/// Access to growable sequences.
pub trait List: Reflect {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Removes every element.
    fn clear(&mut self);

    /// Appends a default element and returns it for in-place filling.
    fn push_default(&mut self) -> &mut dyn Reflect;

    /// Removes the last element, returning `false` when the list was empty.
    fn pop(&mut self) -> bool;

    fn iter(&self) -> ListItemIter<'_>;
}

/// Iterator returned by [`List::iter`].
pub struct ListItemIter<'a> {
    target: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(target: &'a dyn List) -> Self {
        Self { target, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.target.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.target.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
impl FusedIterator for ListItemIter<'_> {}
