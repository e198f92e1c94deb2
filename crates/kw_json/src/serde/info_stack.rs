use std::fmt::{Debug, Formatter};
use std::slice::Iter;

use kw_reflect::info::TypeInfo;

/// The types a driver is currently inside of, outermost first.
#[derive(Default, Clone)]
pub(super) struct TypeInfoStack {
    stack: Vec<&'static TypeInfo>,
}

impl TypeInfoStack {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, type_info: &'static TypeInfo) {
        self.stack.push(type_info);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn iter(&self) -> Iter<'_, &'static TypeInfo> {
        self.stack.iter()
    }
}

impl Debug for TypeInfoStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter();

        if let Some(first) = iter.next() {
            writeln!(f, "`{}`", first.type_path())?;
        }

        for info in iter {
            writeln!(f, " -> `{}`", info.type_path())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kw_reflect::info::Typed;

    use super::TypeInfoStack;

    #[test]
    fn debug_lists_outermost_first() {
        let mut stack = TypeInfoStack::new();
        stack.push(i32::type_info());
        stack.push(u8::type_info());
        assert_eq!(format!("{stack:?}"), "`i32`\n -> `u8`\n");

        stack.pop();
        assert_eq!(stack.iter().len(), 1);
    }
}
