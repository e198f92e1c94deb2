use std::fmt::Display;

use serde_core::ser::Error;

#[cfg(all(debug_assertions, feature = "debug"))]
std::thread_local! {
    pub(super) static TYPE_INFO_STACK: std::cell::RefCell<crate::serde::TypeInfoStack> =
        const { std::cell::RefCell::new(crate::serde::TypeInfoStack::new()) };
}

/// Builds a serializer error carrying the type info stack. Prefer it over
/// [`Error::custom`] inside the drivers.
#[cfg(all(debug_assertions, feature = "debug"))]
#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    TYPE_INFO_STACK.with_borrow(|stack| E::custom(format_args!("{msg} (stack:\n{stack:?})")))
}

#[cfg(not(all(debug_assertions, feature = "debug")))]
#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    E::custom(msg)
}
