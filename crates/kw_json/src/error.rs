use thiserror::Error;

/// An error raised while encoding a value.
///
/// Failures of the JSON engine pass through unchanged. Failures of the
/// traversal itself, such as a field missing from a reflected struct, are
/// raised through the engine and arrive here the same way.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EncodeError {
    /// Panics with the error message.
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}")
    }
}

/// An error raised while decoding text into a value.
///
/// ```
/// use kw_json::{DecodeError, JsonCodec};
///
/// let mut target = 0_u8;
/// let err = JsonCodec::new().unmarshal(b"\"eight\"", &mut target).unwrap_err();
/// let DecodeError::Json(inner) = &err;
/// assert!(inner.is_data());
/// ```
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Panics with the error message.
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}")
    }
}
