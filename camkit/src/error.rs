//! Error types for camkit
//!
//! The camera wrapper itself never fails. These errors only appear at the
//! few boundaries around it: decoding raw control-mode codes, configuring the
//! screen, and describing textures.

use std::fmt;

/// Result type for camkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// camkit errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Raw camera control mode code is out of range
    InvalidCameraMode(i32),

    /// Screen / viewport dimensions are unusable
    InvalidViewport(String),

    /// Invalid resource description (texture, source rectangle, ...)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCameraMode(code) => write!(f, "Invalid camera mode: {}", code),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity and return it from the current function.
///
/// ```ignore
/// camkit_bail!("camkit::Texture2D", Error::InvalidResource("zero width".to_string()));
/// ```
#[macro_export]
macro_rules! camkit_bail {
    ($source:expr, $err:expr) => {{
        let err = $err;
        $crate::camkit_error!($source, "{}", err);
        return Err(err);
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
