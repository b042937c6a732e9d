//! Unit tests for error.rs

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_camera_mode_display() {
    let err = Error::InvalidCameraMode(-1);
    assert_eq!(format!("{}", err), "Invalid camera mode: -1");
}

#[test]
fn test_invalid_viewport_display() {
    let err = Error::InvalidViewport("width is zero".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid viewport"));
    assert!(display.contains("width is zero"));
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("texture 3 has no pixels".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("texture 3"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidCameraMode(2);
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidViewport("height is zero".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidViewport("width is zero".to_string()));
}

// ============================================================================
// BAIL MACRO
// ============================================================================

#[test]
fn test_bail_returns_error() {
    fn failing(value: i32) -> Result<i32> {
        if value < 0 {
            crate::camkit_bail!("camkit::tests", Error::InvalidCameraMode(value));
        }
        Ok(value)
    }

    assert_eq!(failing(3), Ok(3));
    assert_eq!(failing(-4), Err(Error::InvalidCameraMode(-4)));
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<()> {
        Err(Error::InvalidCameraMode(9))
    }

    fn outer() -> Result<u8> {
        inner()?;
        Ok(1)
    }

    assert_eq!(outer(), Err(Error::InvalidCameraMode(9)));
}
