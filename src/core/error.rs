//! Custom error types for the viewer.
//!
//! Both error domains are recoverable and never shown in the UI:
//!
//! - [`PickerError`] - native file picker failures (all trigger the `<input>` fallback)
//! - [`ObjectUrlError`] - object URL creation failures (the file is skipped)

use thiserror::Error;

/// Native file picker (`window.showOpenFilePicker`) errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Browser window not available or the API is missing.
    #[error("native file picker not supported")]
    Unsupported,
    /// The user dismissed the dialog without choosing anything.
    #[error("file picker dismissed")]
    Cancelled,
    /// The picker promise rejected for any other reason.
    #[error("file picker rejected: {0}")]
    Rejected(String),
    /// A returned handle did not behave like a `FileSystemFileHandle`.
    #[error("invalid file handle returned by picker")]
    InvalidHandle,
}

impl PickerError {
    /// Map a DOMException name to the matching variant.
    ///
    /// `AbortError` is what browsers raise when the dialog is closed.
    pub fn from_exception_name(name: &str, message: String) -> Self {
        match name {
            "AbortError" => Self::Cancelled,
            _ => Self::Rejected(message),
        }
    }

    /// Whether the failure is worth a console warning.
    ///
    /// Every variant still falls back to the hidden `<input type="file">`.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::InvalidHandle)
    }
}

/// Failure to create a `blob:` URL for a picked file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not create object URL for {file_name}")]
pub struct ObjectUrlError {
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_maps_to_cancelled() {
        let err = PickerError::from_exception_name("AbortError", "closed".into());
        assert_eq!(err, PickerError::Cancelled);
        assert!(!err.is_unexpected());
    }

    #[test]
    fn test_other_exceptions_are_unexpected() {
        let err = PickerError::from_exception_name("SecurityError", "not allowed".into());
        assert_eq!(err, PickerError::Rejected("not allowed".into()));
        assert!(err.is_unexpected());
        assert!(!PickerError::Unsupported.is_unexpected());
        assert!(PickerError::InvalidHandle.is_unexpected());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PickerError::Rejected("boom".into()).to_string(),
            "file picker rejected: boom"
        );
        let err = ObjectUrlError {
            file_name: "cat.png".into(),
        };
        assert_eq!(err.to_string(), "could not create object URL for cat.png");
    }
}
