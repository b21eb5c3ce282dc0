//! photo evidence capture, supplied by the host platform's camera.
use std::path::PathBuf;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("failed to capture image: {0}")]
    CaptureFailed(String),
}

/// a photo taken on the device. only its local location is known to the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedPhoto {
    pub uri: PathBuf,
}

pub trait EvidenceCapture: Send + Sync {
    /// requests camera permission if needed and takes one picture.
    fn capture(&self) -> Result<CapturedPhoto, CaptureError>;
}

/// a picture already on disk, used where no camera is attached.
#[derive(Clone, Debug)]
pub struct PhotoFile {
    path: PathBuf,
}

impl PhotoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EvidenceCapture for PhotoFile {
    fn capture(&self) -> Result<CapturedPhoto, CaptureError> {
        if !self.path.is_file() {
            return Err(CaptureError::CaptureFailed(format!(
                "photo '{}' does not exist",
                self.path.display()
            )));
        }
        Ok(CapturedPhoto {
            uri: self.path.clone(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{CaptureError, EvidenceCapture, PhotoFile};

    #[test]
    fn test_photo_file() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let photo = PhotoFile::new(file.path()).capture().expect("exists");
        assert_eq!(photo.uri, file.path());

        let missing = PhotoFile::new("/no/such/photo.jpg").capture();
        assert!(matches!(missing, Err(CaptureError::CaptureFailed(_))));
    }
}
