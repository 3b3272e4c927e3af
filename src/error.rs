use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Download error: {0}")]
    DownloadError(String),
    #[error("Notification error: {0}")]
    NotifyError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        ForgeError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = ForgeError::DownloadError("status 404".into());
        assert_eq!(err.to_string(), "Download error: status 404");

        let err = ForgeError::RequestError("timeout".into());
        assert_eq!(err.to_string(), "Request error: timeout");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ForgeError = io.into();
        assert!(matches!(err, ForgeError::IoError(_)));
    }
}
