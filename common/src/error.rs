use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
  #[error("configuration error: {0}")]
  Configuration(String),
  #[error("provider error: {0}")]
  Provider(String),
  #[error("filesystem error: {0}")]
  Filesystem(String),
}

impl From<std::io::Error> for DownloadError {
  fn from(err: std::io::Error) -> DownloadError {
    return DownloadError::Filesystem(format!("{}", err));
  }
}
