#[derive(Debug, thiserror::Error)]
pub enum MatchError {
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error("malformed catalog entry: missing {0}")]
  DataError(&'static str),
}
