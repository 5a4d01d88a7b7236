use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown match logic: {0}")]
    UnknownLogic(String),
}
