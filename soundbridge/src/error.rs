use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Enumeration error: {0}")]
    Enumeration(#[from] soundbridge_discovery::EnumerationError),

    #[error("State error: {0}")]
    State(#[from] soundbridge_state::StateError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
