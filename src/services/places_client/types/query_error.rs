use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Transport failure: {0}")]
    TransportFailure(String),
}
