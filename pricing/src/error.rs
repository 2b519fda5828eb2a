use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Address not found")]
    AddressNotFound,

    #[error("No road route to address")]
    RouteNotFound,

    #[error("Distance service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("Unknown delivery zone: {0}")]
    UnknownZone(String),
}
