use thiserror::Error;

/// Failures talking to the backend.
///
/// Transport and protocol failures are real errors here — this is the I/O
/// seam, unlike the guard path, which stays total. Authorization decisions
/// are never derived from these errors; a rejected call simply surfaces.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend rejected the request with status {status}")]
    Rejected { status: reqwest::StatusCode },

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}
