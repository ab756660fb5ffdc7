use http::StatusCode;

use crate::model::ErrorResponse;

/// Result of a request the server answered.
///
/// Transport, credential and deserialization failures are not outcomes,
/// they are returned as [`bookingapi_core::Error`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 2xx response parsed into the endpoint's response type.
    Success(T),
    /// Non-2xx response parsed into [`ErrorResponse`].
    Failure(RemoteError),
}

/// A request the server rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteError {
    /// HTTP status returned by the server.
    pub status: StatusCode,
    /// Parsed error body.
    pub error: ErrorResponse,
}

impl<T> Outcome<T> {
    /// Returns `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Get the success value, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// Get the remote error, if any.
    pub fn failure(self) -> Option<RemoteError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    /// Convert into a plain `Result`.
    pub fn into_result(self) -> std::result::Result<T, RemoteError> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let ok: Outcome<u8> = Outcome::Success(1);
        assert!(ok.is_success());
        assert_eq!(Some(2), ok.clone().map(|v| v + 1).success());
        assert_eq!(Ok(1), ok.into_result());

        let failed: Outcome<u8> = Outcome::Failure(RemoteError {
            status: StatusCode::BAD_REQUEST,
            error: ErrorResponse::default(),
        });
        assert!(!failed.is_success());
        assert_eq!(
            StatusCode::BAD_REQUEST,
            failed.failure().map(|e| e.status).unwrap()
        );
    }
}
