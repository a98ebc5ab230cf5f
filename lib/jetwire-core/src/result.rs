//! Three-way outcome of decoding a reply.

use crate::{ApiError, DecodeError, Error};

/// Outcome of decoding one reply of the management API.
///
/// Exactly one of a typed value, a server-reported error, or a decode
/// failure. Callers branch on the variant, or flatten it with
/// [`ApiResult::into_result`].
///
/// # Example
///
/// ```ignore
/// match decoder.decode::<StreamInfo>(&buffer) {
///     ApiResult::Value(info) => println!("{} messages", info.state.messages),
///     ApiResult::Error(err) if err.is_stream_not_found() => println!("no such stream"),
///     ApiResult::Error(err) => println!("server error: {err}"),
///     ApiResult::Failure(err) => println!("bad reply: {err}"),
/// }
/// ```
#[derive(Debug)]
#[must_use]
pub enum ApiResult<T> {
    /// The decoded payload.
    Value(T),
    /// The server reported an error.
    Error(ApiError),
    /// The reply could not be decoded.
    Failure(DecodeError),
}

impl<T> ApiResult<T> {
    /// Returns `true` if a value was decoded.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if the server reported an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` if the reply could not be decoded.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Decoded value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Server error, if any.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Decode failure, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&DecodeError> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Transform the value with a function.
    pub fn map<U, F>(self, f: F) -> ApiResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => ApiResult::Value(f(value)),
            Self::Error(err) => ApiResult::Error(err),
            Self::Failure(err) => ApiResult::Failure(err),
        }
    }

    /// Flatten into a [`Result`](crate::Result).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a server error and [`Error::Decode`] for a
    /// decode failure.
    pub fn into_result(self) -> crate::Result<T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(err) => Err(Error::Api(err)),
            Self::Failure(err) => Err(Error::Decode(err)),
        }
    }
}

impl<T> From<ApiError> for ApiResult<T> {
    fn from(err: ApiError) -> Self {
        Self::Error(err)
    }
}

impl<T> From<DecodeError> for ApiResult<T> {
    fn from(err: DecodeError) -> Self {
        Self::Failure(err)
    }
}

impl<T> From<ApiResult<T>> for crate::Result<T> {
    fn from(result: ApiResult<T>) -> Self {
        result.into_result()
    }
}
