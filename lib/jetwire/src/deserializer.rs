//! Typed deserializer handed to transports.

use std::fmt;
use std::marker::PhantomData;

use bytes::Bytes;
use jetwire_core::{ApiResponse, ApiResult, ResponseDeserializer};

use crate::ResponseDecoder;

/// [`ResponseDeserializer`] decoding replies of one response type.
///
/// # Example
///
/// ```ignore
/// let deserializer = ApiDeserializer::<StreamInfo>::default();
/// let info = deserializer.deserialize(&reply.payload).into_result()?;
/// ```
pub struct ApiDeserializer<T> {
    decoder: ResponseDecoder,
    _response: PhantomData<fn() -> T>,
}

impl<T> ApiDeserializer<T> {
    /// Create a deserializer using the given decoder.
    #[must_use]
    pub const fn new(decoder: ResponseDecoder) -> Self {
        Self {
            decoder,
            _response: PhantomData,
        }
    }

    /// The underlying decoder.
    #[must_use]
    pub const fn decoder(&self) -> &ResponseDecoder {
        &self.decoder
    }
}

impl<T> Default for ApiDeserializer<T> {
    fn default() -> Self {
        Self::new(ResponseDecoder::default())
    }
}

impl<T> Clone for ApiDeserializer<T> {
    fn clone(&self) -> Self {
        Self::new(self.decoder.clone())
    }
}

impl<T> fmt::Debug for ApiDeserializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiDeserializer")
            .field("response_type", &std::any::type_name::<T>())
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl<T: ApiResponse> ResponseDeserializer for ApiDeserializer<T> {
    type Output = ApiResult<T>;

    fn deserialize(&self, buffer: &Bytes) -> Self::Output {
        self.decoder.decode(buffer)
    }
}
