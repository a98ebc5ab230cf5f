//! Transport-facing deserializer trait.

use bytes::Bytes;

/// Turns a reply buffer received by a transport into a typed output.
///
/// Transports hold one deserializer per request kind and call it once the
/// whole reply is buffered. Implementations must not block or do I/O.
///
/// # Example
///
/// ```ignore
/// use jetwire::{ApiDeserializer, ResponseDeserializer};
///
/// let deserializer = ApiDeserializer::<StreamInfo>::default();
/// let result = deserializer.deserialize(&reply.payload);
/// ```
pub trait ResponseDeserializer: Send + Sync + 'static {
    /// Decoded output.
    type Output;

    /// Deserialize one reply buffer.
    fn deserialize(&self, buffer: &Bytes) -> Self::Output;
}

/// Deserializer that keeps the raw buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDeserializer;

impl ResponseDeserializer for RawDeserializer {
    type Output = Bytes;

    fn deserialize(&self, buffer: &Bytes) -> Self::Output {
        buffer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_deserializer() {
        let buffer = Bytes::from_static(br#"{"total":0}"#);
        assert_eq!(RawDeserializer.deserialize(&buffer), buffer);
    }
}
