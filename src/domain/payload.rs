//! Export payload returned by the business layer

/// Marker the business layer puts in its response body when an export fails
pub const BUSINESS_LAYER_ERROR_MARKER: &str = "Error loading data for db Export";

/// Opaque export produced by the business layer
///
/// Owned by the fetch step until it is moved into the artifact store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload(String);

impl ExportPayload {
    /// Wrap a response body
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    /// Whether the body carries the business layer's failure marker
    pub fn is_business_error(&self) -> bool {
        self.0.contains(BUSINESS_LAYER_ERROR_MARKER)
    }

    /// Payload as text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the payload into its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}
