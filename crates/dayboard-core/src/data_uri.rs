//! `data:` URI encoding for uploaded pictures.
//!
//! Pictures are stored inline in the task list as base64 `data:` URIs, the
//! same representation a browser `FileReader` produces.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Error decoding a `data:` URI.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DataUriError {
    /// The value does not start with `data:`.
    #[display("not a data URI")]
    MissingScheme,
    /// The header is not followed by a comma.
    #[display("data URI has no payload separator")]
    MissingPayload,
    /// Only base64 payloads are supported.
    #[display("data URI payload is not base64")]
    NotBase64,
    /// The payload is not valid base64.
    #[display("invalid base64 payload: {_0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// A decoded `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// Media type, such as `image/png`. Empty if the URI did not name one.
    pub mime: String,
    /// Decoded payload bytes.
    pub bytes: Vec<u8>,
}

/// Encodes `bytes` as a base64 `data:` URI.
#[must_use]
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decodes a base64 `data:` URI.
///
/// # Errors
///
/// Returns [`DataUriError`] if `uri` is not a base64 `data:` URI.
pub fn decode(uri: &str) -> Result<DataUri, DataUriError> {
    let rest = uri.strip_prefix("data:").ok_or(DataUriError::MissingScheme)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(DataUriError::NotBase64)?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(DataUri {
        mime: mime.to_owned(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::{DataUriError, decode, encode};

    #[test]
    fn test_decode_reads_mime_and_bytes() {
        let uri = encode("image/png", &[0x89, b'P', b'N', b'G']);
        assert!(uri.starts_with("data:image/png;base64,"));

        let decoded = decode(&uri).unwrap();
        assert_eq!(decoded.mime, "image/png");
        assert_eq!(decoded.bytes, [0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_decode_rejects_non_data_uris() {
        assert!(matches!(
            decode("https://example.com/a.png"),
            Err(DataUriError::MissingScheme)
        ));
        assert!(matches!(
            decode("data:image/png;base64"),
            Err(DataUriError::MissingPayload)
        ));
        assert!(matches!(
            decode("data:text/plain,hello"),
            Err(DataUriError::NotBase64)
        ));
        assert!(matches!(
            decode("data:image/png;base64,@@@"),
            Err(DataUriError::InvalidBase64(_))
        ));
    }
}
