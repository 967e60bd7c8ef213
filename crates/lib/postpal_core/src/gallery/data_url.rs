//! Parsing of `data:<mime>;base64,<payload>` image uploads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::GalleryError;

/// Maximum decoded image size: 5 MiB.
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A parsed, size-checked data URL. The payload is kept base64-encoded,
/// as received, since that is the storage format.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub content_type: String,
    pub payload: String,
}

/// Parse a `data:<mime>;base64,<payload>` URL, decode the payload to
/// validate it, and enforce the size ceiling.
pub fn parse_data_url(input: &str) -> Result<ImageData, GalleryError> {
    let rest = input
        .strip_prefix("data:")
        .ok_or(GalleryError::InvalidDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(GalleryError::InvalidDataUrl)?;
    let content_type = header
        .strip_suffix(";base64")
        .ok_or(GalleryError::InvalidDataUrl)?;
    if content_type.is_empty() {
        return Err(GalleryError::InvalidDataUrl);
    }

    let decoded = STANDARD
        .decode(payload)
        .map_err(|_| GalleryError::InvalidDataUrl)?;
    if decoded.len() > MAX_IMAGE_BYTES {
        return Err(GalleryError::TooLarge);
    }

    Ok(ImageData {
        content_type: content_type.to_string(),
        payload: payload.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_png_data_url() {
        let encoded = STANDARD.encode(b"\x89PNG\r\n\x1a\n");
        let parsed = parse_data_url(&format!("data:image/png;base64,{encoded}")).unwrap();
        assert_eq!(parsed.content_type, "image/png");
        assert_eq!(parsed.payload, encoded);
    }

    #[test]
    fn rejects_payload_over_the_size_ceiling() {
        let encoded = STANDARD.encode(vec![0u8; MAX_IMAGE_BYTES + 1]);
        let err = parse_data_url(&format!("data:image/png;base64,{encoded}")).unwrap_err();
        assert!(matches!(err, GalleryError::TooLarge));
    }

    #[test]
    fn accepts_payload_at_exactly_the_ceiling() {
        let encoded = STANDARD.encode(vec![0u8; MAX_IMAGE_BYTES]);
        assert!(parse_data_url(&format!("data:image/png;base64,{encoded}")).is_ok());
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(matches!(
            parse_data_url("image/png;base64,aGVsbG8="),
            Err(GalleryError::InvalidDataUrl)
        ));
    }

    #[test]
    fn rejects_missing_comma() {
        assert!(matches!(
            parse_data_url("data:image/png;base64"),
            Err(GalleryError::InvalidDataUrl)
        ));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            parse_data_url("data:image/png;base64,@@@not-base64@@@"),
            Err(GalleryError::InvalidDataUrl)
        ));
    }

    #[test]
    fn rejects_empty_content_type() {
        assert!(matches!(
            parse_data_url("data:;base64,aGVsbG8="),
            Err(GalleryError::InvalidDataUrl)
        ));
    }
}
