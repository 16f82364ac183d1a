use encoding_rs::{Encoding, UTF_8};
use http::header::CONTENT_TYPE;
use http::HeaderMap;

/// Extracts the `charset=` parameter of the `Content-Type` header, if any.
pub(crate) fn content_type_charset(headers: &HeaderMap) -> Option<String> {
    let ct = headers.get(CONTENT_TYPE)?.to_str().ok()?;

    // very small, permissive parse: look for "charset=..."
    let idx = ct.to_ascii_lowercase().find("charset=")?;
    let after = &ct[idx + "charset=".len()..];
    // charset value may be quoted or end at ; or end of string
    let end = after.find([';', ' ', '\t']).unwrap_or(after.len());
    let charset = after[..end].trim_matches('"');

    (!charset.is_empty()).then(|| charset.to_string())
}

/// Response body decoder:
/// - resolves the `Content-Type` charset label per the WHATWG encoding standard
/// - a byte order mark overrides the label
/// - unknown or missing labels decode as UTF-8, with replacement characters for bad bytes
pub(crate) fn decode_response_body(headers: &HeaderMap, body: &[u8]) -> String {
    let encoding = match content_type_charset(headers) {
        Some(label) => Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
            log::warn!("Unknown charset \"{}\", decoding as UTF-8", label);
            UTF_8
        }),
        None => UTF_8,
    };

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}
