//! HMAC-SHA1 request signing.
//!
//! The canonical string is `METHOD \n md5(body) \n timestamp \n path`, where
//! an absent body hashes as the empty string and the timestamp is RFC 2822.
//! The request's content type is not part of the canonical string; the
//! server omits it when validating incoming requests, so including it here
//! would break verification.

use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::{Digest, Sha1};

use crate::types::HttpMethod;

type HmacSha1 = Hmac<Sha1>;

/// Build the canonical string covered by the signature.
pub fn canonical_string(
    method: HttpMethod,
    body: Option<&[u8]>,
    timestamp: &str,
    path: &str,
) -> String {
    let body_digest = Md5::digest(body.unwrap_or_default());
    format!(
        "{method}\n{}\n{timestamp}\n{path}",
        hex::encode(body_digest)
    )
}

/// Sign one request. Pure: identical inputs always produce the identical
/// lowercase-hex signature.
pub fn sign(
    method: HttpMethod,
    body: Option<&[u8]>,
    timestamp: &str,
    path: &str,
    secret_key: &str,
) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(canonical_string(method, body, timestamp, path).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
