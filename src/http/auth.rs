use alloc::string::String;
use alloc::vec::Vec;

use base64ct::{Base64, Encoding};

/// Builds a `Basic` credential for an `Authorization` header.
///
/// The client never adds this header on its own; pass the result alongside
/// the other request headers.
///
/// ```rust
/// use libhttp::http::auth::basic_auth;
///
/// assert_eq!(basic_auth("Aladdin", "open sesame"), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
/// ```
pub fn basic_auth(user: &str, password: &str) -> String {
    let mut credentials = Vec::with_capacity(user.len() + password.len() + 1);
    credentials.extend_from_slice(user.as_bytes());
    credentials.push(b':');
    credentials.extend_from_slice(password.as_bytes());

    let mut value = String::from("Basic ");
    value.push_str(&Base64::encode_string(&credentials));
    value
}
