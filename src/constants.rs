pub const DEFAULT_API_URL: &str = "https://api.tinify.com/shrink";

/// TinyPNG authenticates with HTTP Basic auth where the username is always
/// the literal string "api" and the password is the account key.
pub const API_USERNAME: &str = "api";

pub const API_KEY_ENV: &str = "TINY_PNG_KEY";

// The service tolerates this content type even though the body is raw image
// bytes; it is what the upstream API has always been sent, so it is kept
// for wire compatibility.
pub const UPLOAD_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
