use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Wraps a repository cursor so it can travel unescaped in a query string.
pub fn encode_page_token(cursor: &str) -> String {
    URL_SAFE_NO_PAD.encode(cursor.as_bytes())
}

pub fn decode_page_token(token: &str) -> Result<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.as_bytes())
        .context("page token is not url-safe base64")?;
    String::from_utf8(bytes).context("page token does not decode to utf-8")
}
