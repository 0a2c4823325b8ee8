//! Stable resource identifiers derived from names.
//!
//! An id is the URL-safe base64 of its scope key, cut to [`MAX_ID_LEN`]
//! characters. Keys whose encodings agree on that prefix share an id, so two
//! long names that only differ near the end are treated as the same entity.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const MAX_ID_LEN: usize = 22;

pub fn derive_id(scope_key: &str) -> String {
    let mut id = URL_SAFE_NO_PAD.encode(scope_key.as_bytes());
    // base64 output is ASCII, any byte offset is a char boundary
    id.truncate(MAX_ID_LEN);
    id
}

pub fn artist_id(name: &str) -> String {
    derive_id(name)
}

pub fn album_id(name: &str, artist_id: &str) -> String {
    derive_id(&format!("{}:{}", name, artist_id))
}

pub fn track_id(name: &str, album_id: &str) -> String {
    derive_id(&format!("{}:{}", name, album_id))
}
