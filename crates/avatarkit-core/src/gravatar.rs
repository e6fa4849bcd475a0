//! Gravatar URL construction.

use sha2::{Digest, Sha256};

use crate::config::AvatarConfig;

/// Resolution hint sent to the gravatar service, independent of display size
pub const DEFAULT_REMOTE_SIZE: u32 = 120;

/// Largest resolution the gravatar service will serve
pub const MAX_REMOTE_SIZE: u32 = 2048;

/// Normalize a gravatar id to the hash used in the URL path.
///
/// Ids that already look like an MD5 or SHA-256 hex digest pass through
/// (lower-cased); anything else is treated as an e-mail address.
pub fn gravatar_hash(gravatar_id: &str) -> String {
    let id = gravatar_id.trim();
    let is_digest = matches!(id.len(), 32 | 64) && id.bytes().all(|b| b.is_ascii_hexdigit());
    if is_digest {
        return id.to_ascii_lowercase();
    }

    let normalized = id.to_lowercase();
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

/// Full image URL for a gravatar at the given remote resolution
pub fn gravatar_url(config: &AvatarConfig, gravatar_id: &str, remote_size: u32) -> String {
    format!(
        "{}/avatar/{}?d={}&s={}",
        config.gravatar_base_url,
        gravatar_hash(gravatar_id),
        config.gravatar_default,
        remote_size
    )
}
