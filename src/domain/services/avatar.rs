use sha2::{Digest, Sha256};

/// Display options appended to the avatar URL as query parameters.
#[derive(Debug, Clone, Copy)]
pub struct AvatarOptions {
    /// Pixel size of the requested image
    pub size: u16,
    /// Maximum content rating
    pub rating: &'static str,
    /// Fallback image when the email has no avatar
    pub default: &'static str,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: 200,
            rating: "pg",
            default: "mp",
        }
    }
}

/// Derive a gravatar URL from an email address. Pure function: the email is
/// trimmed, lowercased and SHA-256 hashed, so the same address always maps
/// to the same URL. No network request is made.
pub fn gravatar_url(email: &str, options: &AvatarOptions) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s={}&r={}&d={}",
        hex::encode(digest),
        options.size,
        options.rating,
        options.default,
    )
}
