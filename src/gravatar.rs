use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{DefaultAvatar, EmailHash, Rating, Result};

pub const GRAVATAR_BASE_URL: &str = "https://gravatar.com";

pub const DEFAULT_SIZE: u32 = 80;
pub const MIN_SIZE: i64 = 1;
pub const MAX_SIZE: i64 = 2048;

static BASE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse(GRAVATAR_BASE_URL).expect("Gravatar base URL is valid")
});

/// Lowercases the address and strips surrounding whitespace, as Gravatar
/// expects before hashing. Applying it twice changes nothing.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase().trim().to_string()
}

/// Display options for an avatar.
///
/// Every field has a default, so partial JSON such as `{"size": 200}` is a
/// valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GravatarOptions {
    /// Size in pixels, out-of-range values fall back to [`DEFAULT_SIZE`].
    pub size: i64,
    pub rating: Rating,
    pub default_avatar: DefaultAvatar,
    pub force_default_avatar: bool,
}

impl Default for GravatarOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE as i64,
            rating: Rating::default(),
            default_avatar: DefaultAvatar::default(),
            force_default_avatar: false,
        }
    }
}

impl GravatarOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Loading avatar options from {}", path.as_ref().display());

        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// The properties of a Gravatar avatar.
///
/// The email address is normalized and the size validated once, when the
/// value is built. Afterwards the value is immutable, and both the hash and
/// the URL are recomputed from the stored fields on every call.
///
/// ```
/// use gravatar::{DefaultAvatar, Gravatar, GravatarOptions, Rating};
///
/// let gravatar = Gravatar::new("John.Doe@example.com ");
/// assert_eq!(gravatar.email_address(), "john.doe@example.com");
///
/// let gravatar = Gravatar::with_options(
///     "john.doe@example.com",
///     GravatarOptions {
///         size: 1024,
///         rating: Rating::R,
///         default_avatar: DefaultAvatar::Logo,
///         force_default_avatar: true,
///     },
/// );
/// assert!(gravatar
///     .avatar_url()
///     .as_str()
///     .ends_with("?size=1024&rating=r&default=logo&forcedefault=y"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Gravatar {
    email_address: String,
    size: u32,
    rating: Rating,
    default_avatar: DefaultAvatar,
    force_default_avatar: bool,
}

impl Gravatar {
    pub fn new<S: AsRef<str>>(email_address: S) -> Self {
        Self::with_options(email_address, GravatarOptions::default())
    }

    pub fn with_options<S: AsRef<str>>(
        email_address: S,
        options: GravatarOptions,
    ) -> Self {
        Self {
            email_address: normalize_email(email_address.as_ref()),
            size: validate_size(options.size),
            rating: options.rating,
            default_avatar: options.default_avatar,
            force_default_avatar: options.force_default_avatar,
        }
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Avatar size in pixels, always within `1..=2048`.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn default_avatar(&self) -> DefaultAvatar {
        self.default_avatar
    }

    pub fn force_default_avatar(&self) -> bool {
        self.force_default_avatar
    }

    pub fn options(&self) -> GravatarOptions {
        GravatarOptions {
            size: self.size as i64,
            rating: self.rating,
            default_avatar: self.default_avatar,
            force_default_avatar: self.force_default_avatar,
        }
    }

    /// The hash Gravatar uses to identify the account.
    pub fn email_hash(&self) -> EmailHash {
        EmailHash::from_email(&self.email_address)
    }

    /// The URL of the avatar's PNG image.
    ///
    /// Query parameters are always emitted in the order
    /// `size`, `rating`, `default`, `forcedefault`.
    pub fn avatar_url(&self) -> Url {
        let mut url = BASE_URL.clone();
        url.set_path(&format!("avatar/{}", self.email_hash()));
        url.set_query(Some(&format!(
            "size={}&rating={}&default={}&forcedefault={}",
            self.size,
            self.rating,
            self.default_avatar,
            if self.force_default_avatar { "y" } else { "n" }
        )));
        log::trace!("Avatar URL: {}", url);
        url
    }
}

fn validate_size(size: i64) -> u32 {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        size as u32
    } else {
        log::debug!(
            "Size {} is out of bounds, using default size {}",
            size,
            DEFAULT_SIZE
        );
        DEFAULT_SIZE
    }
}
