//! # Gravatar
//!
//! `gravatar` builds Gravatar avatar URLs from an email address and renders
//! the fetched avatar with a shape and border.
//!
//! - [`Gravatar`] normalizes the email address, validates the display
//!   options and derives the [`EmailHash`] and the avatar URL.
//! - [`GravatarImage`] pairs a [`Gravatar`] with a [`Style`], loads the
//!   image through an [`ImageLoader`] and applies the style to it.
//!
//! ```
//! use gravatar::Gravatar;
//!
//! let gravatar = Gravatar::new("john.doe@example.com");
//! assert!(gravatar
//!     .avatar_url()
//!     .as_str()
//!     .ends_with("?size=80&rating=g&default=mp&forcedefault=n"));
//! ```

mod avatar;
mod default_avatar;
mod errors;
mod gravatar;
mod hash;
mod rating;
pub mod render;
mod style;

pub use avatar::{AvatarPhase, GravatarImage, HttpImageLoader, ImageLoader};
pub use default_avatar::DefaultAvatar;
pub use errors::{GravatarError, Result};
pub use gravatar::{
    normalize_email, Gravatar, GravatarOptions, DEFAULT_SIZE,
    GRAVATAR_BASE_URL, MAX_SIZE, MIN_SIZE,
};
pub use hash::{EmailHash, EMAIL_HASH_LEN};
pub use rating::Rating;
pub use style::{
    Border, ClipShape, StrokeColor, Style, StyleSpec, CORNER_RADIUS,
    STROKE_LINE_WIDTH,
};
