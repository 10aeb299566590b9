use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{GravatarError, Result};

/// The avatar displayed when no avatar exists for the email address, or
/// when the default is forced.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DefaultAvatar {
    /// A transparent PNG image.
    Blank,
    /// A geometric pattern based on the email hash.
    Identicon,
    /// The Gravatar logo.
    Logo,
    /// A generated "monster" with different colors, faces, etc.
    Monsterid,
    /// A cartoon-style silhouetted outline of a person ("mystery person").
    #[default]
    Mp,
    /// An 8-bit arcade-style pixelated face.
    Retro,
    /// A generated robot with different colors, faces, etc.
    Robohash,
    /// A generated face with differing features and backgrounds.
    Wavatar,
}

impl DefaultAvatar {
    pub const ALL: [DefaultAvatar; 8] = [
        DefaultAvatar::Blank,
        DefaultAvatar::Identicon,
        DefaultAvatar::Logo,
        DefaultAvatar::Monsterid,
        DefaultAvatar::Mp,
        DefaultAvatar::Retro,
        DefaultAvatar::Robohash,
        DefaultAvatar::Wavatar,
    ];

    /// Tag used in the `default` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultAvatar::Blank => "blank",
            DefaultAvatar::Identicon => "identicon",
            DefaultAvatar::Logo => "logo",
            DefaultAvatar::Monsterid => "monsterid",
            DefaultAvatar::Mp => "mp",
            DefaultAvatar::Retro => "retro",
            DefaultAvatar::Robohash => "robohash",
            DefaultAvatar::Wavatar => "wavatar",
        }
    }
}

impl Display for DefaultAvatar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultAvatar {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        DefaultAvatar::ALL
            .into_iter()
            .find(|avatar| avatar.as_str() == s)
            .ok_or_else(|| GravatarError::UnknownVariant {
                kind: "default avatar",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for avatar in DefaultAvatar::ALL {
            let parsed: DefaultAvatar = avatar.to_string().parse().unwrap();
            assert_eq!(parsed, avatar);
        }
    }

    #[test]
    fn serde_uses_tag_text() {
        let json = serde_json::to_string(&DefaultAvatar::Robohash).unwrap();
        assert_eq!(json, "\"robohash\"");

        let avatar: DefaultAvatar =
            serde_json::from_str("\"monsterid\"").unwrap();
        assert_eq!(avatar, DefaultAvatar::Monsterid);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("404".parse::<DefaultAvatar>().is_err());
        assert!("mystery-person".parse::<DefaultAvatar>().is_err());
    }
}
