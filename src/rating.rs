use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{GravatarError, Result};

/// The rating level that indicates which kind of avatar is appropriate
/// to be displayed.
///
/// Gravatar users self-rate their avatars. When the avatar does not meet
/// the requested level, the default avatar is shown instead.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Suitable for all audience types.
    #[default]
    G,
    /// May contain rude gestures, provocatively dressed individuals,
    /// the lesser swear words, or mild violence.
    Pg,
    /// May contain harsh profanity, intense violence, nudity, or hard
    /// drug use.
    R,
    /// May contain sexual imagery or extremely disturbing violence.
    X,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::G, Rating::Pg, Rating::R, Rating::X];

    /// Tag used in the `rating` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        Rating::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s)
            .ok_or_else(|| GravatarError::UnknownVariant {
                kind: "rating",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rating::G, "g")]
    #[case(Rating::Pg, "pg")]
    #[case(Rating::R, "r")]
    #[case(Rating::X, "x")]
    fn tag_text(#[case] rating: Rating, #[case] tag: &str) {
        assert_eq!(rating.to_string(), tag);
        assert_eq!(tag.parse::<Rating>().unwrap(), rating);
        assert_eq!(
            serde_json::to_string(&rating).unwrap(),
            format!("\"{tag}\"")
        );
    }

    #[test]
    fn default_is_g() {
        assert_eq!(Rating::default(), Rating::G);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "PG".parse::<Rating>().unwrap_err();
        assert!(matches!(
            err,
            GravatarError::UnknownVariant { kind: "rating", .. }
        ));
    }
}
