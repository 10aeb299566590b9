use image::imageops::{self, FilterType};
use image::RgbaImage;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::render::{apply_style, fallback_glyph};
use crate::{Gravatar, GravatarError, Result, Style};

/// Fetches the raw bytes behind an avatar URL.
///
/// Retries, timeouts and caching belong to the implementation, this crate
/// only asks for the bytes once.
#[allow(async_fn_in_trait)]
pub trait ImageLoader {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// [`ImageLoader`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new() -> Result<Self> {
        let mut header = HeaderMap::new();
        header.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        let client = reqwest::Client::builder()
            .default_headers(header)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageLoader for HttpImageLoader {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        log::debug!("Fetching avatar from {}", url);

        let bytes = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

/// Outcome of loading a [`GravatarImage`].
#[derive(Debug)]
pub enum AvatarPhase {
    /// The styled avatar.
    Success(RgbaImage),
    /// The avatar could not be fetched or decoded, `glyph` is the styled
    /// fallback glyph to show in its place.
    Failure {
        error: GravatarError,
        glyph: RgbaImage,
    },
}

impl AvatarPhase {
    pub fn is_success(&self) -> bool {
        matches!(self, AvatarPhase::Success(_))
    }

    /// The raster to display, whichever way loading went.
    pub fn image(&self) -> &RgbaImage {
        match self {
            AvatarPhase::Success(image) => image,
            AvatarPhase::Failure { glyph, .. } => glyph,
        }
    }

    pub fn into_image(self) -> RgbaImage {
        match self {
            AvatarPhase::Success(image) => image,
            AvatarPhase::Failure { glyph, .. } => glyph,
        }
    }

    pub fn error(&self) -> Option<&GravatarError> {
        match self {
            AvatarPhase::Success(_) => None,
            AvatarPhase::Failure { error, .. } => Some(error),
        }
    }
}

/// An avatar together with the styling of its shape and border.
///
/// The output of [`GravatarImage::load`] is always `size × size` pixels,
/// where `size` is the size of the [`Gravatar`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GravatarImage {
    gravatar: Gravatar,
    style: Style,
}

impl GravatarImage {
    pub fn new(gravatar: Gravatar) -> Self {
        Self::with_style(gravatar, Style::default())
    }

    pub fn with_style(gravatar: Gravatar, style: Style) -> Self {
        Self { gravatar, style }
    }

    pub fn gravatar(&self) -> &Gravatar {
        &self.gravatar
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Fetch the avatar with `loader` and style it.
    ///
    /// Failures never escape: they are logged and turned into
    /// [`AvatarPhase::Failure`] carrying the styled fallback glyph.
    pub async fn load<L: ImageLoader>(&self, loader: &L) -> AvatarPhase {
        match self.fetch_and_decode(loader).await {
            Ok(image) => AvatarPhase::Success(apply_style(&image, self.style)),
            Err(error) => {
                log::warn!(
                    "Failed to load avatar for {}: {}",
                    self.gravatar.email_hash(),
                    error
                );
                let glyph = fallback_glyph(self.gravatar.size());
                AvatarPhase::Failure {
                    error,
                    glyph: apply_style(&glyph, self.style),
                }
            }
        }
    }

    /// Synchronized version of [`GravatarImage::load`].
    ///
    /// Outside of a runtime a fresh one is created. Inside a multi-thread
    /// runtime the current worker is handed over with `block_in_place`.
    /// A current-thread runtime cannot be blocked on, so that case is an
    /// error.
    pub fn load_synced<L: ImageLoader>(
        &self,
        loader: &L,
    ) -> Result<AvatarPhase> {
        match Handle::try_current() {
            Ok(handle) => match handle.runtime_flavor() {
                RuntimeFlavor::MultiThread => {
                    Ok(tokio::task::block_in_place(|| {
                        handle.block_on(self.load(loader))
                    }))
                }
                _ => Err(GravatarError::Runtime(
                    "cannot block inside a current-thread runtime",
                )),
            },
            Err(_) => {
                let runtime = Runtime::new()?;
                Ok(runtime.block_on(self.load(loader)))
            }
        }
    }

    async fn fetch_and_decode<L: ImageLoader>(
        &self,
        loader: &L,
    ) -> Result<RgbaImage> {
        let url = self.gravatar.avatar_url();
        let bytes = loader.fetch(&url).await?;
        let image = image::load_from_memory(&bytes)?.to_rgba8();

        let size = self.gravatar.size();
        if image.dimensions() == (size, size) {
            return Ok(image);
        }
        log::debug!(
            "Resizing avatar from {:?} to {}x{}",
            image.dimensions(),
            size,
            size
        );
        Ok(imageops::resize(&image, size, size, FilterType::Lanczos3))
    }
}
