//! Raster rendition of [`Style`]: clip the avatar to its shape and stroke
//! the border on top of it.

use image::{Pixel, Rgba, RgbaImage};

use crate::style::{StrokeColor, Style};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Apply the clip shape and border of `style` to `image`.
///
/// A pixel is kept when its centre lies inside the shape. The border is
/// drawn inside the shape: pixels whose centre is closer to the edge than
/// the stroke width get the stroke color blended over them.
pub fn apply_style(image: &RgbaImage, style: Style) -> RgbaImage {
    let spec = style.spec();
    let (width, height) = image.dimensions();
    let (w, h) = (width as f64, height as f64);

    log::trace!("Applying style {} to {}x{} image", style, width, height);

    let mut styled = image.clone();
    for (x, y, pixel) in styled.enumerate_pixels_mut() {
        let (cx, cy) = (x as f64 + 0.5, y as f64 + 0.5);
        let distance = spec.clip.edge_distance(cx, cy, w, h);
        if distance < 0.0 {
            *pixel = TRANSPARENT;
            continue;
        }
        if let Some(border) = spec.border {
            if distance < border.line_width {
                pixel.blend(&border.color.rgba());
            }
        }
    }
    styled
}

/// The glyph shown when the avatar cannot be loaded: a diagonal slash
/// across a transparent `size × size` canvas.
pub fn fallback_glyph(size: u32) -> RgbaImage {
    let color = StrokeColor::Tertiary.rgba();
    let thickness = (size as f64 / 16.0).max(1.0);

    RgbaImage::from_fn(size, size, |x, y| {
        // Distance from the pixel centre to the line y = x
        let distance = (x as f64 - y as f64).abs() / std::f64::consts::SQRT_2;
        if distance <= thickness / 2.0 {
            color
        } else {
            TRANSPARENT
        }
    })
}
