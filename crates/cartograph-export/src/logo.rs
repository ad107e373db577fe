use std::io::ErrorKind;
use std::path::Path;

use printpdf::image_crate::{self, DynamicImage, Rgb, RgbImage};
use tracing::{debug, warn};

/// Outcome of trying to load the branding logo.
///
/// The logo is optional: every failure collapses to [`LogoAsset::Absent`]
/// and the report renders without it.
#[derive(Debug, Clone)]
pub enum LogoAsset {
    /// Decoded image, flattened onto white.
    Loaded(RgbImage),
    Absent,
}

impl LogoAsset {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LogoAsset::Loaded(_))
    }

    /// Pixel dimensions, if loaded.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            LogoAsset::Loaded(image) => Some(image.dimensions()),
            LogoAsset::Absent => None,
        }
    }
}

/// Load the logo at `path`.
///
/// A missing file is expected and logged at debug level. A file that exists
/// but cannot be read or decoded is logged as a warning.
pub fn load_logo(path: &Path) -> LogoAsset {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no logo file, rendering without logo");
            return LogoAsset::Absent;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo file unreadable, rendering without logo");
            return LogoAsset::Absent;
        }
    };

    match image_crate::load_from_memory(&bytes) {
        Ok(image) => {
            debug!(path = %path.display(), width = image.width(), height = image.height(), "loaded logo");
            LogoAsset::Loaded(flatten_onto_white(&image))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo file undecodable, rendering without logo");
            LogoAsset::Absent
        }
    }
}

/// Composite any alpha channel over a white background; PDF image
/// XObjects here are written without a soft mask.
fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = u16::from(a);
        let blend = |c: u8| ((u16::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}
