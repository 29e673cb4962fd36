//! Overlaying one image on another with a blend ratio
//!
//! The overlay is placed with its top-left corner at the requested position.
//! If it runs past the edge of the target it is cropped down to size and a
//! warning is raised.

use image::{DynamicImage, GenericImage, GenericImageView, Rgba};
use log::debug;

use super::warning::{RegionWarning, WarningPolicy};
use crate::errors::{CvKitError, CvKitResult};
use crate::region::{shrink_to_fit, Point, RasterBounds, Region, Size};

/// How overlay pixels combine with the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blend {
    /// `dst = target * (1 - ratio) + overlay * ratio`; 1 is opaque, 0 invisible
    Ratio(f32),
    /// Both images added as they are; black in the overlay is transparent
    Additive,
}

impl Default for Blend {
    fn default() -> Self {
        Blend::Ratio(1.0)
    }
}

impl Blend {
    fn validate(self) -> CvKitResult<Self> {
        match self {
            Blend::Ratio(r) if !(0.0..=1.0).contains(&r) => Err(CvKitError::InvalidParameter(
                format!("Blend ratio {} must be between 0 and 1", r),
            )),
            other => Ok(other),
        }
    }

    fn mix(self, target: Rgba<u8>, overlay: Rgba<u8>) -> Rgba<u8> {
        let mut out = target;
        for c in 0..3 {
            out.0[c] = match self {
                Blend::Ratio(r) => {
                    let v = target.0[c] as f32 * (1.0 - r) + overlay.0[c] as f32 * r;
                    v.round().clamp(0.0, 255.0) as u8
                }
                Blend::Additive => target.0[c].saturating_add(overlay.0[c]),
            };
        }
        out
    }
}

/// Where the overlay went and whether it had to be cropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayReport {
    pub region: Region,
    pub warning: Option<RegionWarning>,
}

/// Blend `overlay` into `image` with its top-left corner at `position`
///
/// Blending is done on 8-bit RGBA and written back in the image's own
/// format, so 16-bit and float images keep only 8-bit precision inside the
/// overlaid area. Pixels outside it are untouched.
pub fn overlay(
    image: &mut DynamicImage,
    overlay: &DynamicImage,
    position: Point,
    blend: Blend,
    warnings: WarningPolicy,
) -> CvKitResult<OverlayReport> {
    let blend = blend.validate()?;
    let bounds = RasterBounds::of(&*image)?;
    let requested = Size::new(overlay.width(), overlay.height());

    let resolution = shrink_to_fit(bounds, requested, position)?;
    let region = resolution.region;
    debug!("Overlaying {}x{} at {} with {:?}", requested.width, requested.height, region, blend);

    let warning = resolution.was_shrunk().then(|| {
        warnings.report(RegionWarning::OverlayCropped {
            requested,
            adjusted: region.size(),
        })
    });

    // overlay pixels beyond region.size() are the cropped-away part
    for dy in 0..region.height {
        for dx in 0..region.width {
            let (x, y) = (region.x + dx, region.y + dy);
            let mixed = blend.mix(image.get_pixel(x, y), overlay.get_pixel(dx, dy));
            image.put_pixel(x, y, mixed);
        }
    }

    Ok(OverlayReport { region, warning })
}
