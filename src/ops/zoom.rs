//! Zooming into an image
//!
//! The zoom window is resolved around a centre, copied, and scaled back up to
//! the size of the source image.

use image::imageops::FilterType;
use image::DynamicImage;
use log::{debug, warn};

use crate::errors::CvKitResult;
use crate::region::{zoom_window, RasterBounds, ZoomCentre, ZoomOutcome, ZoomRejection, ZoomWindow};

/// Result of a zoom
#[derive(Debug, Clone)]
pub struct Zoomed {
    /// Zoomed image, or an unchanged copy of the input when rejected
    pub image: DynamicImage,
    /// The window shown, `None` when the level was rejected
    pub window: Option<ZoomWindow>,
    pub rejection: Option<ZoomRejection>,
}

/// Zoom into `image` by `level` around `centre`
///
/// A level below 1 is rejected: a diagnostic is logged and the input is
/// returned unchanged.
pub fn zoom(
    image: &DynamicImage,
    level: f64,
    centre: ZoomCentre,
    filter: FilterType,
) -> CvKitResult<Zoomed> {
    let bounds = RasterBounds::of(image)?;

    let window = match zoom_window(bounds, level, centre) {
        ZoomOutcome::Window(window) => window,
        ZoomOutcome::Rejected(rejection) => {
            warn!("{}", rejection);
            return Ok(Zoomed {
                image: image.clone(),
                window: None,
                rejection: Some(rejection),
            });
        }
    };

    let region = window.region;
    debug!("Zoom window {} scaled to {}x{}", region, bounds.width, bounds.height);

    let view = image.crop_imm(region.x, region.y, region.width, region.height);
    let scaled = view.resize_exact(bounds.width, bounds.height, filter);

    Ok(Zoomed {
        image: scaled,
        window: Some(window),
        rejection: None,
    })
}
