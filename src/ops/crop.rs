//! Cropping with shrink-to-fit
//!
//! Unlike a sample, a crop keeps its position: a region running off the
//! image is made smaller instead of being moved.

use image::DynamicImage;
use log::debug;

use super::warning::{RegionWarning, WarningPolicy};
use crate::errors::CvKitResult;
use crate::region::{shrink_to_fit, Point, RasterBounds, Region, Size};

/// Result of a crop
#[derive(Debug, Clone)]
pub struct Cropped {
    pub image: DynamicImage,
    pub region: Region,
    /// Set when the requested size had to be reduced
    pub warning: Option<RegionWarning>,
}

/// Crop `size` out of `image` with its top-left corner at `position`
pub fn crop(
    image: &DynamicImage,
    size: Size,
    position: Point,
    warnings: WarningPolicy,
) -> CvKitResult<Cropped> {
    let bounds = RasterBounds::of(image)?;
    let resolution = shrink_to_fit(bounds, size, position)?;
    let region = resolution.region;
    debug!("Cropping {} from {}x{}", region, bounds.width, bounds.height);

    let warning = resolution.was_shrunk().then(|| {
        warnings.report(RegionWarning::CropShrunk {
            requested: size,
            adjusted: region.size(),
        })
    });

    Ok(Cropped {
        image: image.crop_imm(region.x, region.y, region.width, region.height),
        region,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbImage};
    use crate::utils::log_capture::warnings_during;

    fn blank(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
    }

    #[test]
    fn test_crop_inside() {
        let c = crop(&blank(100, 100), Size::new(20, 30), Point::new(5, 5), WarningPolicy::Emit).unwrap();
        assert_eq!(c.image.dimensions(), (20, 30));
        assert!(c.warning.is_none());
    }

    #[test]
    fn test_crop_off_edge_shrinks_and_warns() {
        let c = crop(&blank(100, 100), Size::new(50, 50), Point::new(90, 90), WarningPolicy::Suppress).unwrap();
        assert_eq!(c.image.dimensions(), (10, 10));
        assert_eq!(c.region, Region::new(90, 90, 10, 10));
        assert_eq!(
            c.warning,
            Some(RegionWarning::CropShrunk {
                requested: Size::new(50, 50),
                adjusted: Size::new(10, 10),
            })
        );
    }

    #[test]
    fn test_crop_position_off_image() {
        assert!(crop(&blank(10, 10), Size::new(5, 5), Point::new(10, 10), WarningPolicy::Emit).is_err());
    }

    #[test]
    fn test_crop_shrink_logs_one_warning() {
        let (cropped, logged) = warnings_during(|| {
            crop(&blank(100, 100), Size::new(50, 50), Point::new(90, 90), WarningPolicy::Emit).unwrap()
        });
        assert!(cropped.warning.is_some());
        assert_eq!(logged.len(), 1);
        assert!(logged[0].contains("reduced to 10x10"));
    }

    #[test]
    fn test_crop_shrink_suppressed_logs_nothing() {
        let (cropped, logged) = warnings_during(|| {
            crop(&blank(100, 100), Size::new(50, 50), Point::new(90, 90), WarningPolicy::Suppress).unwrap()
        });
        assert!(cropped.warning.is_some());
        assert!(logged.is_empty());
    }

    #[test]
    fn test_crop_inside_logs_nothing() {
        let (_, logged) = warnings_during(|| {
            crop(&blank(100, 100), Size::new(50, 50), Point::new(50, 50), WarningPolicy::Emit).unwrap()
        });
        assert!(logged.is_empty());
    }
}
