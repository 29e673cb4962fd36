//! Rectangular samples taken from an image
//!
//! A sample always has the requested size: if the requested position is too
//! close to an edge it is moved just far enough inside. With no position a
//! random one is drawn.

use image::{DynamicImage, Rgba};
use log::debug;

use super::annotate::annotate;
use crate::errors::CvKitResult;
use crate::region::{select, Placement, RasterBounds, Region, RegionAdjustment, Size};

/// Parameters for taking a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleOptions {
    /// Sample size, 16x16 by default
    pub size: Size,
    /// Top-left position, random by default
    pub placement: Placement,
}

impl SampleOptions {
    pub fn new(size: Size, placement: Placement) -> Self {
        SampleOptions { size, placement }
    }
}

/// A sample together with where it came from
#[derive(Debug, Clone)]
pub struct Sample {
    pub image: DynamicImage,
    pub region: Region,
    pub adjustment: RegionAdjustment,
}

/// Copy a sample out of `image`
pub fn sample(image: &DynamicImage, options: &SampleOptions) -> CvKitResult<Sample> {
    let bounds = RasterBounds::of(image)?;
    let resolution = select(bounds, options.size, options.placement)?;
    let region = resolution.region;
    debug!("Sampling {} from {}x{}", region, bounds.width, bounds.height);

    Ok(Sample {
        image: image.crop_imm(region.x, region.y, region.width, region.height),
        region,
        adjustment: resolution.adjustment,
    })
}

/// Copy a sample and then frame it on the source image
///
/// The frame is drawn after the copy, so it never appears in the sample.
pub fn sample_annotated(
    image: &mut DynamicImage,
    options: &SampleOptions,
    colour: Rgba<u8>,
) -> CvKitResult<Sample> {
    let taken = sample(image, options)?;
    annotate(image, taken.region, colour)?;
    Ok(taken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::annotate::WHITE;
    use crate::region::Point;
    use image::{GenericImageView, GrayImage, Luma};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = GrayImage::from_fn(width, height, |x, y| Luma([((x + y) % 256) as u8]));
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn test_default_sample_is_16x16() {
        let img = gradient(100, 80);
        let s = sample(&img, &SampleOptions::default()).unwrap();
        assert_eq!(s.image.dimensions(), (16, 16));
        assert!(s.region.fits_within(RasterBounds::new(100, 80).unwrap()));
    }

    #[test]
    fn test_sample_copies_pixels_at_clamped_position() {
        let img = gradient(100, 80);
        let opts = SampleOptions::new(Size::new(10, 10), Placement::At(Point::new(95, 5)));
        let s = sample(&img, &opts).unwrap();

        assert_eq!(s.region, Region::new(90, 5, 10, 10));
        assert!(matches!(s.adjustment, RegionAdjustment::Repositioned { .. }));
        assert_eq!(s.image.get_pixel(0, 0), img.get_pixel(90, 5));
        assert_eq!(s.image.get_pixel(9, 9), img.get_pixel(99, 14));
    }

    #[test]
    fn test_annotated_sample_excludes_frame() {
        let mut img = DynamicImage::ImageLuma8(GrayImage::new(20, 20));
        let opts = SampleOptions::new(Size::new(4, 4), Placement::At(Point::new(5, 5)));
        let s = sample_annotated(&mut img, &opts, WHITE).unwrap();

        assert!(s.image.to_luma8().pixels().all(|p| p[0] == 0));
        assert_eq!(img.to_luma8().get_pixel(4, 4)[0], 255);
        assert_eq!(img.to_luma8().get_pixel(9, 9)[0], 255);
        assert_eq!(img.to_luma8().get_pixel(5, 5)[0], 0);
    }

    #[test]
    fn test_oversized_sample_errors() {
        let img = gradient(10, 10);
        let opts = SampleOptions::new(Size::new(11, 4), Placement::Random);
        assert!(sample(&img, &opts).is_err());
    }
}
