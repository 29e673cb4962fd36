//! Debug annotation: frame a region on its source image

use image::{DynamicImage, GenericImage, Rgba};

use crate::errors::{CvKitError, CvKitResult};
use crate::region::{border_pixels, RasterBounds, Region};

/// Default frame colour
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draw a one-pixel frame just outside `region` on `image`
///
/// `colour` is converted to the image's own pixel format, so a grayscale
/// image gets a single luminance value and a colour image gets the triple.
/// Frame pixels falling outside the image are skipped. The region itself
/// must lie inside the image.
pub fn annotate(image: &mut DynamicImage, region: Region, colour: Rgba<u8>) -> CvKitResult<()> {
    let bounds = RasterBounds::of(&*image)?;
    if !region.fits_within(bounds) {
        return Err(CvKitError::InvalidParameter(format!(
            "Region {} is outside the {}x{} image",
            region, bounds.width, bounds.height
        )));
    }
    for (x, y) in border_pixels(region, bounds) {
        image.put_pixel(x, y, colour);
    }
    Ok(())
}
