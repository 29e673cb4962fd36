//! Region structure for a resolved rectangular area
//!
//! A `Region` is always expressed in pixel coordinates where (0,0) is the
//! top-left corner of the raster. Regions produced by the selector are
//! guaranteed to lie fully inside the raster they were resolved against.

use super::bounds::{RasterBounds, Size};

/// Resolved region (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Region covering a whole raster
    pub fn full(bounds: RasterBounds) -> Self {
        Region::new(0, 0, bounds.width, bounds.height)
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Size of the region
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether every pixel of the region lies inside `bounds`
    pub fn fits_within(&self, bounds: RasterBounds) -> bool {
        // u64 so a malformed region cannot overflow the check
        (self.x as u64 + self.width as u64) <= bounds.width as u64
            && (self.y as u64 + self.height as u64) <= bounds.height as u64
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_edges() {
        let region = Region::new(10, 20, 30, 40);
        assert_eq!(region.end_x(), 40);
        assert_eq!(region.end_y(), 60);
        assert_eq!(region.to_string(), "30x40+10+20");
    }

    #[test]
    fn test_fits_within() {
        let bounds = RasterBounds { width: 100, height: 50 };
        assert!(Region::new(0, 0, 100, 50).fits_within(bounds));
        assert!(!Region::new(1, 0, 100, 50).fits_within(bounds));
        assert!(!Region::new(0, 49, 10, 2).fits_within(bounds));
        assert!(!Region::new(u32::MAX, 0, 2, 1).fits_within(bounds));
    }
}
