//! Raster bounds, sizes and requested points

use image::GenericImageView;

use crate::errors::{CvKitError, CvKitResult};

/// Dimensions of the raster a region is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterBounds {
    pub width: u32,
    pub height: u32,
}

impl RasterBounds {
    /// Create bounds, rejecting a raster with a zero dimension
    pub fn new(width: u32, height: u32) -> CvKitResult<Self> {
        if width == 0 || height == 0 {
            return Err(CvKitError::InvalidSize {
                width,
                height,
                max_width: u32::MAX,
                max_height: u32::MAX,
            });
        }
        Ok(RasterBounds { width, height })
    }

    /// Bounds of an image
    pub fn of<I: GenericImageView>(image: &I) -> CvKitResult<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height)
    }

    /// Whether a point lies on a pixel of the raster
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.width as i64
            && point.y < self.height as i64
    }
}

/// Width and height of a requested region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    /// Parse a "w,h" string
    pub fn parse(s: &str) -> CvKitResult<Self> {
        let (w, h) = parse_pair::<u32>(s, "w,h")?;
        Ok(Size::new(w, h))
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::new(16, 16)
    }
}

/// A requested position; may be negative or past the raster edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Parse an "x,y" string
    pub fn parse(s: &str) -> CvKitResult<Self> {
        let (x, y) = parse_pair::<i64>(s, "x,y")?;
        Ok(Point::new(x, y))
    }
}

fn parse_pair<T: std::str::FromStr>(s: &str, expected: &str) -> CvKitResult<(T, T)> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(CvKitError::InvalidParameter(format!(
            "Invalid format '{}'. Expected '{}'",
            s, expected
        )));
    }

    let first = parts[0].trim().parse::<T>().map_err(|_| {
        CvKitError::InvalidParameter(format!("Invalid value '{}' in '{}'", parts[0], s))
    })?;
    let second = parts[1].trim().parse::<T>().map_err(|_| {
        CvKitError::InvalidParameter(format!("Invalid value '{}' in '{}'", parts[1], s))
    })?;

    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bounds_rejected() {
        assert!(RasterBounds::new(0, 10).is_err());
        assert!(RasterBounds::new(10, 0).is_err());
        assert!(RasterBounds::new(1, 1).is_ok());
    }

    #[test]
    fn test_bounds_of_image() {
        let img = image::GrayImage::new(64, 48);
        let bounds = RasterBounds::of(&img).unwrap();
        assert_eq!(bounds, RasterBounds { width: 64, height: 48 });
    }

    #[test]
    fn test_contains() {
        let bounds = RasterBounds::new(10, 10).unwrap();
        assert!(bounds.contains(Point::new(0, 0)));
        assert!(bounds.contains(Point::new(9, 9)));
        assert!(!bounds.contains(Point::new(10, 0)));
        assert!(!bounds.contains(Point::new(-1, 3)));
    }

    #[test]
    fn test_parse_pairs() {
        assert_eq!(Size::parse("100, 300").unwrap(), Size::new(100, 300));
        assert_eq!(Point::parse("-5,12").unwrap(), Point::new(-5, 12));
        assert!(Size::parse("100").is_err());
        assert!(Size::parse("a,b").is_err());
        assert!(Size::parse("-1,4").is_err());
    }
}
