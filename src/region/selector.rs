//! Bounded region selection
//!
//! Every function here is pure arithmetic on rectangle coordinates. Two
//! policies are offered for requests that do not fit:
//!
//! - clamp-to-fit slides the position back inside and keeps the size
//!   (used by sample, zoom and overlay placement)
//! - shrink-to-fit keeps the position and reduces the size (used by crop
//!   and by overlay sizing), reporting the adjustment so the caller can warn

use std::fmt;

use log::debug;

use super::bounds::{Point, RasterBounds, Size};
use super::placement::{Placement, ZoomCentre};
use super::random::random_position;
use super::region::Region;
use crate::errors::{CvKitError, CvKitResult};

/// What the selector changed to make a request fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionAdjustment {
    /// The request fitted as given
    None,
    /// Clamp-to-fit moved the position; size is unchanged
    Repositioned { from: Point },
    /// Shrink-to-fit reduced the size; position is unchanged
    Shrunk { requested: Size },
}

/// A resolved region together with the adjustment that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub region: Region,
    pub adjustment: RegionAdjustment,
}

impl Resolution {
    pub fn was_shrunk(&self) -> bool {
        matches!(self.adjustment, RegionAdjustment::Shrunk { .. })
    }
}

/// Check that a size is non-zero and no larger than the raster
pub(crate) fn check_fits(bounds: RasterBounds, size: Size) -> CvKitResult<()> {
    if size.width == 0
        || size.height == 0
        || size.width > bounds.width
        || size.height > bounds.height
    {
        return Err(CvKitError::InvalidSize {
            width: size.width,
            height: size.height,
            max_width: bounds.width,
            max_height: bounds.height,
        });
    }
    Ok(())
}

fn clamp_axis(position: i64, extent: u32, limit: u32) -> u32 {
    // check_fits guarantees extent <= limit
    let max = (limit - extent) as i64;
    position.clamp(0, max) as u32
}

/// Resolve `size` at `position`, sliding each axis back inside the raster
///
/// Never warns. Resolving a position that already fits returns it unchanged.
pub fn clamp_to_fit(bounds: RasterBounds, size: Size, position: Point) -> CvKitResult<Resolution> {
    check_fits(bounds, size)?;

    let x = clamp_axis(position.x, size.width, bounds.width);
    let y = clamp_axis(position.y, size.height, bounds.height);

    let adjustment = if x as i64 != position.x || y as i64 != position.y {
        debug!("Clamped position ({}, {}) to ({}, {})", position.x, position.y, x, y);
        RegionAdjustment::Repositioned { from: position }
    } else {
        RegionAdjustment::None
    };

    Ok(Resolution {
        region: Region::new(x, y, size.width, size.height),
        adjustment,
    })
}

/// Resolve `size` at `position`, reducing the size on any axis that overflows
///
/// The position must lie on the raster; it is never moved.
pub fn shrink_to_fit(bounds: RasterBounds, size: Size, position: Point) -> CvKitResult<Resolution> {
    if size.width == 0 || size.height == 0 {
        return Err(CvKitError::InvalidSize {
            width: size.width,
            height: size.height,
            max_width: bounds.width,
            max_height: bounds.height,
        });
    }
    if !bounds.contains(position) {
        return Err(CvKitError::InvalidPosition {
            x: position.x,
            y: position.y,
            width: bounds.width,
            height: bounds.height,
        });
    }

    let x = position.x as u32;
    let y = position.y as u32;
    let width = size.width.min(bounds.width - x);
    let height = size.height.min(bounds.height - y);

    let adjustment = if width != size.width || height != size.height {
        debug!("Shrunk {}x{} at ({}, {}) to {}x{}",
               size.width, size.height, x, y, width, height);
        RegionAdjustment::Shrunk { requested: size }
    } else {
        RegionAdjustment::None
    };

    Ok(Resolution {
        region: Region::new(x, y, width, height),
        adjustment,
    })
}

/// Resolve a region for a sample-style call site
///
/// `Placement::Random` draws a position that always fits; `Placement::At`
/// goes through clamp-to-fit.
pub fn select(bounds: RasterBounds, size: Size, placement: Placement) -> CvKitResult<Resolution> {
    match placement {
        Placement::Random => {
            let point = random_position(bounds, size)?;
            Ok(Resolution {
                region: Region::new(point.x as u32, point.y as u32, size.width, size.height),
                adjustment: RegionAdjustment::None,
            })
        }
        Placement::At(point) => clamp_to_fit(bounds, size, point),
    }
}

/// A resolved zoom window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomWindow {
    /// Centre after clamping
    pub centre: (u32, u32),
    pub half_width: u32,
    pub half_height: u32,
    /// `(cx - hw, cy - hh, 2·hw, 2·hh)`
    pub region: Region,
}

/// Why a zoom request was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomRejection {
    /// Level below 1 or not a number
    LevelBelowOne(f64),
    /// Level so deep that the window would have no pixels
    TooDeep { level: f64, bounds: RasterBounds },
}

impl fmt::Display for ZoomRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomRejection::LevelBelowOne(_) => write!(f, "Cannot have zoom level less than 1."),
            ZoomRejection::TooDeep { level, bounds } => write!(
                f,
                "Zoom level {} leaves no pixels of a {}x{} image.",
                level, bounds.width, bounds.height
            ),
        }
    }
}

/// Outcome of zoom window resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    Window(ZoomWindow),
    Rejected(ZoomRejection),
}

fn clamp_centre(requested: i64, half: u32, limit: u32) -> u32 {
    requested.clamp(half as i64, (limit - half) as i64) as u32
}

/// Resolve the window shown at zoom `level` around `centre`
///
/// Half-extents are `floor(W / 2L)` and `floor(H / 2L)`. The centre is
/// clamped so the window stays inside the raster. Levels below 1 are rejected
/// without computing anything.
pub fn zoom_window(bounds: RasterBounds, level: f64, centre: ZoomCentre) -> ZoomOutcome {
    // negated comparison also rejects NaN
    if !(level >= 1.0) {
        return ZoomOutcome::Rejected(ZoomRejection::LevelBelowOne(level));
    }

    let half_width = (bounds.width as f64 / (2.0 * level)).floor() as u32;
    let half_height = (bounds.height as f64 / (2.0 * level)).floor() as u32;
    if half_width == 0 || half_height == 0 {
        return ZoomOutcome::Rejected(ZoomRejection::TooDeep { level, bounds });
    }

    let requested = match centre {
        ZoomCentre::Middle => Point::new((bounds.width / 2) as i64, (bounds.height / 2) as i64),
        ZoomCentre::At(point) => point,
    };

    let cx = clamp_centre(requested.x, half_width, bounds.width);
    let cy = clamp_centre(requested.y, half_height, bounds.height);
    debug!("Zoom level {} centre ({}, {}) -> ({}, {})", level, requested.x, requested.y, cx, cy);

    ZoomOutcome::Window(ZoomWindow {
        centre: (cx, cy),
        half_width,
        half_height,
        region: Region::new(cx - half_width, cy - half_height, half_width * 2, half_height * 2),
    })
}

/// Pixels of the one-pixel frame immediately outside `region`
///
/// The frame runs from `(x-1, y-1)` to `(x+w, y+h)` inclusive. Parts of it
/// that fall outside the raster are dropped.
pub fn border_pixels(region: Region, bounds: RasterBounds) -> Vec<(u32, u32)> {
    let left = region.x as i64 - 1;
    let top = region.y as i64 - 1;
    // i64 so a region near u32::MAX cannot overflow
    let right = region.x as i64 + region.width as i64;
    let bottom = region.y as i64 + region.height as i64;

    let in_x = |x: i64| x >= 0 && x < bounds.width as i64;
    let in_y = |y: i64| y >= 0 && y < bounds.height as i64;

    let mut pixels = Vec::new();
    for x in left..=right {
        if !in_x(x) {
            continue;
        }
        if in_y(top) {
            pixels.push((x as u32, top as u32));
        }
        if in_y(bottom) {
            pixels.push((x as u32, bottom as u32));
        }
    }
    // corners are covered by the rows
    for y in (top + 1)..bottom {
        if !in_y(y) {
            continue;
        }
        if in_x(left) {
            pixels.push((left as u32, y as u32));
        }
        if in_x(right) {
            pixels.push((right as u32, y as u32));
        }
    }
    pixels
}
