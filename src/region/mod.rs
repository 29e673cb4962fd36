//! Bounded region selection
//!
//! This module computes in-bounds rectangles inside a raster of known size
//! from requests that may or may not fit. It never touches pixel data.

mod bounds;
mod placement;
mod random;
#[allow(clippy::module_inception)]
mod region;
mod selector;

pub use bounds::{Point, RasterBounds, Size};
pub use placement::{Placement, ZoomCentre};
pub use random::{random_position, random_position_with};
pub use region::Region;
pub use selector::{
    border_pixels, clamp_to_fit, select, shrink_to_fit, zoom_window, RegionAdjustment, Resolution,
    ZoomOutcome, ZoomRejection, ZoomWindow,
};
