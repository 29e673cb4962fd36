//! How a caller asks for a region to be placed

use super::bounds::Point;

/// Requested top-left position of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Let the selector pick a position uniformly at random
    #[default]
    Random,
    /// Place the region at this top-left corner (clamped to fit)
    At(Point),
}

impl From<Option<Point>> for Placement {
    fn from(point: Option<Point>) -> Self {
        point.map(Placement::At).unwrap_or(Placement::Random)
    }
}

/// Requested centre of a zoom window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomCentre {
    /// Integer midpoint of the raster
    #[default]
    Middle,
    At(Point),
}

impl From<Option<Point>> for ZoomCentre {
    fn from(point: Option<Point>) -> Self {
        point.map(ZoomCentre::At).unwrap_or(ZoomCentre::Middle)
    }
}
