pub mod errors;
pub mod region;
pub mod ops;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CvKit;

pub use config::Config;
pub use errors::{CvKitError, CvKitResult};
pub use ops::{Blend, RegionWarning, SampleOptions, WarningPolicy};
pub use region::{Placement, Point, RasterBounds, Region, Size, ZoomCentre};
