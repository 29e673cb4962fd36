//! Image operations built on the region selector
//!
//! Each operation resolves its rectangle through `crate::region` and hands
//! the pixel work to the `image` crate.

mod annotate;
mod crop;
mod overlay;
mod sample;
mod warning;
mod zoom;

pub use annotate::{annotate, WHITE};
pub use crop::{crop, Cropped};
pub use overlay::{overlay, Blend, OverlayReport};
pub use sample::{sample, sample_annotated, Sample, SampleOptions};
pub use warning::{RegionWarning, WarningPolicy};
pub use zoom::{zoom, Zoomed};
