//! Process-wide random source for random region placement
//!
//! The source is reseeded from system entropy on every draw, so results are
//! never reproducible across calls. Callers needing reproducibility pass their
//! own `Rng` to `random_position_with`.
//!
//! Concurrent callers serialise on the mutex, and each reseed discards the
//! state left by the previous caller.

use std::sync::Mutex;

use lazy_static::lazy_static;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bounds::{Point, RasterBounds, Size};
use super::selector::check_fits;
use crate::errors::{CvKitError, CvKitResult};

lazy_static! {
    static ref RANDOM_SOURCE: Mutex<StdRng> = Mutex::new(StdRng::from_entropy());
}

/// Draw a top-left position so that a `size` region fits inside `bounds`
///
/// `x` is uniform over `[0, W - w]` and `y` over `[0, H - h]`, both inclusive.
pub fn random_position(bounds: RasterBounds, size: Size) -> CvKitResult<Point> {
    let mut source = RANDOM_SOURCE
        .lock()
        .map_err(|_| CvKitError::GenericError("Random source lock poisoned".to_string()))?;
    *source = StdRng::from_entropy();
    random_position_with(&mut *source, bounds, size)
}

/// Same as `random_position` but drawing from a caller-provided generator
pub fn random_position_with<R: Rng>(
    rng: &mut R,
    bounds: RasterBounds,
    size: Size,
) -> CvKitResult<Point> {
    check_fits(bounds, size)?;

    let x = rng.gen_range(0..=bounds.width - size.width);
    let y = rng.gen_range(0..=bounds.height - size.height);
    debug!("Random position ({}, {}) for {}x{} in {}x{}",
           x, y, size.width, size.height, bounds.width, bounds.height);

    Ok(Point::new(x as i64, y as i64))
}
