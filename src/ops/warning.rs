//! Recoverable warnings raised by image operations
//!
//! A warning never stops an operation. It is always returned to the caller
//! and, unless suppressed, also emitted through `log::warn!`.

use std::fmt;

use log::warn;

use crate::region::Size;

/// A non-fatal adjustment the caller may want to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionWarning {
    /// Crop went off the edge; size reduced to `adjusted`
    CropShrunk { requested: Size, adjusted: Size },
    /// Overlay did not fit at its position; cropped to `adjusted`
    OverlayCropped { requested: Size, adjusted: Size },
}

impl fmt::Display for RegionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionWarning::CropShrunk { adjusted, .. } => write!(
                f,
                "Cropped region went off the edge of the image. The cropped size has been reduced to {}x{}.",
                adjusted.width, adjusted.height
            ),
            RegionWarning::OverlayCropped { adjusted, .. } => write!(
                f,
                "The overlay image was too big to fit at the position specified. It has been cropped to {}x{}.",
                adjusted.width, adjusted.height
            ),
        }
    }
}

/// Whether warnings are written to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningPolicy {
    #[default]
    Emit,
    Suppress,
}

impl WarningPolicy {
    pub fn from_suppress_flag(suppress: bool) -> Self {
        if suppress {
            WarningPolicy::Suppress
        } else {
            WarningPolicy::Emit
        }
    }

    /// Log `warning` unless suppressed, then hand it back
    pub fn report(self, warning: RegionWarning) -> RegionWarning {
        if self == WarningPolicy::Emit {
            warn!("{}", warning);
        }
        warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::log_capture::warnings_during;

    #[test]
    fn test_crop_warning_carries_dimensions() {
        let w = RegionWarning::CropShrunk {
            requested: Size::new(50, 50),
            adjusted: Size::new(10, 12),
        };
        assert!(w.to_string().contains("reduced to 10x12"));
    }

    #[test]
    fn test_suppressed_report_still_returns_warning() {
        let w = RegionWarning::OverlayCropped {
            requested: Size::new(8, 8),
            adjusted: Size::new(4, 8),
        };
        let (returned, logged) = warnings_during(|| WarningPolicy::Suppress.report(w));
        assert_eq!(returned, w);
        assert!(logged.is_empty());
        assert_eq!(WarningPolicy::from_suppress_flag(false), WarningPolicy::Emit);
    }

    #[test]
    fn test_emitted_report_logs_message() {
        let w = RegionWarning::OverlayCropped {
            requested: Size::new(8, 8),
            adjusted: Size::new(4, 8),
        };
        let (returned, logged) = warnings_during(|| WarningPolicy::Emit.report(w));
        assert_eq!(returned, w);
        assert_eq!(logged, vec![w.to_string()]);
    }
}
