//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

mod args;
pub mod command_traits;
pub mod crop_command;
pub mod info_command;
pub mod overlay_command;
pub mod sample_command;
pub mod zoom_command;

pub use command_traits::{Command, CommandFactory};
pub use crop_command::CropCommand;
pub use info_command::InfoCommand;
pub use overlay_command::OverlayCommand;
pub use sample_command::SampleCommand;
pub use zoom_command::ZoomCommand;

use clap::ArgMatches;
use crate::api::CvKit;
use crate::errors::{CvKitError, CvKitResult};

/// Factory for creating command instances based on CLI arguments
///
/// At most one operation flag may be given; with none, the image is
/// described.
pub struct CvKitCommandFactory;

impl CvKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CvKitCommandFactory
    }
}

impl Default for CvKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CvKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a CvKit) -> CvKitResult<Box<dyn Command + 'a>> {
        let sample = args.get_flag("sample");
        let crop = args.get_flag("crop");
        let zoom = args.contains_id("zoom");
        let overlay = args.contains_id("overlay");

        let selected = [sample, crop, zoom, overlay].iter().filter(|f| **f).count();
        if selected > 1 {
            return Err(CvKitError::InvalidParameter(
                "Choose one of --sample, --crop, --zoom or --overlay".to_string(),
            ));
        }

        if sample {
            Ok(Box::new(SampleCommand::new(args, kit)?))
        } else if crop {
            Ok(Box::new(CropCommand::new(args, kit)?))
        } else if zoom {
            Ok(Box::new(ZoomCommand::new(args, kit)?))
        } else if overlay {
            Ok(Box::new(OverlayCommand::new(args, kit)?))
        } else {
            Ok(Box::new(InfoCommand::new(args, kit)?))
        }
    }
}
