//! Crop command

use clap::ArgMatches;
use log::info;

use crate::api::CvKit;
use crate::commands::args;
use crate::commands::command_traits::Command;
use crate::errors::{CvKitError, CvKitResult};
use crate::region::{Point, Size};

/// Command for cropping an image
pub struct CropCommand<'a> {
    input_file: String,
    output_file: String,
    size: Size,
    /// Top-left corner, image origin when absent
    position: Option<Point>,
    kit: &'a CvKit,
}

impl<'a> CropCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a CvKit) -> CvKitResult<Self> {
        let input_file = args::input_file(args)?;
        let output_file = args::output_file(args, "crop")?;
        let size = args::size(args)?
            .ok_or_else(|| CvKitError::InvalidParameter("Crop needs --size w,h".to_string()))?;
        let position = args::point(args, "pos")?;

        info!("Crop: input={}, output={}, size={:?}, pos={:?}", input_file, output_file, size, position);

        Ok(CropCommand { input_file, output_file, size, position, kit })
    }
}

impl<'a> Command for CropCommand<'a> {
    fn execute(&self) -> CvKitResult<()> {
        let (region, warning) = self.kit.crop_file(&self.input_file, &self.output_file, self.size, self.position)?;
        println!("crop: {}", region);
        if let Some(warning) = warning {
            info!("Crop finished with warning: {}", warning);
        }
        Ok(())
    }
}
