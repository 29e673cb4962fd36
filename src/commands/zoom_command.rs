//! Zoom command

use clap::ArgMatches;
use log::info;

use crate::api::CvKit;
use crate::commands::args;
use crate::commands::command_traits::Command;
use crate::errors::{CvKitError, CvKitResult};
use crate::region::ZoomCentre;

/// Command for zooming into an image
pub struct ZoomCommand<'a> {
    input_file: String,
    output_file: String,
    level: f64,
    centre: ZoomCentre,
    kit: &'a CvKit,
}

impl<'a> ZoomCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a CvKit) -> CvKitResult<Self> {
        let input_file = args::input_file(args)?;
        let output_file = args::output_file(args, "zoom")?;
        let level = args::number::<f64>(args, "zoom")?
            .ok_or_else(|| CvKitError::InvalidParameter("Missing zoom level".to_string()))?;
        let centre = ZoomCentre::from(args::point(args, "centre")?);

        info!("Zoom: input={}, output={}, level={}, centre={:?}", input_file, output_file, level, centre);

        Ok(ZoomCommand { input_file, output_file, level, centre, kit })
    }
}

impl<'a> Command for ZoomCommand<'a> {
    fn execute(&self) -> CvKitResult<()> {
        match self.kit.zoom_file(&self.input_file, &self.output_file, self.level, self.centre)? {
            Some(window) => println!("zoom: {} around ({}, {})", window.region, window.centre.0, window.centre.1),
            None => println!("zoom: level {} rejected, image written unchanged", self.level),
        }
        Ok(())
    }
}
