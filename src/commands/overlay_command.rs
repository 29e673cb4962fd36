//! Overlay command

use clap::ArgMatches;
use log::info;

use crate::api::CvKit;
use crate::commands::args;
use crate::commands::command_traits::Command;
use crate::errors::{CvKitError, CvKitResult};
use crate::ops::Blend;
use crate::region::Point;

/// Command for blending an overlay image onto the input
pub struct OverlayCommand<'a> {
    input_file: String,
    overlay_file: String,
    output_file: String,
    position: Option<Point>,
    blend: Blend,
    kit: &'a CvKit,
}

impl<'a> OverlayCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a CvKit) -> CvKitResult<Self> {
        let input_file = args::input_file(args)?;
        let overlay_file = args.get_one::<String>("overlay")
            .cloned()
            .ok_or_else(|| CvKitError::GenericError("Missing overlay file".to_string()))?;
        let output_file = args::output_file(args, "overlay")?;
        let position = args::point(args, "pos")?;

        let ratio = args::number::<f32>(args, "blend")?;
        let blend = match (args.get_flag("additive"), ratio) {
            (true, Some(_)) => {
                return Err(CvKitError::InvalidParameter(
                    "--additive and --blend cannot be combined".to_string(),
                ))
            }
            (true, None) => Blend::Additive,
            (false, Some(r)) => Blend::Ratio(r),
            (false, None) => Blend::default(),
        };

        info!("Overlay: input={}, overlay={}, output={}, pos={:?}, blend={:?}",
              input_file, overlay_file, output_file, position, blend);

        Ok(OverlayCommand { input_file, overlay_file, output_file, position, blend, kit })
    }
}

impl<'a> Command for OverlayCommand<'a> {
    fn execute(&self) -> CvKitResult<()> {
        let report = self.kit.overlay_file(
            &self.input_file,
            &self.overlay_file,
            &self.output_file,
            self.position,
            self.blend,
        )?;
        println!("overlay: {}", report.region);
        Ok(())
    }
}
