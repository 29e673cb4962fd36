//! Image description command
//!
//! Prints the dimensions and colour type of an image. This is what runs
//! when no operation flag is given.

use clap::ArgMatches;
use log::info;

use crate::api::CvKit;
use crate::commands::args;
use crate::commands::command_traits::Command;
use crate::errors::CvKitResult;

/// Command for describing an image
pub struct InfoCommand<'a> {
    /// Path to the input file
    input_file: String,
    kit: &'a CvKit,
}

impl<'a> InfoCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a CvKit) -> CvKitResult<Self> {
        let input_file = args::input_file(args)?;
        Ok(InfoCommand { input_file, kit })
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> CvKitResult<()> {
        info!("Describing {}", self.input_file);
        let description = self.kit.describe(&self.input_file)?;
        println!("{}", description);
        Ok(())
    }
}
