//! Sample command
//!
//! Takes one sample at a given or random position, or a batch of random
//! samples when `--count` is given.

use clap::ArgMatches;
use log::info;

use crate::api::CvKit;
use crate::commands::args;
use crate::commands::command_traits::Command;
use crate::errors::{CvKitError, CvKitResult};
use crate::region::{Placement, Point, Size};

/// Command for taking samples
pub struct SampleCommand<'a> {
    input_file: String,
    output_file: String,
    /// Sample size, configured default when absent
    size: Option<Size>,
    /// Top-left position, random when absent
    position: Option<Point>,
    /// Where to save the source with the sample framed
    annotated_file: Option<String>,
    /// Number of random samples to take
    count: Option<usize>,
    kit: &'a CvKit,
}

impl<'a> SampleCommand<'a> {
    /// Create a new sample command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new SampleCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CvKit) -> CvKitResult<Self> {
        let input_file = args::input_file(args)?;
        let output_file = args::output_file(args, "sample")?;
        let size = args::size(args)?;
        let position = args::point(args, "pos")?;
        let annotated_file = args.get_one::<String>("annotate").cloned();
        let count = args::number::<usize>(args, "count")?;

        if count.is_some() && (position.is_some() || annotated_file.is_some()) {
            return Err(CvKitError::InvalidParameter(
                "--count takes random samples and cannot be combined with --pos or --annotate".to_string(),
            ));
        }

        info!("Sample: input={}, output={}, size={:?}, pos={:?}, count={:?}",
              input_file, output_file, size, position, count);

        Ok(SampleCommand {
            input_file,
            output_file,
            size,
            position,
            annotated_file,
            count,
            kit,
        })
    }
}

impl<'a> Command for SampleCommand<'a> {
    fn execute(&self) -> CvKitResult<()> {
        if let Some(count) = self.count {
            let regions = self.kit.sample_batch(&self.input_file, &self.output_file, self.size, count)?;
            for (index, region) in regions.iter().enumerate() {
                println!("sample {}: {}", index, region);
            }
            return Ok(());
        }

        let region = self.kit.sample_file(
            &self.input_file,
            &self.output_file,
            self.size,
            Placement::from(self.position),
            self.annotated_file.as_deref(),
        )?;
        println!("sample: {}", region);
        Ok(())
    }
}
