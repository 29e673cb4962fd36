use image::{DynamicImage, GenericImageView};
use log::info;

use crate::config::Config;
use crate::errors::{CvKitError, CvKitResult};
use crate::ops::{self, Blend, OverlayReport, RegionWarning, SampleOptions};
use crate::region::{Placement, Point, Region, Size, ZoomCentre, ZoomWindow};
use crate::utils::logger::Logger;
use crate::utils::path_utils::{numbered_path, suffixed_path};
use crate::utils::progress::ProgressTracker;

/// Main interface to the cvkit library
pub struct CvKit {
    logger: Logger,
    config: Config,
}

impl CvKit {
    /// Create a new CvKit instance
    ///
    /// # Arguments
    /// * `record_file` - Optional path for the operation record; nothing is
    ///   recorded when `None`
    ///
    /// # Returns
    /// A CvKit instance or an error if the record file cannot be created
    pub fn new(record_file: Option<&str>) -> CvKitResult<Self> {
        let logger = match record_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(CvKit { logger, config: Config::default() })
    }

    /// Replace the settings used for defaults
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn open(path: &str) -> CvKitResult<DynamicImage> {
        info!("Loading image '{}'", path);
        Ok(image::open(path)?)
    }

    fn save(image: &DynamicImage, path: &str) -> CvKitResult<()> {
        info!("Saving {}x{} image to '{}'", image.width(), image.height(), path);
        image.save(path)?;
        Ok(())
    }

    /// Describe an image file
    ///
    /// # Returns
    /// String with dimensions and colour type
    pub fn describe(&self, input_path: &str) -> CvKitResult<String> {
        let image = Self::open(input_path)?;
        let (width, height) = image.dimensions();
        let colour = image.color();

        let mut result = format!("Image: {}\n", input_path);
        result.push_str(&format!("  Dimensions: {}x{}\n", width, height));
        result.push_str(&format!("  Colour type: {:?}\n", colour));
        result.push_str(&format!("  Channels: {}\n", colour.channel_count()));
        Ok(result)
    }

    /// Take a sample from an image file
    ///
    /// # Arguments
    /// * `input_path` - Source image
    /// * `output_path` - Where to save the sample
    /// * `size` - Sample size; the configured default when `None`
    /// * `placement` - Top-left position or random
    /// * `annotated_path` - When set, save the source with the sample framed;
    ///   with `sample.annotate` configured it defaults to `<output>_annotated`
    ///
    /// # Returns
    /// The region the sample was taken from
    pub fn sample_file(&self,
                       input_path: &str,
                       output_path: &str,
                       size: Option<Size>,
                       placement: Placement,
                       annotated_path: Option<&str>) -> CvKitResult<Region> {
        let mut image = Self::open(input_path)?;
        let options = SampleOptions::new(size.unwrap_or(self.config.sample_size), placement);

        // the config switch frames samples without naming a file
        let annotated_path = match annotated_path {
            Some(path) => Some(path.to_string()),
            None if self.config.annotate => {
                Some(suffixed_path(output_path, "annotated").to_string_lossy().to_string())
            }
            None => None,
        };

        let sample = match &annotated_path {
            Some(_) => ops::sample_annotated(&mut image, &options, self.config.annotation_colour)?,
            None => ops::sample(&image, &options)?,
        };

        Self::save(&sample.image, output_path)?;
        if let Some(path) = &annotated_path {
            Self::save(&image, path)?;
        }

        self.logger.log_region("sample", &sample.region)?;
        Ok(sample.region)
    }

    /// Take `count` random samples, saved as `output_N.ext`
    pub fn sample_batch(&self,
                        input_path: &str,
                        output_path: &str,
                        size: Option<Size>,
                        count: usize) -> CvKitResult<Vec<Region>> {
        if count == 0 {
            return Err(CvKitError::InvalidParameter("Sample count must be at least 1".to_string()));
        }

        let image = Self::open(input_path)?;
        let options = SampleOptions::new(size.unwrap_or(self.config.sample_size), Placement::Random);

        let progress = if count > 1 {
            ProgressTracker::new(count as u64, "Sampling")
        } else {
            ProgressTracker::hidden()
        };

        let mut regions = Vec::with_capacity(count);
        for index in 0..count {
            let sample = ops::sample(&image, &options)?;
            let path = numbered_path(output_path, index);
            Self::save(&sample.image, &path.to_string_lossy())?;
            self.logger.log_region("sample", &sample.region)?;
            regions.push(sample.region);
            progress.increment(1);
        }
        progress.finish();

        Ok(regions)
    }

    /// Crop an image file, shrinking the crop if it runs off the edge
    ///
    /// # Returns
    /// The cropped region and the shrink warning, if any
    pub fn crop_file(&self,
                     input_path: &str,
                     output_path: &str,
                     size: Size,
                     position: Option<Point>) -> CvKitResult<(Region, Option<RegionWarning>)> {
        let image = Self::open(input_path)?;
        let cropped = ops::crop(
            &image,
            size,
            position.unwrap_or_default(),
            self.config.warning_policy(),
        )?;

        Self::save(&cropped.image, output_path)?;
        self.logger.log_region("crop", &cropped.region)?;
        Ok((cropped.region, cropped.warning))
    }

    /// Zoom into an image file
    ///
    /// A rejected level saves the input unchanged and returns `None`.
    pub fn zoom_file(&self,
                     input_path: &str,
                     output_path: &str,
                     level: f64,
                     centre: ZoomCentre) -> CvKitResult<Option<ZoomWindow>> {
        let image = Self::open(input_path)?;
        let zoomed = ops::zoom(&image, level, centre, self.config.zoom_filter)?;

        Self::save(&zoomed.image, output_path)?;
        match (&zoomed.window, &zoomed.rejection) {
            (Some(window), _) => self.logger.log_region("zoom", &window.region)?,
            (None, Some(rejection)) => self.logger.log(&format!("zoom rejected: {}", rejection))?,
            (None, None) => {}
        }
        Ok(zoomed.window)
    }

    /// Overlay one image file on another
    pub fn overlay_file(&self,
                        input_path: &str,
                        overlay_path: &str,
                        output_path: &str,
                        position: Option<Point>,
                        blend: Blend) -> CvKitResult<OverlayReport> {
        let mut image = Self::open(input_path)?;
        let overlay_image = Self::open(overlay_path)?;

        let report = ops::overlay(
            &mut image,
            &overlay_image,
            position.unwrap_or_default(),
            blend,
            self.config.warning_policy(),
        )?;

        Self::save(&image, output_path)?;
        self.logger.log_region("overlay", &report.region)?;
        Ok(report)
    }
}
