//! Shared argument parsing for commands

use clap::ArgMatches;

use crate::errors::{CvKitError, CvKitResult};
use crate::region::{Point, Size};

/// Required positional input path
pub fn input_file(args: &ArgMatches) -> CvKitResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| CvKitError::GenericError("Missing input file".to_string()))
}

/// Required output path, with the operation named in the error
pub fn output_file(args: &ArgMatches, operation: &str) -> CvKitResult<String> {
    args.get_one::<String>("output")
        .cloned()
        .ok_or_else(|| CvKitError::GenericError(format!("Missing output file path for {}", operation)))
}

/// Optional "w,h" size
pub fn size(args: &ArgMatches) -> CvKitResult<Option<Size>> {
    args.get_one::<String>("size").map(|s| Size::parse(s)).transpose()
}

/// Optional "x,y" point under `name`
pub fn point(args: &ArgMatches, name: &str) -> CvKitResult<Option<Point>> {
    args.get_one::<String>(name).map(|s| Point::parse(s)).transpose()
}

/// Optional number under `name`
pub fn number<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> CvKitResult<Option<T>> {
    args.get_one::<String>(name)
        .map(|s| {
            s.trim().parse::<T>().map_err(|_| {
                CvKitError::InvalidParameter(format!("Invalid value '{}' for --{}", s, name))
            })
        })
        .transpose()
}
