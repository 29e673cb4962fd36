//! Integration tests for the CvKit facade

extern crate std;

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, GrayImage, Luma, RgbImage, Rgb};

use cvkit::{Blend, Config, CvKit, Placement, Point, Region, RegionWarning, Size, ZoomCentre};

/// Path under the system temp dir, unique per test name
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cvkit_it_{}_{}", std::process::id(), name))
}

fn write_gradient(name: &str, width: u32, height: u32) -> String {
    let path = temp_path(name);
    let img = GrayImage::from_fn(width, height, |x, y| Luma([((x * 2 + y) % 256) as u8]));
    img.save(&path).unwrap();
    path.to_string_lossy().to_string()
}

fn path_str(name: &str) -> String {
    temp_path(name).to_string_lossy().to_string()
}

fn remove_files<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        let _ = std::fs::remove_file(path.as_ref());
    }
}

#[test]
fn test_sample_at_position_is_clamped() {
    let input = write_gradient("sample_in.png", 100, 100);
    let output = path_str("sample_out.png");
    let kit = CvKit::new(None).unwrap();

    let region = kit.sample_file(
        &input,
        &output,
        Some(Size::new(20, 20)),
        Placement::At(Point::new(95, 0)),
        None,
    ).unwrap();

    std::assert_eq!(region, Region::new(80, 0, 20, 20));
    let sample = image::open(&output).unwrap();
    let source = image::open(&input).unwrap();
    std::assert_eq!(sample.dimensions(), (20, 20));
    std::assert_eq!(sample.get_pixel(0, 0), source.get_pixel(80, 0));
    remove_files(&[&input, &output]);
}

#[test]
fn test_random_sample_with_annotation() {
    let input = write_gradient("annot_in.png", 64, 48);
    let output = path_str("annot_out.png");
    let annotated = path_str("annot_frame.png");
    let kit = CvKit::new(None).unwrap();

    let region = kit.sample_file(&input, &output, None, Placement::Random, Some(annotated.as_str())).unwrap();

    std::assert_eq!((region.width, region.height), (16, 16));
    std::assert!(region.end_x() <= 64 && region.end_y() <= 48);

    let framed = image::open(&annotated).unwrap().to_luma8();
    if region.x > 0 && region.y > 0 {
        std::assert_eq!(framed.get_pixel(region.x - 1, region.y - 1)[0], 255);
    }
    if region.end_x() < 64 && region.end_y() < 48 {
        std::assert_eq!(framed.get_pixel(region.end_x(), region.end_y())[0], 255);
    }
    remove_files(&[&input, &output, &annotated]);
}

#[test]
fn test_sample_batch_writes_numbered_files() {
    let input = write_gradient("batch_in.png", 50, 50);
    let output = path_str("batch_out.png");
    let kit = CvKit::new(None).unwrap();

    let regions = kit.sample_batch(&input, &output, Some(Size::new(8, 8)), 3).unwrap();

    std::assert_eq!(regions.len(), 3);
    for index in 0..3 {
        let path = path_str(&format!("batch_out_{}.png", index));
        std::assert_eq!(image::open(&path).unwrap().dimensions(), (8, 8));
    }
    std::assert!(kit.sample_batch(&input, &output, None, 0).is_err());
    remove_files(&[&input]);
    for index in 0..3 {
        remove_files(&[&path_str(&format!("batch_out_{}.png", index))]);
    }
}

#[test]
fn test_crop_shrinks_off_edge() {
    let input = write_gradient("crop_in.png", 100, 100);
    let output = path_str("crop_out.png");
    let config = Config::default().merged_with_str("[warnings]\nsuppress = true\n").unwrap();
    let kit = CvKit::new(None).unwrap().with_config(config);

    let (region, warning) = kit.crop_file(&input, &output, Size::new(50, 50), Some(Point::new(90, 90))).unwrap();

    std::assert_eq!(region, Region::new(90, 90, 10, 10));
    std::assert_eq!(
        warning,
        Some(RegionWarning::CropShrunk { requested: Size::new(50, 50), adjusted: Size::new(10, 10) })
    );
    std::assert_eq!(image::open(&output).unwrap().dimensions(), (10, 10));
    remove_files(&[&input, &output]);
}

#[test]
fn test_zoom_and_rejection() {
    let input = write_gradient("zoom_in.png", 100, 100);
    let output = path_str("zoom_out.png");
    let kit = CvKit::new(None).unwrap();

    let window = kit.zoom_file(&input, &output, 2.0, ZoomCentre::At(Point::new(0, 0))).unwrap().unwrap();
    std::assert_eq!(window.centre, (25, 25));
    std::assert_eq!(window.region, Region::new(0, 0, 50, 50));
    std::assert_eq!(image::open(&output).unwrap().dimensions(), (100, 100));

    let rejected_out = path_str("zoom_rejected.png");
    std::assert!(kit.zoom_file(&input, &rejected_out, 0.5, ZoomCentre::Middle).unwrap().is_none());
    std::assert_eq!(
        image::open(&rejected_out).unwrap().to_luma8(),
        image::open(&input).unwrap().to_luma8()
    );
    remove_files(&[&input, &output, &rejected_out]);
}

#[test]
fn test_overlay_cropped_to_fit() {
    let input = path_str("overlay_base.png");
    RgbImage::new(20, 20).save(&input).unwrap();
    let overlay_path = path_str("overlay_top.png");
    RgbImage::from_pixel(10, 10, Rgb([0, 200, 0])).save(&overlay_path).unwrap();
    let output = path_str("overlay_out.png");

    let config = Config::default().merged_with_str("[warnings]\nsuppress = true\n").unwrap();
    let kit = CvKit::new(None).unwrap().with_config(config);
    let report = kit.overlay_file(&input, &overlay_path, &output, Some(Point::new(15, 5)), Blend::Ratio(1.0)).unwrap();

    std::assert_eq!(report.region, Region::new(15, 5, 5, 10));
    std::assert!(report.warning.is_some());

    let result = image::open(&output).unwrap().to_rgb8();
    std::assert_eq!(result.get_pixel(19, 14), &Rgb([0, 200, 0]));
    std::assert_eq!(result.get_pixel(14, 5), &Rgb([0, 0, 0]));
    remove_files(&[&input, &overlay_path, &output]);
}

#[test]
fn test_describe_reports_dimensions() {
    let input = path_str("describe.png");
    DynamicImage::ImageRgb8(RgbImage::new(7, 3)).save(&input).unwrap();
    let kit = CvKit::new(None).unwrap();

    let text = kit.describe(&input).unwrap();
    std::assert!(text.contains("Dimensions: 7x3"));
    std::assert!(text.contains("Channels: 3"));
    remove_files(&[&input]);
}

#[test]
fn test_record_file_lists_regions() {
    let input = write_gradient("record_in.png", 30, 30);
    let output = path_str("record_out.png");
    let record = path_str("record.log");
    let kit = CvKit::new(Some(record.as_str())).unwrap();

    kit.crop_file(&input, &output, Size::new(10, 10), None).unwrap();

    let contents = std::fs::read_to_string(&record).unwrap();
    std::assert!(contents.contains("crop: x=0, y=0, width=10, height=10"));
    remove_files(&[&input, &output, &record]);
}
