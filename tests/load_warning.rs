//! Runs in its own test binary because it installs the global logger.

use std::sync::Mutex;

use image::{GrayImage, Luma, Rgb, RgbImage};
use log::{Level, LevelFilter, Log, Metadata, Record};
use rusty_grid::{ImageEditor, Pixel};

struct CaptureLogger {
    warnings: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            if let Ok(mut warnings) = self.warnings.lock() {
                warnings.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    warnings: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
    std::mem::take(&mut *LOGGER.warnings.lock().expect("logger lock"))
}

#[test]
fn test_non_rgb_source_warns_on_load() {
    log::set_logger(&LOGGER).expect("first logger in this binary");
    log::set_max_level(LevelFilter::Warn);
    let dir = tempfile::tempdir().expect("tempdir");

    let rgb_path = dir.path().join("rgb.png");
    RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]))
        .save(&rgb_path)
        .expect("write fixture");
    ImageEditor::open(&rgb_path).expect("load rgb");
    assert!(take_warnings().is_empty());

    let gray_path = dir.path().join("gray.png");
    GrayImage::from_pixel(2, 2, Luma([40]))
        .save(&gray_path)
        .expect("write fixture");
    let editor = ImageEditor::open(&gray_path).expect("load gray");
    assert_eq!(editor.grid().pixel(1, 1), Pixel::new(40, 40, 40));

    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("gray.png"), "{}", warnings[0]);
    assert!(warnings[0].contains("L8"), "{}", warnings[0]);
}
