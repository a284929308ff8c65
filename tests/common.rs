use image::{ImageFormat, Rgb, RgbImage};
use img_convert::constants::{TargetFormat, DEFAULT_QUALITY};
use img_convert::convert::ConversionOptions;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a small gradient image so the encoders have real pixels to chew on.
pub fn write_image(
    dir: &Path,
    name: &str,
    format: ImageFormat,
    width: u32,
    height: u32,
) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save_with_format(&path, format).unwrap();
    path
}

pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    write_image(dir, name, ImageFormat::Png, 4, 4)
}

pub fn write_jpg(dir: &Path, name: &str) -> PathBuf {
    write_image(dir, name, ImageFormat::Jpeg, 4, 4)
}

/// A file that passes the name classifier but cannot be decoded.
pub fn write_corrupt_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"not an image at all")
        .unwrap();
    path
}

/// Options for a plain transcode into `format`, no resizing.
pub fn transcode_options(format: TargetFormat) -> ConversionOptions {
    ConversionOptions::new(format, false, DEFAULT_QUALITY, None).unwrap()
}
