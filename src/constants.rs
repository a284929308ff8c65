use image::ImageFormat;
use std::fmt;

pub const DEFAULT_QUALITY: u8 = 100;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Quality percentages offered by the interactive session, highest first.
pub const QUALITY_CHOICES: &[&str] = &["100%", "90%", "85%", "80%", "75%", "70%", "65%"];

/// Sentinel accepted in place of a WIDTHxHEIGHT bounding box.
pub const NO_DIMENSIONS: &str = "none";

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const AVIF_ENCODER_SPEED: u8 = 4;

/// Extensions the classifier accepts. Membership is case-sensitive.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["webp", "png", "jpeg", "jpg", "avif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Webp,
    Avif,
    Png,
    Jpg,
    Jpeg,
}

impl TargetFormat {
    /// All formats, in the order the session offers them.
    pub const ALL: [TargetFormat; 5] = [
        TargetFormat::Webp,
        TargetFormat::Avif,
        TargetFormat::Png,
        TargetFormat::Jpg,
        TargetFormat::Jpeg,
    ];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "webp" => Some(TargetFormat::Webp),
            "avif" => Some(TargetFormat::Avif),
            "png" => Some(TargetFormat::Png),
            "jpg" => Some(TargetFormat::Jpg),
            "jpeg" => Some(TargetFormat::Jpeg),
            _ => None,
        }
    }

    /// File extension written for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Webp => "webp",
            TargetFormat::Avif => "avif",
            TargetFormat::Png => "png",
            TargetFormat::Jpg => "jpg",
            TargetFormat::Jpeg => "jpeg",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            TargetFormat::Webp => ImageFormat::WebP,
            TargetFormat::Avif => ImageFormat::Avif,
            TargetFormat::Png => ImageFormat::Png,
            TargetFormat::Jpg | TargetFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
