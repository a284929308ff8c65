//! Single-file image conversion.
//!
//! One call converts one source file into the target format. Resizing and
//! quality-aware encoding are opt-in; without them the conversion is a plain
//! transcode through each format's default encoder settings.

use crate::constants::{
    TargetFormat, AVIF_ENCODER_SPEED, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, MAX_QUALITY,
    MIN_QUALITY, NO_DIMENSIONS, ZOPFLI_ITERATIONS,
};
use crate::error::{ConvertError, Result};
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs::{self, File};
use std::io::BufWriter;
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};

/// What the batch should do to every image.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub format: TargetFormat,
    pub resize: bool,
    pub quality: u8,
    pub dimensions: Option<(u32, u32)>,
}

impl ConversionOptions {
    pub fn new(
        format: TargetFormat,
        resize: bool,
        quality: u8,
        dimensions: Option<(u32, u32)>,
    ) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(ConvertError::InvalidQuality(quality));
        }

        Ok(Self {
            format,
            resize,
            quality,
            dimensions,
        })
    }
}

/// Parses a `WIDTHxHEIGHT` bound such as `1280x720`.
///
/// The literal `none` means no resampling. Zero on either side is rejected,
/// as is anything that does not parse as two integers around an `x`.
pub fn parse_dimensions(input: &str) -> Result<Option<(u32, u32)>> {
    let trimmed = input.trim();
    if trimmed == NO_DIMENSIONS {
        return Ok(None);
    }

    let invalid = || ConvertError::InvalidDimensions(input.to_string());
    let (width, height) = trimmed.split_once('x').ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok(Some((width, height)))
}

/// Scales `img` to fit inside `width` x `height`, keeping the aspect ratio.
pub fn fit_within(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    img.resize(width, height, FilterType::Lanczos3)
}

/// Converts a single image file.
///
/// # Arguments
/// * `input` - Path to the source image
/// * `output` - Path the converted image is written to
/// * `options` - Target format plus the resize and quality settings
///
/// # Returns
/// * `Ok(())` when the output file has been written
/// * `Err(ConvertError)` if decoding, resampling, or encoding fails
///
/// With `resize` disabled the image is decoded and re-encoded as-is. With it
/// enabled the image is first fitted inside the requested bounds (when any
/// were given) and the quality setting is handed to the encoder.
pub fn convert_file(input: &Path, output: &Path, options: &ConversionOptions) -> Result<()> {
    // Guess the format from the content, not the name; sources like
    // `photo.png.bak` decode fine.
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;

    if !options.resize {
        img.save_with_format(output, options.format.image_format())?;
        return Ok(());
    }

    let img = match options.dimensions {
        Some((width, height)) => fit_within(&img, width, height),
        None => img,
    };
    save_with_quality(&img, output, options)
}

fn save_with_quality(img: &DynamicImage, output: &Path, options: &ConversionOptions) -> Result<()> {
    match options.format {
        TargetFormat::Png => save_optimized_png(img, output, options.quality),
        TargetFormat::Jpg | TargetFormat::Jpeg => {
            let file = File::create(output)?;
            let writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(writer, options.quality);
            img.write_with_encoder(encoder)?;
            Ok(())
        }
        TargetFormat::Avif => {
            let file = File::create(output)?;
            let writer = BufWriter::new(file);
            let encoder =
                AvifEncoder::new_with_speed_quality(writer, AVIF_ENCODER_SPEED, options.quality);
            img.write_with_encoder(encoder)?;
            Ok(())
        }
        TargetFormat::Webp => {
            // The bundled webp encoder is lossless; quality has no effect.
            img.save_with_format(output, options.format.image_format())?;
            Ok(())
        }
    }
}

fn save_optimized_png(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    // Encode to a temp file first and let oxipng write the final output.
    let temp_path = output.with_extension("temp.png");
    img.save_with_format(&temp_path, image::ImageFormat::Png)?;

    // Ensure cleanup on any error using RAII pattern
    struct TempFileGuard(PathBuf);
    impl Drop for TempFileGuard {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }
    let _guard = TempFileGuard(temp_path.clone());

    let mut oxipng_options = Options::from_preset(4);
    oxipng_options.force = true;

    if quality >= 90 {
        oxipng_options.deflate = Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        };
    } else if quality >= 70 {
        oxipng_options.deflate = Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        };
    } else {
        oxipng_options.deflate = Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        };
    }

    let input = InFile::Path(temp_path.clone());
    let out = OutFile::Path {
        path: Some(output.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &out, &oxipng_options)
        .map_err(|e| ConvertError::PngOptimization(e.to_string()))?;

    Ok(())
}
