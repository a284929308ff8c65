//! Interactive session.
//!
//! Collects the run parameters through a short prompt sequence, recaps the
//! chosen plan, and prints the final summary. Styling happens right at the
//! print site.

use crate::batch::{resolve_output_dir, BatchReport};
use crate::constants::{TargetFormat, DEFAULT_QUALITY, NO_DIMENSIONS, QUALITY_CHOICES};
use crate::convert::{parse_dimensions, ConversionOptions};
use crate::error::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;

/// Everything one run needs, as answered by the user.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub options: ConversionOptions,
}

/// Walks the user through the conversion questions.
///
/// Quality and dimensions are only asked for when resizing was requested;
/// otherwise the defaults apply and the converter performs a plain
/// transcode.
pub fn collect_plan() -> Result<SessionPlan> {
    let theme = ColorfulTheme::default();

    let input_raw: String = Input::with_theme(&theme)
        .with_prompt("Directory with the images to convert")
        .default(".".to_string())
        .interact_text()?;
    let input_dir = PathBuf::from(input_raw.trim());

    let output_raw: String = Input::with_theme(&theme)
        .with_prompt("Directory for the converted images (empty keeps them next to the sources)")
        .allow_empty(true)
        .interact_text()?;
    let output_dir = resolve_output_dir(&input_dir, &output_raw);

    let format_idx = Select::with_theme(&theme)
        .with_prompt("Convert to which format?")
        .items(&TargetFormat::ALL)
        .default(0)
        .interact()?;
    let format = TargetFormat::ALL[format_idx];

    let resize = Confirm::with_theme(&theme)
        .with_prompt("Resize or compress the images?")
        .default(false)
        .interact()?;

    let (quality, dimensions) = if resize {
        let quality_idx = Select::with_theme(&theme)
            .with_prompt("Image quality")
            .items(QUALITY_CHOICES)
            .default(0)
            .interact()?;
        let quality = parse_quality_choice(QUALITY_CHOICES[quality_idx]);

        let dimensions_raw: String = Input::with_theme(&theme)
            .with_prompt("Fit images within WIDTHxHEIGHT (`none` keeps each size)")
            .default(NO_DIMENSIONS.to_string())
            .interact_text()?;
        (quality, parse_dimensions(&dimensions_raw)?)
    } else {
        (DEFAULT_QUALITY, None)
    };

    let options = ConversionOptions::new(format, resize, quality, dimensions)?;

    Ok(SessionPlan {
        input_dir,
        output_dir,
        options,
    })
}

/// Turns a `QUALITY_CHOICES` entry such as `"85%"` into its numeric value.
pub fn parse_quality_choice(choice: &str) -> u8 {
    choice
        .trim_end_matches('%')
        .parse()
        .unwrap_or(DEFAULT_QUALITY)
}

/// Recaps the chosen plan before the batch starts.
pub fn print_plan(plan: &SessionPlan) {
    println!();
    println!(
        "🚀 Converting images in {}",
        style(plan.input_dir.display()).cyan()
    );
    println!("📁 Output: {}", style(plan.output_dir.display()).cyan());
    println!("🎨 Target format: {}", style(plan.options.format).green());
    if plan.options.resize {
        println!("🗜️  Quality: {}%", style(plan.options.quality).green());
        match plan.options.dimensions {
            Some((width, height)) => println!("📐 Fit within: {}x{}", width, height),
            None => println!("📐 Fit within: original size"),
        }
    }
}

/// Prints the end-of-run summary with the true success count.
pub fn print_summary(report: &BatchReport) {
    println!();
    println!("📊 Conversion summary:");
    println!(
        "  ✅ Converted: {} of {}",
        style(report.succeeded()).green(),
        report.outcomes.len()
    );
    if report.failed() > 0 {
        println!("  ❌ Failed: {}", style(report.failed()).red());
        for outcome in &report.outcomes {
            if let Err(e) = &outcome.result {
                println!("     {}: {}", style(&outcome.name).red(), e);
            }
        }
    }
    println!("  ⏱️  Total time: {:?}", report.elapsed);
}
