pub mod batch;
pub mod constants;
pub mod convert;
pub mod error;
pub mod prompt;
pub mod scan;

pub use batch::{
    already_in_format, convert_all, derive_output_name, ensure_output_dir, resolve_output_dir,
    BatchReport, FileOutcome,
};
pub use constants::TargetFormat;
pub use convert::{convert_file, fit_within, parse_dimensions, ConversionOptions};
pub use error::{ConvertError, Result};
pub use prompt::{collect_plan, parse_quality_choice, print_plan, print_summary, SessionPlan};
pub use scan::{is_supported_image, list_images, ImageRecord};
