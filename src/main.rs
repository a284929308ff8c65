use console::style;
use img_convert::batch::convert_all;
use img_convert::error::{ConvertError, Result};
use img_convert::prompt::{collect_plan, print_plan, print_summary};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(ConvertError::Prompt(_)) => {
            println!("{}", style("Conversion cancelled.").red().bold());
            ExitCode::FAILURE
        }
        Err(e) => {
            // Fatal errors go to stdout, not stderr.
            println!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let plan = collect_plan()?;
    print_plan(&plan);

    let report = convert_all(&plan.input_dir, &plan.output_dir, &plan.options)?;
    if !report.is_empty() {
        print_summary(&report);
    }

    Ok(())
}
