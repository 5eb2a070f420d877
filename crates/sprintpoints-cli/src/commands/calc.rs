//! One-shot sprint calculation.

use clap::Args;
use sprintpoints_core::{split_edit, Config, OutputFormat, SprintForm, SprintReport};

#[derive(Args)]
pub struct CalcArgs {
    /// Business days in the sprint (anything below 1 counts as 1)
    #[arg(long, allow_hyphen_values = true)]
    business_days: Option<String>,
    /// Holiday days applied to every platform
    #[arg(long, allow_hyphen_values = true)]
    holidays: Option<String>,
    /// Change an input, e.g. web.engineers=7 or ios.leave_days=4 (repeatable)
    #[arg(long = "set", value_name = "PATH=VALUE", allow_hyphen_values = true)]
    edits: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut form = SprintForm::from_config(&config)?;

    if let Some(raw) = &args.business_days {
        form.set_business_days(raw);
    }
    if let Some(raw) = &args.holidays {
        form.set_holiday_days(raw);
    }
    for edit in &args.edits {
        let (path, raw) = split_edit(edit)?;
        form.apply_edit(path, raw)?;
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let report = SprintReport::new(&form, &config.platforms);
    println!(
        "{}",
        super::render(&report, format, config.output.show_capacity)?
    );
    Ok(())
}
