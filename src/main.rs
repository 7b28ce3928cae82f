use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tally_daybook::core::DaybookConfigBuilder;
use tally_daybook::report;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "tally-daybook",
    version,
    about = "Convert a Tally XML voucher export into a receipt daybook spreadsheet"
)]
struct Cli {
    /// Tally XML export to read
    #[arg(short = 'i', long = "input", default_value = "xml/input.xml")]
    input: PathBuf,

    /// Daybook file to write (.xlsx or .csv)
    #[arg(short = 'o', long = "output", default_value = "tally_receipt_daybook.xlsx")]
    output: PathBuf,

    /// Voucher type to export (case-insensitive)
    #[arg(long = "voucher-type", default_value = "receipt")]
    voucher_type: String,

    /// Worksheet name for .xlsx output
    #[arg(long = "sheet-name", default_value = "Sheet1")]
    sheet_name: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_daybook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = DaybookConfigBuilder::new()
        .voucher_type(cli.voucher_type)
        .sheet_name(cli.sheet_name)
        .build()
        .and_then(|config| report::convert_file(&cli.input, &cli.output, &config));

    match result {
        Ok(summary) => {
            println!(
                "{} file '{}' has been created successfully.",
                summary.format.label(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
