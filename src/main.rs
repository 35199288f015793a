use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_customizer::domain::priority::{METAFIELD_KEY, METAFIELD_NAMESPACE};
use payment_customizer::interfaces::csv::priority_reader::PriorityReader;
use payment_customizer::interfaces::json::result_writer::ResultWriter;
use payment_customizer::interfaces::json::run_input_reader::RunInputReader;
use payment_customizer::logging::init_logging;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve payment method operations for a function input document
    Run {
        /// Input JSON file. Reads stdin when omitted.
        input: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
    /// Build the shop metafield value from a `name,priority` CSV file
    Encode {
        /// Priority list CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Run { input, pretty } => {
            let run_input = match input {
                Some(path) => {
                    let file = File::open(path).into_diagnostic()?;
                    RunInputReader::new(file).read().into_diagnostic()?
                }
                None => RunInputReader::new(io::stdin().lock())
                    .read()
                    .into_diagnostic()?,
            };

            let result = payment_customizer::run(&run_input);

            let stdout = io::stdout();
            let mut writer = ResultWriter::new(stdout.lock()).pretty(pretty);
            writer.write_result(&result).into_diagnostic()?;
        }
        Command::Encode { input } => {
            let file = File::open(input).into_diagnostic()?;
            let list = PriorityReader::new(file)
                .into_priority_list()
                .into_diagnostic()?;
            list.validate().into_diagnostic()?;

            info!(
                namespace = METAFIELD_NAMESPACE,
                key = METAFIELD_KEY,
                entries = list.entries().len(),
                "Encoded priority list"
            );

            let value = list.to_metafield_value().into_diagnostic()?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", value).into_diagnostic()?;
        }
    }

    Ok(())
}
