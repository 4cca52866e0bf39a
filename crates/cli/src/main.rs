use clap::Parser;
use partjoin_core::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE};
use partjoin_core::{join, JoinConfig, JoinError, JoinProgress, PartFile};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const BANNER: &str = "==========";

#[derive(Parser)]
#[command(name = "partjoin")]
#[command(about = "Join split part files back into a single file")]
struct Cli {
    /// Directory containing the part files
    #[arg(long, env = "PARTJOIN_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,
    /// Path of the joined output file
    #[arg(short, long, env = "PARTJOIN_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
    /// Glob pattern selecting the parts (defaults to "<output file name>.part*")
    #[arg(short, long, env = "PARTJOIN_PATTERN")]
    pattern: Option<String>,
    /// Exit with a non-zero status when no parts are found or the join fails
    #[arg(
        long,
        env = "PARTJOIN_STRICT",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    strict: bool,
}

/// Prints each join step to stdout
struct ConsoleProgress;

impl JoinProgress for ConsoleProgress {
    fn parts_found(&mut self, parts: &[PartFile]) {
        println!("Found the following parts to join:");
        for part in parts {
            println!("  - {}", part.name());
        }
    }

    fn appending(&mut self, part: &PartFile) {
        println!("Appending {}...", part.name());
    }
}

/// Entry point for the `partjoin` command
///
/// Settings come from flags, then `PARTJOIN_*` environment variables (a `.env` file in the
/// working directory is loaded first), then built-in defaults.
///
/// # Returns
/// * `Ok(ExitCode::SUCCESS)` - join finished, or failed without `--strict`
/// * `Ok(ExitCode::FAILURE)` - join found no parts or failed, with `--strict`
/// * `Err(anyhow::Error)` - the settings do not form a valid configuration
fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = JoinConfig::new(cli.input_dir, cli.output, cli.pattern)?;

    println!("\n{} STARTING FILE MERGE {}", BANNER, BANNER);
    let outcome = run(&config);
    println!("\n{} END FILE MERGE {}", BANNER, BANNER);

    match outcome {
        Err(_) if cli.strict => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn run(config: &JoinConfig) -> Result<(), JoinError> {
    match join(config, &mut ConsoleProgress) {
        Ok(report) => {
            println!(
                "\nFile joining completed successfully. Output: {}",
                report.output_path().display()
            );
            Ok(())
        }
        Err(e) if e.is_no_parts() => {
            println!("Error: {}", e);
            Err(e)
        }
        Err(e) => {
            tracing::error!("join failed: {:?}", e);
            println!("An error occurred: {}", e);
            Err(e)
        }
    }
}
