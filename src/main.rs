use anyhow::Result;
use clap::{CommandFactory, Parser};
use kikitori::app::{RunOptions, run_transcription};
use kikitori::cli::{Cli, Commands};
use kikitori::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            file,
            output,
            base64,
            base64_output,
            model,
            language,
            correction_model,
            no_correction,
            max_segment_size,
            min_silence,
            silence_threshold,
            chunk_size,
            concurrency,
            skip_threshold,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let options = RunOptions {
                output,
                base64,
                base64_output,
                model,
                language,
                correction_model,
                no_correction,
                max_segment_size,
                min_silence_ms: min_silence,
                silence_threshold_db: silence_threshold,
                chunk_size,
                concurrency,
                skip_threshold,
            };
            run_transcription(config, &file, options, cli.quiet).await?;
        }
        Commands::Config => {
            let config = load_config(cli.config.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "kikitori",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Initialize the log facade, raising the filter with each `-v`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/kikitori/config.toml)
/// 3. Built-in defaults
///
/// Environment variable overrides apply on top in every case.
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())
    };

    Ok(config.with_env_overrides())
}
