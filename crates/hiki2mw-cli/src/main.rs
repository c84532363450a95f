mod cli;
mod report;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use hiki2mw_config::{Config, ReportFormat};
use hiki2mw_engine::{ConvertOptions, Converter, LinkAnalyzer, Mode, io};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());
    log::debug!("Config path: {}", config_path.display());

    match cli.command {
        Commands::InitConfig { force } => init_config(&config_path, force),
        Commands::Convert {
            input,
            output,
            table_class,
        } => {
            let config = load_config(&config_path)?;
            let table_class = table_class.unwrap_or(config.convert.table_class);
            convert(input.as_deref(), output.as_deref(), table_class)
        }
        Commands::Analyze {
            input,
            output,
            mode,
            format,
        } => {
            let config = load_config(&config_path)?;
            let mode = match mode {
                Some(mode) => mode,
                None => config.analyze.mode.parse::<Mode>().with_context(|| {
                    format!("Invalid analyze.mode in {}", config_path.display())
                })?,
            };
            let format = format.map(ReportFormat::from).unwrap_or(config.analyze.format);
            analyze(input.as_deref(), output.as_deref(), mode, format)
        }
    }
}

fn resolve_config_path(overridden: Option<&Path>) -> PathBuf {
    match overridden {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    }
}

fn load_config(config_path: &Path) -> Result<Config> {
    match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => {
            log::debug!("No config file at {}; using defaults", config_path.display());
            Ok(Config::default())
        }
    }
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default()
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write config file {}", config_path.display()))?;
    println!("Wrote {}", config_path.display());
    Ok(())
}

fn convert(input: Option<&Path>, output: Option<&Path>, table_class: String) -> Result<()> {
    let source = read_input(input)?;

    let converter = Converter::new(ConvertOptions { table_class });
    let mut converted = converter.convert(&source);
    converted.push('\n');

    write_output(output, &converted)
}

fn analyze(
    input: Option<&Path>,
    output: Option<&Path>,
    mode: Mode,
    format: ReportFormat,
) -> Result<()> {
    let source = read_input(input)?;

    let report = LinkAnalyzer::new(mode).analyze(&source);
    let rendered = match format {
        ReportFormat::Text => report::render_text(&report),
        ReportFormat::Json => report::render_json(&report)?,
    };

    write_output(output, &rendered)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    io::read_document(input).with_context(|| match input {
        Some(path) => format!("Failed to read {}", path.display()),
        None => "Failed to read standard input".to_string(),
    })
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    io::write_document(output, content).with_context(|| match output {
        Some(path) => format!("Failed to write {}", path.display()),
        None => "Failed to write standard output".to_string(),
    })
}
