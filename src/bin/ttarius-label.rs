//! Label tooling command-line front end

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{env, panic, process};
use ttarius_labels::api::{self, PrintOptions, SaveOptions};
use ttarius_labels::barcode::{self, LabelPreset};
use ttarius_labels::exit_codes::{
    EXIT_CONFIG_ERROR, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_INVALID_INPUT, EXIT_IO_ERROR,
    EXIT_PANIC, EXIT_RENDER_FALLBACK, EXIT_SUCCESS,
};
use ttarius_labels::label::parse_metadata;
use ttarius_labels::status::{self, EntityType, StatusResolution};
use ttarius_labels::utils::is_env_true;
use ttarius_labels::{LabelError, Settings};

const VERSION: &str = ttarius_labels::version::VERSION;

/// Treat placeholder/blank fallbacks as failures
const STRICT_ENV: &str = "TTARIUS_STRICT";

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Generate warehouse barcode labels")]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, json, json:<level>)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output directory (defaults to the configured one)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// File name without extension
    #[arg(short, long)]
    name: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render arbitrary text as a barcode
    Barcode {
        #[arg(short, long)]
        text: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render a PKG- package label
    Package {
        #[arg(short, long)]
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render a SHP- shipment label
    Shipment {
        #[arg(short, long)]
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render a WH- warehouse location label
    Warehouse {
        #[arg(short, long)]
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check whether text can be encoded exactly
    Validate {
        #[arg(short, long)]
        text: String,
    },
    /// Show the status taxonomy, or resolve one value
    Status {
        /// package or shipment
        #[arg(short, long)]
        entity: String,
        /// Value to resolve against the canonical and legacy tables
        #[arg(long)]
        value: Option<String>,
    },
    /// Write a printable HTML view of a label
    Print {
        #[arg(short, long)]
        text: String,
        #[arg(long)]
        title: Option<String>,
        /// Metadata rows as key=value
        #[arg(short, long = "meta")]
        meta: Vec<String>,
    },
}

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in ttarius-label");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("ttarius-label {}", ttarius_labels::version::full_version());
        return EXIT_SUCCESS;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                EXIT_INVALID_ARGS
            } else {
                EXIT_SUCCESS
            };
        }
    };

    let (level, source) = if let Some(ref level) = cli.log_level {
        ttarius_labels::logger::JsonLogger::init_with_level(level, "CLI --log-level")
    } else {
        ttarius_labels::logger::JsonLogger::init()
    };

    log::debug!("🚀 ttarius-label {} started (log level {} from {})", VERSION, level, source);

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG_ERROR;
        }
    };

    match cli.command {
        Command::Barcode { text, output } => save(&settings, &text, None, output),
        Command::Package { id, output } => save(&settings, &id, Some(LabelPreset::Package), output),
        Command::Shipment { id, output } => {
            save(&settings, &id, Some(LabelPreset::Shipment), output)
        }
        Command::Warehouse { id, output } => {
            save(&settings, &id, Some(LabelPreset::Warehouse), output)
        }
        Command::Validate { text } => validate(&text),
        Command::Status { entity, value } => show_status(&entity, value.as_deref()),
        Command::Print { text, title, meta } => {
            let options = PrintOptions {
                preset: None,
                title,
                metadata: parse_metadata(&meta),
            };
            match api::print_label(&settings, &text, options) {
                Ok(path) => {
                    println!("{}", path.display());
                    EXIT_SUCCESS
                }
                Err(e) => error_exit(&e),
            }
        }
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = Settings::load(path).with_context(|| match path {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to apply settings overrides".to_string(),
    })?;
    log::debug!(
        "⚙️ Settings ready: business_name={:?} output_dir={}",
        settings.business_name,
        settings.output_dir.display()
    );
    Ok(settings)
}

fn save(settings: &Settings, text: &str, preset: Option<LabelPreset>, output: OutputArgs) -> i32 {
    let options = SaveOptions {
        preset,
        file_name: output.name,
        output_dir: output.out,
    };

    match api::save_label(settings, text, options) {
        Ok(saved) => {
            let summary = serde_json::json!({
                "path": saved.path.display().to_string(),
                "kind": saved.artifact.kind.to_string(),
                "caption": saved.artifact.caption,
                "width": saved.artifact.width,
                "height": saved.artifact.height,
                "lossy": saved.artifact.lossy,
                "pattern": saved.artifact.pattern,
            });
            println!("{}", summary);

            if saved.artifact.lossy {
                eprintln!("Warning: unsupported characters were dropped from {:?}", text);
            }
            if saved.artifact.is_fallback() && is_env_true(STRICT_ENV) {
                eprintln!("Error: rendered a {} image instead of a barcode", saved.artifact.kind);
                return EXIT_RENDER_FALLBACK;
            }
            EXIT_SUCCESS
        }
        Err(e) => error_exit(&e),
    }
}

fn validate(text: &str) -> i32 {
    if barcode::validate_barcode_text(text) {
        println!("valid");
        EXIT_SUCCESS
    } else {
        println!("invalid");
        EXIT_INVALID_INPUT
    }
}

fn show_status(entity: &str, value: Option<&str>) -> i32 {
    let Some(entity) = EntityType::parse(entity) else {
        eprintln!("Unknown entity type: {} (expected package or shipment)", entity);
        return EXIT_INVALID_ARGS;
    };

    let Some(value) = value else {
        return match serde_json::to_string_pretty(&api::status_report(entity)) {
            Ok(json) => {
                println!("{}", json);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        };
    };

    match status::resolve_status(value, entity) {
        StatusResolution::Canonical(config) => {
            println!("{} ({})", config.value, config.label);
            EXIT_SUCCESS
        }
        StatusResolution::Migrated { from, to } => {
            println!("{} -> {} ({})", from, to.value, to.label);
            EXIT_SUCCESS
        }
        StatusResolution::Unknown(raw) => {
            println!(
                "unknown: {} (displayed as {})",
                raw,
                status::convert_legacy_status(&raw, entity)
            );
            EXIT_INVALID_INPUT
        }
    }
}

fn error_exit(e: &LabelError) -> i32 {
    eprintln!("Error: {}", e);
    match e {
        LabelError::IoError(_) => EXIT_IO_ERROR,
        LabelError::InvalidConfig(_) | LabelError::JsonError(_) => EXIT_CONFIG_ERROR,
        _ => EXIT_ERROR,
    }
}
