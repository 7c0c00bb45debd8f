//! opendap-ascii - Inspect OPeNDAP/DODS ASCII grid responses.

use anyhow::{Context, Result};
use clap::Parser;
use opendap_ascii::summary::{format_document, format_values};
use opendap_ascii::{DecodeOptions, Document};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "opendap-ascii")]
#[command(about = "Decode and summarize an OPeNDAP ASCII grid response", long_about = None)]
struct Args {
    /// Path to the ASCII response (reads stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// Only show these variables
    #[arg(long = "variable", value_name = "NAME")]
    variables: Vec<String>,

    /// Print the decoded values of each shown variable
    #[arg(long)]
    values: bool,

    /// Server fill value to treat as missing (GFS uses 9.999e20)
    #[arg(long)]
    fill_value: Option<f64>,

    /// Maximum number of cells a single variable may declare
    #[arg(long)]
    max_cells: Option<usize>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        // RUST_LOG overrides the --verbose default
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting opendap-ascii");
    }

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut options = DecodeOptions::default();
    if let Some(fill) = args.fill_value {
        options = options.with_fill_value(fill);
    }
    if let Some(max_cells) = args.max_cells {
        options = options.with_max_cells(max_cells);
    }

    let (text, source_name) = read_input(args.file.as_ref())?;
    let document = Document::parse_with(&text, &options)
        .with_context(|| format!("Failed to decode {}", source_name))?;
    tracing::info!(variables = document.len(), source = %source_name, "decoded document");

    let shown = if args.variables.is_empty() {
        document.iter().collect::<Vec<_>>()
    } else {
        args.variables
            .iter()
            .map(|name| document.variable(name))
            .collect::<opendap_ascii::Result<Vec<_>>>()?
    };

    print!("{}", format_document(shown.iter().copied(), Some(&source_name)));
    if args.values {
        for var in &shown {
            println!("\n{}:", var.name);
            print!("{}", format_values(var));
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<(String, String)> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            Ok((text, name))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok((text, "<stdin>".to_string()))
        }
    }
}
