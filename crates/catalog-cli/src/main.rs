//! Catalog merge CLI
//!
//! Command-line tool for merging a child company's product catalog into a
//! parent company's catalog.

use catalog_core::{
    load_company, merge_catalogs, summarize, write_merged_catalog, CompanySources, OutputFormat,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-merge")]
#[command(about = "Merge two companies' product catalogs", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a child company's catalog into a parent company's catalog
    ///
    /// Any value left out on the command line is asked for interactively.
    Merge(MergeArgs),

    /// Validate one company's files and show a summary
    Inspect {
        /// Company name
        #[arg(short, long)]
        name: String,

        /// Supplier CSV file
        #[arg(short, long)]
        suppliers: PathBuf,

        /// Barcode CSV file
        #[arg(short, long)]
        barcodes: PathBuf,

        /// Catalog CSV file
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

#[derive(Args)]
struct MergeArgs {
    /// Name of the parent company
    parent_name: Option<String>,
    /// Parent supplier CSV file
    parent_suppliers: Option<PathBuf>,
    /// Parent barcode CSV file
    parent_barcodes: Option<PathBuf>,
    /// Parent catalog CSV file
    parent_catalog: Option<PathBuf>,
    /// Name of the child company
    child_name: Option<String>,
    /// Child supplier CSV file
    child_suppliers: Option<PathBuf>,
    /// Child barcode CSV file
    child_barcodes: Option<PathBuf>,
    /// Child catalog CSV file
    child_catalog: Option<PathBuf>,
    /// Output file path, must not exist yet
    output: Option<PathBuf>,

    /// Output format (csv or json)
    #[arg(long, default_value = "csv")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        tracing::debug!(error = ?e, "aborting");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> catalog_core::Result<()> {
    match command {
        Commands::Merge(args) => cmd_merge(args),
        Commands::Inspect {
            name,
            suppliers,
            barcodes,
            catalog,
        } => cmd_inspect(
            name,
            &CompanySources {
                suppliers,
                barcodes,
                catalog,
            },
        ),
    }
}

fn cmd_merge(args: MergeArgs) -> catalog_core::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let parent_name: String = resolve(
        args.parent_name,
        "What is the name of the parent company?",
        &mut input,
    )?;
    let parent = CompanySources {
        suppliers: resolve(args.parent_suppliers, "Parent supplier file", &mut input)?,
        barcodes: resolve(args.parent_barcodes, "Parent barcodes file", &mut input)?,
        catalog: resolve(args.parent_catalog, "Parent catalog file", &mut input)?,
    };
    let child_name: String = resolve(
        args.child_name,
        "What is the name of the child company?",
        &mut input,
    )?;
    let child = CompanySources {
        suppliers: resolve(args.child_suppliers, "Child supplier file", &mut input)?,
        barcodes: resolve(args.child_barcodes, "Child barcodes file", &mut input)?,
        catalog: resolve(args.child_catalog, "Child catalog file", &mut input)?,
    };
    let output: PathBuf = resolve(
        args.output,
        "Where would you like to save the result?",
        &mut input,
    )?;

    let parent_company = load_company(parent_name, &parent)?;
    let child_company = load_company(child_name, &child)?;

    let merged = merge_catalogs(&parent_company, &child_company);
    let summary = summarize(&merged, &parent_company, &child_company);
    tracing::info!(
        parent_items = summary.parent_items,
        child_kept = summary.child_kept,
        child_dropped = summary.child_dropped,
        "merged catalogs"
    );

    write_merged_catalog(&merged, &output, args.format)?;

    println!(
        "Merged {} items into {} ({} from {}, {} from {}, {} duplicates dropped)",
        merged.len(),
        output.display(),
        summary.parent_items,
        parent_company.name,
        summary.child_kept,
        child_company.name,
        summary.child_dropped
    );

    Ok(())
}

fn cmd_inspect(name: String, sources: &CompanySources) -> catalog_core::Result<()> {
    let company = load_company(name, sources)?;

    println!("Company: {}", company.name);
    println!("Suppliers: {}", company.suppliers.len());
    println!("Products: {}", company.item_count());
    println!("Barcodes: {}", company.barcode_count());
    println!();

    println!("SKU\tBarcodes\tDescription");
    println!("{}", "-".repeat(36));
    for item in company.catalog.iter().take(10) {
        println!("{}\t{}\t{}", item.sku, item.barcodes.len(), item.description);
    }

    if company.item_count() > 10 {
        println!("... ({} more products)", company.item_count() - 10);
    }

    Ok(())
}

/// Use the value given on the command line, or ask for it
fn resolve<T, R>(value: Option<T>, question: &str, input: &mut R) -> io::Result<T>
where
    T: From<String>,
    R: BufRead,
{
    match value {
        Some(v) => Ok(v),
        None => prompt(question, input).map(T::from),
    }
}

fn prompt<R: BufRead>(question: &str, input: &mut R) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "? {} ", question)?;
    stdout.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}
