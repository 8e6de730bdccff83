use anyhow::{Context, Result};
use clap::Parser;
use material_slicer::{
    hash_file, logging, normalize_records, partition_items, read_records_from_path,
    AssignmentSink, CsvSink, JsonSink, OutputFormat, RunManifest, RunStats, SlicerConfig,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Round a material list into production batches and slice it into
/// weight-capped tasks
#[derive(Debug, Parser)]
#[command(name = "material-slicer", version, about)]
struct Cli {
    /// Material list CSV with `Item` and `Total` columns
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (`-` writes to stdout)
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// Config file; created with defaults if missing
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Output format (defaults to the output file extension)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Partition and print the summary without writing output
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_json);

    let start_time = Instant::now();

    let config = SlicerConfig::load_or_init(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    info!(
        max_group_weight = config.max_group_weight,
        special_kinds = config.special_kinds.len(),
        split_policy = ?config.split_policy,
        "Configuration ready"
    );

    let records = read_records_from_path(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    info!(records = records.len(), input = %cli.input.display(), "Loaded material list");

    let normalized = normalize_records(&records).context("Failed to round material list")?;
    let partition =
        partition_items(&normalized, &config).context("Failed to slice material list")?;

    let stats = RunStats::from_partition(records.len(), &partition);
    info!(
        groups = stats.group_count,
        entries = stats.entry_count,
        split_items = stats.split_item_count,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Sliced material list"
    );

    if cli.dry_run {
        print_summary(&stats);
        return Ok(());
    }

    let format = cli
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&cli.output));
    let writer = open_output(&cli.output)?;

    match format {
        OutputFormat::Csv => CsvSink::new(writer).write_partition(&partition)?,
        OutputFormat::Json => {
            let sha = hash_file(&cli.input)?;
            let manifest = RunManifest::new(
                Some(cli.input.display().to_string()),
                Some(sha),
                stats.clone(),
            );
            JsonSink::new(writer, manifest).write_partition(&partition)?
        }
    }

    if !is_stdout(&cli.output) {
        print_summary(&stats);
        println!("✓ Wrote {}", cli.output.display());
    }

    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdout(path) {
        return Ok(Box::new(io::stdout().lock()));
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn print_summary(stats: &RunStats) {
    println!("Items:          {}", stats.item_count);
    println!("Tasks:          {}", stats.group_count);
    println!("Entries:        {}", stats.entry_count);
    println!("Split items:    {}", stats.split_item_count);
    println!("Total quantity: {}", stats.total_quantity);
}
