//! Command-line front end: load a key export, plan slices, print statements.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use slicesql_csv::{CsvKeyOptions, load_key_source};
use slicesql_partition::{Dialect, SliceOptions, SlicePlan, TableRef, plan_slices, verify_slices};
use slicesql_result::{Error, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "slicesql", version)]
#[command(about = "Generate primary-key range slice SQL statements", long_about = None)]
pub struct Args {
    /// Table name (optionally schema-qualified).
    #[arg(long)]
    pub table: String,
    /// CSV export holding the table's primary-key columns.
    #[arg(long)]
    pub keys: PathBuf,
    /// Primary-key columns in key order, comma separated. Defaults to every column of the export.
    #[arg(long, value_delimiter = ',')]
    pub pk: Option<Vec<String>>,
    /// Number of desired slices.
    #[arg(long, default_value_t = 8)]
    pub slices: usize,
    /// Database type the metadata and verification SQL is written for: pg or ora.
    #[arg(long, default_value = "pg")]
    pub dbtype: Dialect,
    /// Print profiling info to stderr.
    #[arg(long, default_value_t = false)]
    pub profile: bool,
    /// Print the metadata, boundary and verification SQL as comments before the statements.
    #[arg(long, default_value_t = false)]
    pub emit_queries: bool,
    /// Check the slices against the loaded keys; exit non-zero unless every row is selected once.
    #[arg(long, default_value_t = false)]
    pub verify: bool,
    /// Field delimiter of the key export.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// The key export has no header row.
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
    /// Logging level: DEBUG, INFO, WARNING, ERROR.
    #[arg(long, default_value = "info")]
    pub log_level: String,
    /// Log file path. Logs go to stderr when absent.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn slice_options(&self) -> SliceOptions {
        SliceOptions::new(self.slices)
    }

    pub fn csv_options(&self) -> Result<CsvKeyOptions> {
        if !self.delimiter.is_ascii() {
            return Err(Error::InvalidArgumentError(format!(
                "delimiter '{}' is not a single-byte character",
                self.delimiter
            )));
        }
        Ok(CsvKeyOptions {
            has_header: !self.no_header,
            delimiter: self.delimiter as u8,
            primary_key: self.pk.clone(),
            ..Default::default()
        })
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    /// `--verify` found missing or overlapping rows.
    Inexact,
}

/// Map a level name to a tracing filter directive.
pub fn level_directive(level: &str) -> Result<&'static str> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" | "critical" => Ok("error"),
        other => Err(Error::InvalidArgumentError(format!(
            "unknown log level '{other}'"
        ))),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let directive = level_directive(level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let installed = match log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_target(false)
                .with_ansi(false)
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    installed.map_err(Error::internal)
}

/// Run one invocation, writing statements to `out` and diagnostics to `err`.
pub fn run<W: Write, E: Write>(args: &Args, out: &mut W, err: &mut E) -> Result<RunStatus> {
    tracing::info!(
        "start dbtype={} table={} slices={}",
        args.dbtype,
        args.table,
        args.slices
    );
    let options = args.slice_options();
    options.validate()?;
    let table = TableRef::parse(&args.table)?;
    let mut source = load_key_source(&args.keys, &args.csv_options()?)?;

    let plan = plan_slices(&mut source, &table, &options)?;
    let statements = plan.statements();

    if args.emit_queries {
        write_queries(out, args.dbtype, &plan, &statements)?;
    }
    for statement in &statements {
        writeln!(out, "{statement}")?;
    }

    if args.profile {
        write_profile(err, &plan, statements.len())?;
    }

    if args.verify {
        let verification = verify_slices(&source, &plan.predicates);
        writeln!(
            err,
            "[verify] table={} total={} slice_counts={:?} sum_slices={} union={} overlap={}",
            plan.table,
            verification.total,
            verification.slice_counts,
            verification.sum_slices,
            verification.union_count,
            verification.overlap_count
        )?;
        if !verification.is_exact() {
            tracing::error!("slices for {} are not an exact partition", plan.table);
            return Ok(RunStatus::Inexact);
        }
    }
    Ok(RunStatus::Ok)
}

fn write_profile<E: Write>(err: &mut E, plan: &SlicePlan, sqls: usize) -> Result<()> {
    writeln!(
        err,
        "[profile] pk_cols={:?}, metadata={:.3}s, fetch={:.3}s, total={:.3}s, boundaries={}, sqls={}",
        plan.primary_key,
        plan.timings.metadata.as_secs_f64(),
        plan.timings.fetch.as_secs_f64(),
        plan.timings.total.as_secs_f64(),
        plan.boundaries.len(),
        sqls
    )?;
    Ok(())
}

fn write_queries<W: Write>(
    out: &mut W,
    dialect: Dialect,
    plan: &SlicePlan,
    statements: &[String],
) -> Result<()> {
    let table = &plan.table;
    writeln!(out, "-- primary key: {}", dialect.primary_key_query(table))?;
    writeln!(out, "--   params: {:?}", dialect.primary_key_params(table))?;
    writeln!(out, "-- row count: {}", dialect.count_query(table))?;
    if !plan.row_numbers.is_empty() {
        writeln!(
            out,
            "-- boundaries: {}",
            dialect.boundary_query(table, &plan.primary_key, plan.row_numbers.len())
        )?;
        writeln!(out, "--   params: {:?}", plan.row_numbers)?;
    }
    if !statements.is_empty() {
        writeln!(
            out,
            "-- overlap: {}",
            dialect.overlap_query(&plan.primary_key, statements)
        )?;
        writeln!(
            out,
            "-- union: {}",
            dialect.union_count_query(&plan.primary_key, statements)
        )?;
    }
    Ok(())
}
