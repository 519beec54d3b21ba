// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{self, AppOptions, ExportFormat};
use crate::progress::Progress;
use crate::runner;

/// Skill demand from job postings: heatmaps, matrices and per-city advice.
#[derive(Debug, Parser)]
#[command(name = "skillmap-cli", version, about)]
pub struct Cli {
    /// TOML config file (default: ./skillmap.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a postings CSV and write all outputs
    Analyze(AnalyzeArgs),
    /// Turn saved job-listing pages into a postings CSV
    Collect(CollectArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Postings CSV (job_title, role, location, company, skills)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[arg(long, value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Table format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    #[arg(long)]
    pub no_heatmaps: bool,

    #[arg(long)]
    pub no_workbook: bool,

    /// Size of the global hot-skill set
    #[arg(long, value_name = "N")]
    pub top_global: Option<usize>,

    /// Focus skills per city
    #[arg(long, value_name = "N")]
    pub top_city: Option<usize>,
}

#[derive(Debug, Args)]
pub struct CollectArgs {
    /// Directory of saved .html/.htm/.csv files
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output CSV
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl AnalyzeArgs {
    /// Flags override config.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(dir) = &self.outdir { opts.export.out_dir = dir.clone(); }
        if let Some(f) = self.format { opts.export.format = f.into(); }
        if self.no_heatmaps { opts.export.heatmaps = false; }
        if self.no_workbook { opts.export.workbook = false; }
        if let Some(k) = self.top_global { opts.ranking.global_hot_k = k; }
        if let Some(k) = self.top_city { opts.ranking.focus_k = k; }
    }
}

impl CollectArgs {
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(dir) = &self.source { opts.collect.source_dir = dir.clone(); }
        if let Some(out) = &self.out { opts.collect.out = out.clone(); }
    }
}

/// Prints one line per finished item to stderr.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, label);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose, false);

    let mut opts = config::load(cli.config.as_deref()).wrap_err("loading configuration")?;
    let mut progress = CliProgress::default();

    match &cli.command {
        Command::Analyze(args) => {
            args.apply(&mut opts);
            let summary = runner::analyze_file(&opts, &args.input, Some(&mut progress))
                .wrap_err_with(|| format!("analyzing {}", args.input.display()))?;
            tracing::info!(
                postings = summary.postings,
                tidy_rows = summary.tidy_rows,
                cities = summary.cities,
                skills = summary.skills,
                "run summary"
            );
            println!("Analysis complete. Outputs saved to: {}", summary.out_dir.display());
        }
        Command::Collect(args) => {
            args.apply(&mut opts);
            let summary = runner::collect(&opts, Some(&mut progress))
                .wrap_err("collecting saved pages")?;
            for path in &summary.skipped {
                eprintln!("skipped: {}", path.display());
            }
            println!("Saved {} rows to {}", summary.rows, summary.out.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_flags_override_options() {
        let cli = Cli::parse_from([
            "skillmap-cli", "analyze", "-i", "jobs.csv", "--outdir", "out",
            "--format", "tsv", "--no-heatmaps", "--top-global", "20", "--top-city", "3",
        ]);
        let Command::Analyze(args) = cli.command else { panic!("expected analyze") };
        let mut opts = AppOptions::default();
        args.apply(&mut opts);
        assert_eq!(opts.export.out_dir, PathBuf::from("out"));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(!opts.export.heatmaps && opts.export.workbook);
        assert_eq!(opts.ranking.global_hot_k, 20);
        assert_eq!(opts.ranking.focus_k, 3);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["skillmap-cli", "collect", "--source", "pages", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Collect(CollectArgs { source: Some(_), out: None })));
    }
}
