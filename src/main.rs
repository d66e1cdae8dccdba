use std::path::{Path, PathBuf};

use aliasfix::settings::{load_settings, Settings};
use aliasfix::{FileOutcome, WriteMode};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aliasfix", version)]
#[command(about = "Rewrite alias imports (`@/...`) into paths relative to each file")]
struct Args {
    /// Project root; scanned directories and the alias root are relative to it
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// TOML settings file (alias, alias_root, dirs, extensions)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Alias marker to rewrite [default: @/]
    #[arg(long)]
    alias: Option<String>,

    /// Directory the alias stands for [default: src]
    #[arg(long = "alias-root", value_name = "DIR")]
    alias_root: Option<PathBuf>,

    /// Top-level directory to scan; repeatable [default: app, src]
    #[arg(long = "dir", value_name = "DIR")]
    dirs: Vec<String>,

    /// File extension to rewrite; repeatable [default: ts, tsx, js, jsx]
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Report what would change without writing anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Log every scanned file to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };
        if let Some(alias) = &self.alias {
            settings.alias = alias.clone();
        }
        if let Some(root) = &self.alias_root {
            settings.alias_root = root.clone();
        }
        if !self.dirs.is_empty() {
            settings.dirs = self.dirs.clone();
        }
        if !self.extensions.is_empty() {
            settings.extensions = self.extensions.clone();
        }
        Ok(settings.validated()?)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "aliasfix=debug" } else { "aliasfix=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report(outcome: &FileOutcome, root: &Path) {
    let shown = outcome.path.strip_prefix(root).unwrap_or(&outcome.path);
    for change in &outcome.changes {
        println!("  {}: {} -> {}", shown.display(), change.from, change.to);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = args.settings().context("failed to load settings")?;
    let mode = if args.dry_run { WriteMode::DryRun } else { WriteMode::Write };

    println!("Fixing all {} imports under {}...", settings.alias, args.root.display());
    let summary = aliasfix::run(&args.root, &settings, mode, |outcome| report(outcome, &args.root))
        .with_context(|| format!("failed to rewrite imports under {}", args.root.display()))?;

    match mode {
        WriteMode::Write => println!("\nFixed imports in {} files", summary.files_modified),
        WriteMode::DryRun => println!("\nWould fix imports in {} files", summary.files_modified),
    }
    Ok(())
}
