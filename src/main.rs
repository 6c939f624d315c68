use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_tracker::cli::{
    handle_budgets_command, handle_categories_command, handle_check_command,
    handle_months_command, handle_report_command, handle_summary_command, ReportFormat,
    SourceArgs,
};
use expense_tracker::config::{paths::DIR_ENV_VAR, Settings, TrackerPaths};
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track monthly spending against per-category budgets",
    long_about = "Reads a user's expenses and budgets from a JSON snapshot and reports \
                  monthly totals, per-category budget performance and overspending."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals and budget usage for a month
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Month to summarize (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show per-category budget performance for a month
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Write to a file instead of stdout; bare file names go to the
        /// export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List budgets grouped by month, newest first
    Budgets {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Check records for malformed entries and duplicate budgets
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List the configured categories
    Categories,

    /// List the months offered for budgets and reports
    Months {
        /// Center the range on this year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(if cli.verbose {
        "debug"
    } else {
        settings.log_level.as_str()
    });

    match cli.command {
        Some(Commands::Summary { source, month }) => {
            handle_summary_command(&paths, &settings, &source, month.as_deref())?;
        }
        Some(Commands::Report {
            source,
            month,
            format,
            output,
        }) => {
            handle_report_command(&paths, &settings, &source, month.as_deref(), format, output)?;
        }
        Some(Commands::Budgets { source }) => {
            handle_budgets_command(&paths, &settings, &source)?;
        }
        Some(Commands::Check { source }) => {
            let check = handle_check_command(&paths, &source)?;
            if !check.is_clean() {
                anyhow::bail!("found {} problem(s) in the records", check.problem_count());
            }
        }
        Some(Commands::Categories) => handle_categories_command(&settings),
        Some(Commands::Months { year }) => handle_months_command(year)?,
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Default snapshot: {}", paths.default_snapshot().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("(override with {})", DIR_ENV_VAR);
            println!(
                "Settings saved:   {}",
                if paths.is_initialized() { "yes" } else { "no (using defaults)" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Categories:          {}", settings.categories.len());
            println!("  Restrict categories: {}", settings.restrict_categories);
            println!(
                "  Usage thresholds:    {}% warning, {}% danger",
                settings.usage_warning_percent, settings.usage_danger_percent
            );
            println!("  Log level:           {}", settings.log_level);
        }
        None => {
            println!("Expense Tracker - monthly spending against budgets");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
        }
    }

    Ok(())
}
