use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use taskgrade::completions::generate_completions;
use taskgrade::config::GraderConfig;
use taskgrade::logging::init_tracing;
use taskgrade::report::report;
use taskgrade::tasks::{run, TaskId};

#[derive(Parser)]
#[command(name = "taskgrade")]
#[command(about = "Verify task outputs against ground truth", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check results/temperatures.txt against the fixed conversion table
    Temperatures,
    /// Check results/log_summary.txt against data/server.log
    LogSummary,
    /// Check results/sales_summary.json against data/sales.csv
    SalesSummary,
    /// Check results/py_files.txt against the workspace tree
    PyFiles,
    /// Check results/page_title.txt against the expected title
    PageTitle,
    /// Check results/report.txt against the configured target directory
    DirReport,
    /// Check results/haiku.txt for 5-7-5 syllables and a technology theme
    Haiku,
    /// Check results/summary.txt is one sentence on benefits and challenges
    Summary,
    /// Check results/pros_cons.txt for five pros and five cons
    ProsCons,
    /// Check results/os_version.txt names the host operating system
    OsVersion,

    /// List every task with its output and expected format
    List,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    fn task(&self) -> Option<TaskId> {
        let task = match self {
            Commands::Temperatures => TaskId::Temperatures,
            Commands::LogSummary => TaskId::LogSummary,
            Commands::SalesSummary => TaskId::SalesSummary,
            Commands::PyFiles => TaskId::PyFiles,
            Commands::PageTitle => TaskId::PageTitle,
            Commands::DirReport => TaskId::DirReport,
            Commands::Haiku => TaskId::Haiku,
            Commands::Summary => TaskId::Summary,
            Commands::ProsCons => TaskId::ProsCons,
            Commands::OsVersion => TaskId::OsVersion,
            Commands::List | Commands::Completions { .. } => return None,
        };
        Some(task)
    }
}

/// Run one verifier and print its verdict line
fn verify(task: TaskId, workspace: &Path) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    let config = match GraderConfig::load(workspace) {
        Ok(config) => config,
        Err(e) => {
            writeln!(stdout, "FAIL: invalid configuration: {e:#}")
                .context("Failed to write verdict")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let verdict = run(task, &config);
    let passed = report(&verdict, &mut stdout).context("Failed to write verdict")?;
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn list(workspace: &Path) -> Result<()> {
    let config = GraderConfig::load(workspace)?;
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", "Tasks".bold())?;
    for task in TaskId::ALL {
        writeln!(
            stdout,
            "  {:<14} {}",
            task.name().cyan().bold(),
            task.output_path(&config).display().to_string().dimmed()
        )?;
        writeln!(stdout, "  {:<14} {}", "", task.grammar().describe())?;
    }
    Ok(())
}

fn execute(cli: Cli) -> Result<ExitCode> {
    let workspace = std::env::current_dir().context("Failed to determine working directory")?;

    if let Some(task) = cli.command.task() {
        return verify(task, &workspace);
    }

    match cli.command {
        Commands::List => list(&workspace)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut io::stdout());
        }
        _ => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("{} {e:#}", "warning:".yellow());
    }

    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
