mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::list::ListSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rulekit",
    about = "Detect a project's technologies and surface the matching rule documents",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from package.json or .git/)
    #[arg(long, global = true, env = "RULEKIT_ROOT")]
    root: Option<PathBuf>,

    /// Corpus override directory (wins over .rulekit.yaml rules_dir)
    #[arg(long, global = true)]
    rules_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold .rulekit.yaml and the .ai/rules directory
    Init,

    /// Parse the dependency manifest and report matched technologies
    Detect {
        /// Explicit manifest path (default: <root>/package.json)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// List registry technologies or corpus documents
    List {
        #[command(subcommand)]
        subcommand: ListSubcommand,
    },

    /// Print a rule document
    Show {
        /// Document id (file stem, e.g. react-router)
        id: String,
    },

    /// Check corpus and configuration integrity
    Check,

    /// Materialize matched rule documents into .ai/rules/
    Apply {
        /// Overwrite documents that already exist in .ai/rules/
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let rules_dir = cli.rules_dir.as_deref();

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Detect { manifest } => {
            cmd::detect::run(&root, manifest.as_deref(), rules_dir, cli.json)
        }
        Commands::List { subcommand } => cmd::list::run(&root, subcommand, rules_dir, cli.json),
        Commands::Show { id } => cmd::show::run(&root, &id, rules_dir, cli.json),
        Commands::Check => cmd::check::run(&root, rules_dir, cli.json),
        Commands::Apply { force } => cmd::apply::run(&root, rules_dir, force, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
