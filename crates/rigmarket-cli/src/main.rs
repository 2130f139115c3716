// Rust guideline compliant 2026-10-12

//! Rigmarket CLI Application
//!
//! Command-line interface for the Rigmarket PC-parts marketplace.

use clap::Parser;
use rigmarket_cli::commands::{self, create::CreateArgs, list::ListArgs, update::UpdateArgs};
use rigmarket_cli::{create_formatter, init_tracing, CliContext, LogOptions, OutputFormatter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "rig",
    version,
    about = "Rigmarket: a marketplace for used PC parts",
    long_about = "Rigmarket stores listings in JSONL under .rigmarket/, expires them after a configurable period and purges them once their retention ends.",
    after_help = "Examples:\n  rig init\n  rig --user user-alice create \"RTX 3080\" --category gpu --price 450 --condition used --location Berlin\n  rig list GPU --sort price-low\n  rig list --brand nvidia --max-price 500 --page 2\n  rig --user user-alice sell lst-1a2\n  rig serve --log-level info\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing .rigmarket (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Acting user ID, required for commands that change listings
    #[arg(long, global = true)]
    user: Option<String>,

    /// Acting user's email
    #[arg(long, global = true)]
    email: Option<String>,

    /// Acting user's display name
    #[arg(long, global = true)]
    username: Option<String>,

    /// Log level: error, warn, info or debug
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new market directory
    Init,

    /// List the category catalog
    Categories,

    /// Create a new listing
    Create(CreateArgs),

    /// Show details of a listing
    Show {
        /// Listing ID (full or partial)
        id: String,
    },

    /// Search and list listings
    List(ListArgs),

    /// Update a listing you own
    Update(UpdateArgs),

    /// Mark a listing you own as sold
    Sell {
        /// Listing ID (full or partial)
        id: String,
    },

    /// Remove a listing you own from the public feed
    Delete {
        /// Listing ID (full or partial)
        id: String,
    },

    /// Count a view of a listing
    View {
        /// Listing ID (full or partial)
        id: String,
    },

    /// Run one expiry and purge pass now
    Sweep,

    /// Run the periodic sweep until interrupted
    Serve,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let formatter = create_formatter(cli.json);

    let default_level = match cli.command {
        Some(Commands::Serve) => "info",
        _ => "warn",
    };
    let log_options = LogOptions {
        log_level: cli.log_level.clone().unwrap_or_else(|| default_level.to_string()),
        log_file: cli.log_file.clone(),
    };
    let _guard = match init_tracing(&log_options) {
        Ok(guard) => guard,
        Err(error) => return report(&error, formatter.as_ref(), cli.json),
    };

    let context = context_of(&cli);
    match run(cli.command, &context, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&error, formatter.as_ref(), cli.json),
    }
}

fn context_of(cli: &Cli) -> CliContext {
    CliContext {
        root: cli.root.clone(),
        user: cli.user.clone(),
        email: cli.email.clone(),
        username: cli.username.clone(),
    }
}

fn run(
    command: Option<Commands>,
    context: &CliContext,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Init) => commands::init::execute(context, formatter),
        Some(Commands::Categories) => commands::categories::execute(context, formatter),
        Some(Commands::Create(args)) => commands::create::execute(context, args, formatter),
        Some(Commands::Show { id }) => commands::show::execute(context, id, formatter),
        Some(Commands::List(args)) => commands::list::execute(context, args, formatter),
        Some(Commands::Update(args)) => commands::update::execute(context, args, formatter),
        Some(Commands::Sell { id }) => commands::sell::execute(context, id, formatter),
        Some(Commands::Delete { id }) => commands::delete::execute(context, id, formatter),
        Some(Commands::View { id }) => commands::view::execute(context, id, formatter),
        Some(Commands::Sweep) => commands::sweep::execute(context, formatter),
        Some(Commands::Serve) => commands::serve::execute(context),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Prints an error and returns the failure exit code.
///
/// JSON envelopes go to stdout so scripts can parse them; plain messages go to stderr.
fn report(error: &anyhow::Error, formatter: &dyn OutputFormatter, json: bool) -> ExitCode {
    if json {
        println!("{}", formatter.format_error(error));
    } else {
        eprintln!("{}", formatter.format_error(error));
    }
    ExitCode::FAILURE
}
