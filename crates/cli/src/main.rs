mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use intimetrics_core::{ActivityType, RelationshipType};
use intimetrics_engine::Category;
use intimetrics_storage::JsonStore;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Activity kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
    Sex,
    Cuddle,
    Oral,
    Anal,
    Vaginal,
    Masturbation,
    Other,
}

impl From<KindArg> for ActivityType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Sex => ActivityType::Sex,
            KindArg::Cuddle => ActivityType::Cuddle,
            KindArg::Oral => ActivityType::Oral,
            KindArg::Anal => ActivityType::Anal,
            KindArg::Vaginal => ActivityType::Vaginal,
            KindArg::Masturbation => ActivityType::Masturbation,
            KindArg::Other => ActivityType::Other,
        }
    }
}

/// Relationship argument for partner commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RelationshipArg {
    Friend,
    Partner,
    Casual,
    OneNightStand,
    LongTerm,
    Other,
}

impl From<RelationshipArg> for RelationshipType {
    fn from(rel: RelationshipArg) -> Self {
        match rel {
            RelationshipArg::Friend => RelationshipType::Friend,
            RelationshipArg::Partner => RelationshipType::Partner,
            RelationshipArg::Casual => RelationshipType::Casual,
            RelationshipArg::OneNightStand => RelationshipType::OneNightStand,
            RelationshipArg::LongTerm => RelationshipType::LongTerm,
            RelationshipArg::Other => RelationshipType::Other,
        }
    }
}

/// Achievement category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
    Milestone,
    Activity,
    Streak,
    Variety,
    Social,
}

impl From<CategoryArg> for Category {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Milestone => Category::Milestone,
            CategoryArg::Activity => Category::Activity,
            CategoryArg::Streak => Category::Streak,
            CategoryArg::Variety => Category::Variety,
            CategoryArg::Social => Category::Social,
        }
    }
}

/// Intimetrics activity tracker.
#[derive(Parser)]
#[command(name = "intimetrics", version, about = "Intimetrics activity tracker")]
struct Cli {
    /// Path to the JSON data file
    #[arg(
        long,
        global = true,
        env = "INTIMETRICS_DATA",
        default_value = "intimetrics.json"
    )]
    data: PathBuf,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log an activity, then run the achievement unlock pass
    Log {
        /// Kind of activity
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Activity date (YYYY-MM-DD); today if omitted
        #[arg(long)]
        date: Option<String>,
        /// Partner name, free text
        #[arg(long)]
        partner: Option<String>,
        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete one activity by id
    Remove {
        /// Activity id, as shown by `list`
        id: i64,
    },

    /// List activities
    List {
        /// Only activities of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Start of an inclusive date range (requires --to)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// End of an inclusive date range (requires --from)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Manage partners
    Partner {
        #[command(subcommand)]
        command: PartnerCommands,
    },

    /// Show the achievement catalog with unlock state and progress
    Achievements {
        /// Only achievements in this category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Run the achievement unlock pass without logging anything
    Check,

    /// Summarize the activity history
    Stats,

    /// Write all data to an archive file
    Export {
        /// Archive path; a dated name in the working directory if omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace all data with an archive file's contents
    Import {
        /// Archive path
        path: PathBuf,
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },

    /// Delete all activities, partners, and unlocks
    Wipe {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PartnerCommands {
    /// Add a partner
    Add {
        name: String,
        /// Relationship to the partner
        #[arg(long, value_enum)]
        relationship: Option<RelationshipArg>,
    },
    /// Delete one partner by id
    Remove { id: i64 },
    /// Rename a partner and/or change its relationship
    Update {
        id: i64,
        name: String,
        #[arg(long, value_enum)]
        relationship: Option<RelationshipArg>,
    },
    /// List partners with their activity counts
    List,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(data = %cli.data.display(), "opening store");

    let store = match JsonStore::open(&cli.data).await {
        Ok(store) => store,
        Err(e) => {
            report_error(
                &format!("error opening {}: {}", cli.data.display(), e),
                cli.output,
                cli.quiet,
            );
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Log {
            kind,
            date,
            partner,
            note,
        } => {
            commands::log::run(
                &store,
                kind.into(),
                date,
                partner,
                note,
                cli.output,
                cli.quiet,
            )
            .await
        }
        Commands::Remove { id } => commands::list::remove(&store, id, cli.output, cli.quiet).await,
        Commands::List { kind, from, to } => {
            commands::list::run(
                &store,
                kind.map(Into::into),
                from,
                to,
                cli.output,
                cli.quiet,
            )
            .await
        }
        Commands::Partner { command } => match command {
            PartnerCommands::Add { name, relationship } => {
                commands::partner::add(
                    &store,
                    &name,
                    relationship.map(Into::into),
                    cli.output,
                    cli.quiet,
                )
                .await
            }
            PartnerCommands::Remove { id } => {
                commands::partner::remove(&store, id, cli.output, cli.quiet).await
            }
            PartnerCommands::Update {
                id,
                name,
                relationship,
            } => {
                commands::partner::update(
                    &store,
                    id,
                    &name,
                    relationship.map(Into::into),
                    cli.output,
                    cli.quiet,
                )
                .await
            }
            PartnerCommands::List => commands::partner::list(&store, cli.output, cli.quiet).await,
        },
        Commands::Achievements { category } => {
            commands::achievements::run(&store, category.map(Into::into), cli.output, cli.quiet)
                .await
        }
        Commands::Check => commands::check::run(&store, cli.output, cli.quiet).await,
        Commands::Stats => commands::stats::run(&store, cli.output, cli.quiet).await,
        Commands::Export { out } => commands::data::export(&store, out, cli.output, cli.quiet).await,
        Commands::Import { path, yes } => {
            commands::data::import(&store, &path, yes, cli.output, cli.quiet).await
        }
        Commands::Wipe { yes } => commands::data::wipe(&store, yes, cli.output, cli.quiet).await,
    };

    if let Err(msg) = result {
        report_error(&msg, cli.output, cli.quiet);
        process::exit(1);
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
