//! CLI entry point for deskfolio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deskfolio::commands::list::{ListOptions, SortOrder};

#[derive(Parser)]
#[command(name = "deskfolio")]
#[command(version)]
#[command(about = "Articles and desktop-shell state for a desktop-styled personal site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new article
    New {
        /// Title of the new article
        title: String,

        /// Slug to use instead of one derived from the title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Print article slugs
    Slugs,

    /// List article summaries
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Order of the listing
        #[arg(long, value_enum, default_value_t = SortOrder::Scan)]
        sort: SortOrder,

        /// Keep running and list again on changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Show one article
    Show {
        /// Article slug
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay shell actions (open:<id>, close:<id>, toggle:<id>, toggle-theme, theme:<mode>)
    Shell {
        /// Actions to apply in order
        actions: Vec<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "deskfolio=debug,info"
    } else {
        "deskfolio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            deskfolio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let site = deskfolio::Site::new(&base_dir)?;
            let path = deskfolio::commands::new::run(&site, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Slugs => {
            let site = deskfolio::Site::new(&base_dir)?;
            deskfolio::commands::list::run_slugs(&site)?;
        }

        Commands::List { json, sort, watch } => {
            let site = deskfolio::Site::new(&base_dir)?;
            let options = ListOptions { json, sort };
            if watch {
                deskfolio::commands::list::watch(&site, options)?;
            } else {
                deskfolio::commands::list::run(&site, options)?;
            }
        }

        Commands::Show { slug, json } => {
            let site = deskfolio::Site::new(&base_dir)?;
            deskfolio::commands::show::run(&site, &slug, json)?;
        }

        Commands::Shell { actions } => {
            let site = deskfolio::Site::new(&base_dir)?;
            deskfolio::commands::shell::run(&site, &actions)?;
        }

        Commands::Version => {
            println!("deskfolio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
