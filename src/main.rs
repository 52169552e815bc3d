//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::contact::SubmitStatus;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Loads and renders blog posts and certifications for a portfolio site", long_about = None)]
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
    /// Initialize a new portfolio content directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post
    New {
        /// Title of the new post
        title: String,

        /// Category for the filter bar
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Render blog and certification fragments
    #[command(alias = "r")]
    Render,

    /// List site content
    List {
        /// Type of content to list (post, slug, category, certification)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Clean the output folder
    Clean,

    /// Submit the contact form
    Contact {
        /// Form field as key=value, may be repeated
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

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
            tracing::info!("Initializing portfolio in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio in {:?}", target_dir);
        }

        Commands::New { title, category } => {
            let site = folio::Folio::new(&base_dir)?;
            let path = folio::commands::new::create_post(&site, &title, category.as_deref())?;
            println!("Created {:?}", path);
        }

        Commands::Render => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Rendering fragments...");
            site.render().await?;
            println!("Rendered to {:?}", site.public_dir);
        }

        Commands::List { r#type } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type).await?;
        }

        Commands::Clean => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Contact { fields } => {
            let site = folio::Folio::new(&base_dir)?;
            let status = folio::commands::contact::run(&site, &fields).await?;
            if let SubmitStatus::Failed(_) = status {
                std::process::exit(1);
            }
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
