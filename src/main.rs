//! CLI entry point for polyblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polyblog::commands;
use polyblog::content::SortOrder;

#[derive(Parser)]
#[command(name = "polyblog")]
#[command(version)]
#[command(about = "Query the posts of a multilingual file-based blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, one page at a time
    #[command(alias = "ls")]
    List {
        /// Only posts in this language
        #[arg(short, long)]
        lang: Option<String>,

        /// Only posts in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order (date-desc, date-asc, title-asc)
        #[arg(short, long)]
        sort: Option<SortOrder>,

        /// Page number
        #[arg(short, long)]
        page: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post slug
        slug: String,

        /// Post language
        #[arg(short, long)]
        lang: String,

        /// Post category (looked up by slug when omitted)
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List categories
    Categories {
        /// Count posts in this language
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show the newest posts of a language
    Latest {
        /// Post language (defaults to the configured default language)
        #[arg(short, long)]
        lang: Option<String>,

        /// Number of posts
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every route a static build renders
    Routes,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "polyblog=debug,info"
    } else {
        "polyblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::List {
            lang,
            category,
            sort,
            page,
            json,
        } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            let options = commands::list::ListOptions {
                language: lang,
                category,
                sort,
                page,
                json,
            };
            commands::list::run(&blog, &options, &mut stdout)?;
        }

        Commands::Show {
            slug,
            lang,
            category,
            json,
        } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            commands::show::run(&blog, &slug, &lang, category.as_deref(), json, &mut stdout)?;
        }

        Commands::Categories { lang } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            commands::categories::run(&blog, lang.as_deref(), &mut stdout)?;
        }

        Commands::Latest { lang, count, json } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            let lang = lang.unwrap_or_else(|| blog.config.default_language.clone());
            commands::latest::run(&blog, &lang, count, json, &mut stdout)?;
        }

        Commands::Routes => {
            let blog = polyblog::Blog::new(&base_dir)?;
            tracing::info!("Enumerating routes under {:?}", blog.content_dir);
            commands::routes::run(&blog, &mut stdout)?;
        }

        Commands::Version => {
            writeln!(stdout, "polyblog version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
