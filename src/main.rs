//! CLI entry point for postkit

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postkit::commands::prompt::{FixedTitle, Prompt, TitleSource};
use postkit::content::PostKind;

#[derive(Parser)]
#[command(name = "postkit")]
#[command(version)]
#[command(about = "Scaffold a new article or TIL post", long_about = None)]
struct Cli {
    /// Directory to write the post to (defaults to current directory)
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
    /// Create a new article
    #[command(alias = "a")]
    Article {
        /// Title of the article (prompted for when omitted)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Create a new TIL post
    #[command(alias = "t")]
    Til {
        /// Title of the post (prompted for when omitted)
        #[arg(short, long)]
        title: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the prompt and the editor hint
    let filter = if cli.debug { "postkit=debug" } else { "postkit=warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // An empty base keeps the printed path relative, e.g. `vim 2024-03-05-my-post.md`
    let base_dir = cli.cwd.unwrap_or_default();

    let (kind, title) = match cli.command {
        Commands::Article { title } => (PostKind::Article, title),
        Commands::Til { title } => (PostKind::Til, title),
    };

    let blog = postkit::Blog::new(&base_dir)?;
    tracing::debug!("Creating new {} in {:?}", kind, base_dir);

    let mut source: Box<dyn TitleSource> = match title {
        Some(title) => Box::new(FixedTitle(title)),
        None => Box::new(Prompt::stdio()),
    };

    let mut stdout = std::io::stdout();
    blog.new_post(kind, source.as_mut(), &mut stdout, &chrono::Local::now())?;

    Ok(())
}
