mod prompt;
mod session;

use clap::Parser;
use session::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Interactive manager for portfolio content documents",
    version
)]
struct Cli {
    /// Directory holding the content JSON documents
    #[arg(long, env = "FOLIO_CONTENT_DIR", default_value = "src/data")]
    content_dir: PathBuf,

    /// Root directory for backup snapshots
    #[arg(long, env = "FOLIO_BACKUP_DIR", default_value = "backups")]
    backup_dir: PathBuf,
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

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Missing content dir or document is a startup error, not something the
    // menu loop should limp along without.
    folio_core::paths::validate_content_dir(&cli.content_dir)?;

    // The interactive channel lives exactly as long as this scope, so it is
    // released on every exit path.
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, cli.content_dir, cli.backup_dir);
    session.run()
}
