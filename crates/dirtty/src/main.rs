use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use dirtty::app::App;
use dirtty::infra::local_store::LocalStore;

/// Terminal console for browsing and administering a directory tree.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Root directory to serve (defaults to the current directory).
    root: Option<PathBuf>,

    /// Grant elevated operations (delete).
    #[arg(long)]
    privileged: bool,

    /// Where downloaded files are exported (defaults to the user's
    /// download directory).
    #[arg(long)]
    download_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let root = root.canonicalize()?;
    let download_dir = cli
        .download_dir
        .or_else(dirs::download_dir)
        .unwrap_or_else(std::env::temp_dir);

    let store = LocalStore::new(root, download_dir);
    let mut app = App::new(Arc::new(store), cli.privileged);

    dirtty::runtime::run(&mut app).await
}
