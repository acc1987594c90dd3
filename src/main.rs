use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use playlist_catalog::catalog::resolve_playlist_dir;
use playlist_catalog::prompt::AlbumPrompt;
use playlist_catalog::report::{error_to_json, write_report, ReportFormat};
use playlist_catalog::{CatalogConfig, PlaylistCatalog, SongQuery, SortOrder};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist")]
#[command(about = "Browse and extend a catalog of tab-separated album files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List songs in the playlist
    List {
        /// Playlist directory (default: ./playlist)
        #[arg(long)]
        playlist: Option<String>,

        /// Include subfolders when reading .tsv files
        #[arg(long)]
        recursive: bool,

        /// Filter by album name
        #[arg(long)]
        album: Option<String>,

        /// Filter by artist name
        #[arg(long)]
        artist: Option<String>,

        /// Filter by song title prefix
        #[arg(long = "title-prefix")]
        title_prefix: Option<String>,

        /// Sort order: album or duration
        #[arg(long, default_value = "album")]
        sort: SortOrder,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new album interactively
    AddAlbum {
        /// Album title
        #[arg(long)]
        name: String,

        /// Playlist directory (default: ./playlist)
        #[arg(long)]
        playlist: Option<String>,
    },
}

/// Resolve the playlist directory and expand ~
fn playlist_dir(input: Option<&str>) -> PathBuf {
    let dir = resolve_playlist_dir(input);
    let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
    PathBuf::from(expanded)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let catalog = PlaylistCatalog::on_disk();

    match args.command {
        Command::List {
            playlist,
            recursive,
            album,
            artist,
            title_prefix,
            sort,
            json,
        } => {
            let config =
                CatalogConfig::new(playlist_dir(playlist.as_deref())).with_recursive(recursive);
            let query = SongQuery {
                album,
                artist,
                title_prefix,
                sort,
            };
            let format = if json { ReportFormat::Json } else { ReportFormat::Table };

            log::debug!("Listing {:?} with {:?}", config, query);

            let songs = match catalog.list(&config, &query) {
                Ok(songs) => songs,
                Err(e) => {
                    if json {
                        println!("{}", error_to_json(&e.to_string()));
                    }
                    return Err(e).context("Failed to load playlist");
                }
            };

            let stdout = io::stdout();
            write_report(&mut stdout.lock(), &songs, format)
                .context("Failed to write listing")?;
        }

        Command::AddAlbum { name, playlist } => {
            if name.trim().is_empty() {
                bail!("Album name is required for add-album command.");
            }
            let dir = playlist_dir(playlist.as_deref());

            let stdin = io::stdin();
            let stdout = io::stdout();
            let lines = AlbumPrompt::new(stdin.lock(), stdout.lock())
                .collect_songs()
                .context("Failed to read songs")?;

            if lines.is_empty() {
                bail!("Album must contain at least one song.");
            }

            let file = catalog
                .write_album(&dir, &name, &lines)
                .context("Failed to save album")?;
            println!("Album saved: {}", file.display());
        }
    }

    Ok(())
}
