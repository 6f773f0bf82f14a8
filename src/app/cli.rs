use clap::Parser;
use std::path::PathBuf;

/// Setlist - pick a playlist, browse its albums, start a track 🎵
#[derive(Parser, Debug)]
#[command(name = "setlist", version, about)]
pub struct Args {
    /// Library file to read (overrides `library_path` in config.toml)
    #[arg(long, short = 'l')]
    pub library: Option<PathBuf>,

    /// Playlist id to open first (defaults to the last one used)
    #[arg(long, short = 'p')]
    pub playlist: Option<String>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
