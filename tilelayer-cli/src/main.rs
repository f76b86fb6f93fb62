//! tilelayer CLI - Command-line interface
//!
//! Adds one zoom level of fully transparent tiles to an MBTiles archive.
//!
//! ```text
//! tilelayer YOUR_FILE.mbtiles
//! ```

mod commands;
mod error;
mod runner;

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use commands::extend::ExtendArgs;
use tilelayer::tile::MAX_TILE_SIZE;

#[derive(Parser)]
#[command(name = "tilelayer", version)]
#[command(
    about = "Add a transparent zoom level to an MBTiles archive",
    long_about = "Adds one zoom level below the deepest level of an MBTiles archive, \
                  made entirely of fully transparent tiles. Map viewers that use the \
                  archive as an overlay then stop magnifying its last real level."
)]
struct Args {
    /// MBTiles archive to extend in place
    archive: Option<PathBuf>,

    /// Edge length of the generated tiles in pixels [default: 256]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_TILE_SIZE as i64))]
    tile_size: Option<u32>,

    /// Rewrite the maxzoom metadata entry to the new level
    #[arg(long)]
    update_metadata: bool,

    /// Show what would be inserted without writing to the archive
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging and mirror log output to stderr
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.tilelayer/config.ini
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let Some(archive) = args.archive else {
        println!("{}", Args::command().render_usage());
        println!();
        println!("Run 'tilelayer --help' for all options.");
        return;
    };

    let result = commands::extend::run(ExtendArgs {
        archive,
        tile_size: args.tile_size,
        update_metadata: args.update_metadata,
        dry_run: args.dry_run,
        debug: args.debug,
        config: args.config,
    });

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_archive_is_optional() {
        let args = Args::try_parse_from(["tilelayer"]).unwrap();
        assert!(args.archive.is_none());
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::try_parse_from([
            "tilelayer",
            "map.mbtiles",
            "--tile-size",
            "512",
            "--update-metadata",
            "--dry-run",
            "--debug",
            "--config",
            "custom.ini",
        ])
        .unwrap();

        assert_eq!(args.archive, Some(PathBuf::from("map.mbtiles")));
        assert_eq!(args.tile_size, Some(512));
        assert!(args.update_metadata);
        assert!(args.dry_run);
        assert!(args.debug);
        assert_eq!(args.config, Some(PathBuf::from("custom.ini")));
    }

    #[test]
    fn test_tile_size_out_of_range() {
        assert!(Args::try_parse_from(["tilelayer", "m.mbtiles", "--tile-size", "0"]).is_err());
        assert!(Args::try_parse_from(["tilelayer", "m.mbtiles", "--tile-size", "4097"]).is_err());
    }
}
