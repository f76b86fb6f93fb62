//! Extend command - add one transparent zoom level to an archive.

use std::path::PathBuf;

use tilelayer::archive::TileArchive;
use tilelayer::extend::ZoomExtender;
use tilelayer::tile::BlankTile;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the extend command.
pub struct ExtendArgs {
    pub archive: PathBuf,
    pub tile_size: Option<u32>,
    pub update_metadata: bool,
    pub dry_run: bool,
    pub debug: bool,
    pub config: Option<PathBuf>,
}

/// Run the extend command.
pub fn run(args: ExtendArgs) -> Result<(), CliError> {
    // Checked before config and logging so a mistyped path touches nothing
    if !args.archive.exists() {
        return Err(CliError::FileNotFound(args.archive));
    }

    let runner = CliRunner::new(args.config.as_deref(), args.debug)?;
    runner.log_startup("extend");
    let config = runner.config();

    // CLI takes precedence, then config
    let tile_size = args.tile_size.unwrap_or(config.tile.size);
    let update_metadata = args.update_metadata || config.archive.update_metadata;

    let blank = BlankTile::encode(tile_size, config.tile.fill)?;
    info!(
        size = tile_size,
        bytes = blank.len(),
        "Encoded transparent tile"
    );

    let mut archive = TileArchive::open(&args.archive)?;
    info!(path = %archive.path().display(), "Opened archive");

    let extender = ZoomExtender::new(blank)
        .with_update_metadata(update_metadata)
        .with_dry_run(args.dry_run);

    let plan = extender.plan(&archive)?;
    println!("Maximum zoom level {}", plan.source_zoom());

    if args.dry_run {
        println!("Dry run: the archive will not be modified");
    } else {
        println!("Inserting transparent tiles");
    }

    let report = extender.apply(&mut archive, &plan)?;
    println!("{}", report);
    if report.metadata_updated {
        println!("Updated metadata: maxzoom = {}", report.target_zoom);
    }

    println!("Done");
    Ok(())
}
