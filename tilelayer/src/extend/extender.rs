//! Plans and applies a single zoom level extension.

use std::time::Instant;

use tracing::{debug, info, instrument};

use super::error::ExtendError;
use super::report::ExtendReport;
use crate::archive::TileArchive;
use crate::coord::{TileCoord, CHILDREN_PER_TILE, MAX_ZOOM};
use crate::tile::BlankTile;

/// Inserted-tile interval between progress log lines.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Work computed from the archive before any write happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendPlan {
    source_zoom: u8,
    target_zoom: u8,
    parents: Vec<TileCoord>,
}

impl ExtendPlan {
    /// Deepest zoom level currently in the archive.
    pub fn source_zoom(&self) -> u8 {
        self.source_zoom
    }

    /// Zoom level that will be generated.
    pub fn target_zoom(&self) -> u8 {
        self.target_zoom
    }

    /// Tiles at the source zoom level.
    pub fn parents(&self) -> &[TileCoord] {
        &self.parents
    }

    /// Number of tiles the plan will insert.
    pub fn child_count(&self) -> u64 {
        (self.parents.len() * CHILDREN_PER_TILE) as u64
    }
}

/// Adds one blank zoom level to a tile archive.
#[derive(Debug, Clone)]
pub struct ZoomExtender {
    blank: BlankTile,
    update_metadata: bool,
    dry_run: bool,
}

impl ZoomExtender {
    /// Create an extender that writes `blank` into every new tile.
    pub fn new(blank: BlankTile) -> Self {
        Self {
            blank,
            update_metadata: false,
            dry_run: false,
        }
    }

    /// Also rewrite the `maxzoom` metadata entry to the new level.
    pub fn with_update_metadata(mut self, update_metadata: bool) -> Self {
        self.update_metadata = update_metadata;
        self
    }

    /// Report what would be inserted without writing anything.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Payload shared by every inserted tile.
    pub fn blank(&self) -> &BlankTile {
        &self.blank
    }

    /// Read the maximum zoom level and the tiles stored there.
    ///
    /// # Errors
    ///
    /// - [`ExtendError::EmptyArchive`] if the archive holds no tiles
    /// - [`ExtendError::ZoomOverflow`] if the maximum zoom has no child level
    pub fn plan(&self, archive: &TileArchive) -> Result<ExtendPlan, ExtendError> {
        let source_zoom = archive.max_zoom()?.ok_or(ExtendError::EmptyArchive)?;
        if source_zoom >= MAX_ZOOM {
            return Err(ExtendError::ZoomOverflow(source_zoom));
        }

        let parents = archive.tiles_at(source_zoom)?;
        info!(
            source_zoom,
            tiles = parents.len(),
            "Detected maximum zoom level"
        );

        Ok(ExtendPlan {
            source_zoom,
            target_zoom: source_zoom + 1,
            parents,
        })
    }

    /// Insert the children described by `plan` and commit.
    ///
    /// Nothing is persisted unless every insert succeeds.
    #[instrument(skip_all, fields(target_zoom = plan.target_zoom))]
    pub fn apply(
        &self,
        archive: &mut TileArchive,
        plan: &ExtendPlan,
    ) -> Result<ExtendReport, ExtendError> {
        let mut report = ExtendReport {
            source_zoom: plan.source_zoom,
            target_zoom: plan.target_zoom,
            source_tiles: plan.parents.len() as u64,
            inserted: 0,
            payload_bytes: self.blank.len(),
            metadata_updated: false,
            dry_run: self.dry_run,
        };

        if self.dry_run {
            report.inserted = plan.child_count();
            info!(tiles = report.inserted, "Dry run, archive left unchanged");
            return Ok(report);
        }

        let start = Instant::now();
        let payload = self.blank.bytes();
        let tx = archive.transaction()?;

        for parent in &plan.parents {
            for child in parent.children().map_err(|_| ExtendError::ZoomOverflow(parent.zoom))? {
                tx.insert_tile(&child, payload)?;
                report.inserted += 1;

                if report.inserted % PROGRESS_INTERVAL == 0 {
                    debug!(
                        inserted = report.inserted,
                        total = plan.child_count(),
                        "Inserting transparent tiles"
                    );
                }
            }
        }

        if self.update_metadata {
            report.metadata_updated =
                tx.set_metadata("maxzoom", &plan.target_zoom.to_string())?;
        }

        tx.commit()?;

        info!(
            inserted = report.inserted,
            bytes = report.total_bytes(),
            metadata_updated = report.metadata_updated,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Committed new zoom level"
        );

        Ok(report)
    }

    /// Plan and apply in one step.
    pub fn extend(&self, archive: &mut TileArchive) -> Result<ExtendReport, ExtendError> {
        let plan = self.plan(archive)?;
        self.apply(archive, &plan)
    }
}
