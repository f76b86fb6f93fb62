//! MBTiles tile archive access.
//!
//! An archive is a SQLite file with a `tiles` table keyed by
//! `(zoom_level, tile_column, tile_row)` and holding one `tile_data` blob per
//! row. [`TileArchive`] wraps a single read/write connection for the lifetime
//! of a run; writes go through an [`ArchiveTransaction`] so that nothing is
//! persisted until [`ArchiveTransaction::commit`] succeeds.
//!
//! # Example
//!
//! ```no_run
//! use tilelayer::archive::TileArchive;
//!
//! let archive = TileArchive::open("overlay.mbtiles")?;
//! if let Some(zoom) = archive.max_zoom()? {
//!     println!("{} tiles at zoom {}", archive.count_at(zoom)?, zoom);
//! }
//! # Ok::<(), tilelayer::archive::ArchiveError>(())
//! ```

mod error;
mod schema;

pub use error::ArchiveError;

use std::path::{Path, PathBuf};

use rusqlite::{
    params, Connection, ErrorCode, OpenFlags, OptionalExtension, Transaction, TransactionBehavior,
};
use tracing::debug;

use crate::coord::TileCoord;

/// Open MBTiles archive.
pub struct TileArchive {
    conn: Connection,
    path: PathBuf,
}

impl TileArchive {
    /// Open an existing archive for reading and writing.
    ///
    /// The file is never created: a missing path yields
    /// [`ArchiveError::NotFound`] without touching SQLite.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ArchiveError::NotFound(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "Opened tile archive");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Create a new archive with empty `metadata` and `tiles` tables.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        schema::create_schema(&conn)?;
        debug!(path = %path.display(), "Created tile archive");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Path the archive was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Highest zoom level holding at least one tile, or `None` if `tiles` is empty.
    pub fn max_zoom(&self) -> Result<Option<u8>, ArchiveError> {
        let max: Option<i64> = self
            .conn
            .query_row(schema::SELECT_MAX_ZOOM, [], |row| row.get(0))?;
        max.map(zoom_from_sql).transpose()
    }

    /// All tile addresses stored at `zoom`, ordered by column then row.
    pub fn tiles_at(&self, zoom: u8) -> Result<Vec<TileCoord>, ArchiveError> {
        let mut stmt = self.conn.prepare(schema::SELECT_TILES_AT_ZOOM)?;
        let rows = stmt.query_map(params![zoom], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut tiles = Vec::new();
        for row in rows {
            let (col, row) = row?;
            tiles.push(tile_from_sql(zoom, col, row)?);
        }
        Ok(tiles)
    }

    /// Number of tiles stored at `zoom`.
    pub fn count_at(&self, zoom: u8) -> Result<u64, ArchiveError> {
        let count: i64 =
            self.conn
                .query_row(schema::COUNT_TILES_AT_ZOOM, params![zoom], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Tile count per zoom level, lowest zoom first.
    pub fn zoom_levels(&self) -> Result<Vec<(u8, u64)>, ArchiveError> {
        let mut stmt = self.conn.prepare(schema::SELECT_ZOOM_LEVELS)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut levels = Vec::new();
        for row in rows {
            let (zoom, count) = row?;
            levels.push((zoom_from_sql(zoom)?, count as u64));
        }
        Ok(levels)
    }

    /// Payload of a single tile.
    pub fn tile_data(&self, coord: &TileCoord) -> Result<Option<Vec<u8>>, ArchiveError> {
        let data = self
            .conn
            .query_row(
                schema::SELECT_TILE_DATA,
                params![coord.zoom, coord.col, coord.row],
                |row| row.get(0),
            )
            .optional()?;
        Ok(data)
    }

    /// Insert a single tile outside any explicit transaction.
    pub fn insert_tile(&self, coord: &TileCoord, data: &[u8]) -> Result<(), ArchiveError> {
        insert_tile(&self.conn, coord, data)
    }

    /// Value of a `metadata` entry.
    ///
    /// Returns `None` if the entry or the whole `metadata` table is missing.
    pub fn metadata(&self, name: &str) -> Result<Option<String>, ArchiveError> {
        if !schema::has_metadata_table(&self.conn)? {
            return Ok(None);
        }
        let value = self
            .conn
            .query_row(schema::SELECT_METADATA, params![name], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Set a `metadata` entry. See [`ArchiveTransaction::set_metadata`].
    pub fn set_metadata(&self, name: &str, value: &str) -> Result<bool, ArchiveError> {
        set_metadata(&self.conn, name, value)
    }

    /// Begin a write transaction.
    ///
    /// The write lock is taken immediately. Dropping the returned value
    /// without calling [`ArchiveTransaction::commit`] rolls every change back.
    pub fn transaction(&mut self) -> Result<ArchiveTransaction<'_>, ArchiveError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        Ok(ArchiveTransaction { tx })
    }
}

/// Pending writes against a [`TileArchive`].
pub struct ArchiveTransaction<'a> {
    tx: Transaction<'a>,
}

impl ArchiveTransaction<'_> {
    /// Insert a tile.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::TileExists`] if the key is already taken.
    pub fn insert_tile(&self, coord: &TileCoord, data: &[u8]) -> Result<(), ArchiveError> {
        insert_tile(&self.tx, coord, data)
    }

    /// Set a `metadata` entry, replacing any previous value.
    ///
    /// Returns `false` without writing when the archive has no `metadata` table.
    pub fn set_metadata(&self, name: &str, value: &str) -> Result<bool, ArchiveError> {
        set_metadata(&self.tx, name, value)
    }

    /// Persist all changes.
    pub fn commit(self) -> Result<(), ArchiveError> {
        self.tx.commit()?;
        Ok(())
    }
}

fn insert_tile(conn: &Connection, coord: &TileCoord, data: &[u8]) -> Result<(), ArchiveError> {
    let mut stmt = conn.prepare_cached(schema::INSERT_TILE)?;
    match stmt.execute(params![coord.zoom, coord.col, coord.row, data]) {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            Err(ArchiveError::TileExists(*coord))
        }
        Err(e) => Err(e.into()),
    }
}

fn set_metadata(conn: &Connection, name: &str, value: &str) -> Result<bool, ArchiveError> {
    if !schema::has_metadata_table(conn)? {
        return Ok(false);
    }
    // metadata.name is not UNIQUE in every producer's schema, so no upsert
    let updated = conn.execute(schema::UPDATE_METADATA, params![name, value])?;
    if updated == 0 {
        conn.execute(schema::INSERT_METADATA, params![name, value])?;
    }
    Ok(true)
}

fn zoom_from_sql(zoom: i64) -> Result<u8, ArchiveError> {
    u8::try_from(zoom).map_err(|_| ArchiveError::InvalidZoom(zoom))
}

fn tile_from_sql(zoom: u8, col: i64, row: i64) -> Result<TileCoord, ArchiveError> {
    let invalid = || ArchiveError::InvalidTile { zoom, col, row };
    let c = u32::try_from(col).map_err(|_| invalid())?;
    let r = u32::try_from(row).map_err(|_| invalid())?;
    TileCoord::new(zoom, c, r).map_err(|_| invalid())
}
