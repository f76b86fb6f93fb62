//! MBTiles table layout.

use rusqlite::Connection;

/// Creates the `metadata` and `tiles` tables of an empty MBTiles archive.
pub(super) fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE metadata (
          name TEXT NOT NULL,
          value TEXT NOT NULL,
          UNIQUE(name)
        )",
        (),
    )?;

    conn.execute(
        "CREATE TABLE tiles (
          zoom_level INTEGER NOT NULL,
          tile_column INTEGER NOT NULL,
          tile_row INTEGER NOT NULL,
          tile_data BLOB NOT NULL,
          PRIMARY KEY (zoom_level, tile_column, tile_row)
        )",
        (),
    )?;

    Ok(())
}

/// Returns true if the archive carries a `metadata` table.
///
/// Some producers only write `tiles`.
pub(super) fn has_metadata_table(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'metadata'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub(super) const SELECT_MAX_ZOOM: &str = "SELECT MAX(zoom_level) FROM tiles";

pub(super) const SELECT_TILES_AT_ZOOM: &str = "SELECT tile_column, tile_row FROM tiles \
     WHERE zoom_level = ?1 ORDER BY tile_column, tile_row";

pub(super) const COUNT_TILES_AT_ZOOM: &str = "SELECT COUNT(*) FROM tiles WHERE zoom_level = ?1";

pub(super) const SELECT_ZOOM_LEVELS: &str =
    "SELECT zoom_level, COUNT(*) FROM tiles GROUP BY zoom_level ORDER BY zoom_level";

pub(super) const SELECT_TILE_DATA: &str = "SELECT tile_data FROM tiles \
     WHERE zoom_level = ?1 AND tile_column = ?2 AND tile_row = ?3";

pub(super) const INSERT_TILE: &str =
    "INSERT INTO tiles (zoom_level, tile_column, tile_row, tile_data) VALUES (?1, ?2, ?3, ?4)";

pub(super) const SELECT_METADATA: &str = "SELECT value FROM metadata WHERE name = ?1";

pub(super) const UPDATE_METADATA: &str = "UPDATE metadata SET value = ?2 WHERE name = ?1";

pub(super) const INSERT_METADATA: &str = "INSERT INTO metadata (name, value) VALUES (?1, ?2)";
