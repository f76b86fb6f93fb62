//! Outcome of a zoom extension run.

use std::fmt;

/// Summary of what [`super::ZoomExtender`] did (or would do, for a dry run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendReport {
    /// Deepest zoom level found in the archive
    pub source_zoom: u8,
    /// Newly generated zoom level
    pub target_zoom: u8,
    /// Tiles at `source_zoom`
    pub source_tiles: u64,
    /// Tiles written at `target_zoom`
    pub inserted: u64,
    /// Size of the shared blank payload
    pub payload_bytes: usize,
    /// Whether `maxzoom` metadata was rewritten
    pub metadata_updated: bool,
    /// Nothing was written
    pub dry_run: bool,
}

impl ExtendReport {
    /// Total blob bytes written across all inserted rows.
    pub fn total_bytes(&self) -> u64 {
        self.inserted * self.payload_bytes as u64
    }
}

impl fmt::Display for ExtendReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would insert" } else { "Inserted" };
        write!(
            f,
            "{} {} transparent tiles at zoom level {} ({} tiles at zoom level {})",
            verb, self.inserted, self.target_zoom, self.source_tiles, self.source_zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(dry_run: bool) -> ExtendReport {
        ExtendReport {
            source_zoom: 5,
            target_zoom: 6,
            source_tiles: 2,
            inserted: 8,
            payload_bytes: 100,
            metadata_updated: false,
            dry_run,
        }
    }

    #[test]
    fn test_total_bytes() {
        assert_eq!(report(false).total_bytes(), 800);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            report(false).to_string(),
            "Inserted 8 transparent tiles at zoom level 6 (2 tiles at zoom level 5)"
        );
        assert!(report(true).to_string().starts_with("Would insert 8"));
    }
}
