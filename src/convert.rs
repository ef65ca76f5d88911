//! Conversion of band rows into Circos color and band definitions.
//!
//! Each accepted row resolves its `itemRgb` against a [`ColorTable`]. A color seen
//! for the first time is announced on the color stream, then the row is written
//! to the band stream under the color's generated name. Rows whose color is
//! missing or invalid are dropped without output.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::band::{BandLine, BandRow, Column};
use crate::core::color::{ColorResolution, ColorTable};
use crate::parsing::bands::BandReader;

/// Color assumed for rows without an `itemRgb` column. It is not an `R,G,B`
/// triplet, so such rows never validate.
pub const DEFAULT_COLOR: &str = "gpos50";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to open band file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read band file '{}' at line {line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row on line {line}: missing required column '{field}'")]
    MalformedRow { line: usize, field: Column },
}

/// Counts gathered over one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Non-comment rows read
    pub rows: usize,
    /// Band lines written
    pub bands: usize,
    /// Color definitions written
    pub colors: usize,
    /// Rows dropped for a missing or invalid color
    pub skipped: usize,
}

/// Writes color definitions and band lines for a stream of rows.
///
/// The converter owns the color table for the run, so names are only unique
/// within a single converter.
pub struct BandConverter<C: Write, B: Write> {
    colors: C,
    bands: B,
    table: ColorTable,
    summary: ConversionSummary,
}

impl<C: Write, B: Write> BandConverter<C, B> {
    pub fn new(colors: C, bands: B) -> Self {
        Self {
            colors,
            bands,
            table: ColorTable::new(),
            summary: ConversionSummary::default(),
        }
    }

    /// Convert a single row.
    ///
    /// Returns `Ok(false)` if the row was dropped for its color.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Io` if a stream cannot be written, or
    /// `ConvertError::MalformedRow` if the row lacks a band column. In the latter
    /// case a new color has already been recorded and announced.
    pub fn process_row(&mut self, line: usize, row: &BandRow) -> Result<bool, ConvertError> {
        self.summary.rows += 1;

        let color = row.get(Column::ItemRgb).unwrap_or(DEFAULT_COLOR);

        let resolution = match self.table.resolve(color) {
            Ok(resolution) => resolution,
            Err(e) => {
                debug!("Skipping line {line}: color '{color}': {e}");
                self.summary.skipped += 1;
                return Ok(false);
            }
        };

        if let ColorResolution::New(name) = resolution {
            writeln!(self.colors, "{name} = {color}")?;
            self.summary.colors += 1;
        }

        let band = BandLine::from_row(row, resolution.name(), line)?;
        writeln!(self.bands, "{band}")?;
        self.summary.bands += 1;

        Ok(true)
    }

    /// Convert every row from a reader, stopping at the first fatal error.
    ///
    /// # Errors
    ///
    /// Returns the first `ConvertError` raised while reading or converting.
    pub fn convert<R: BufRead>(
        &mut self,
        reader: BandReader<R>,
    ) -> Result<ConversionSummary, ConvertError> {
        for entry in reader {
            let (line, row) = entry?;
            self.process_row(line, &row)?;
        }
        Ok(self.summary)
    }

    #[must_use]
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    #[must_use]
    pub fn summary(&self) -> ConversionSummary {
        self.summary
    }

    /// Recover the output streams
    pub fn into_inner(self) -> (C, B) {
        (self.colors, self.bands)
    }
}

/// Convert a band file, writing colors and bands to the given streams.
///
/// # Errors
///
/// Returns `ConvertError::FileAccess` if the file cannot be opened (nothing is
/// written in that case), or any error from [`BandConverter::convert`].
pub fn convert_file<C: Write, B: Write>(
    path: &Path,
    colors: C,
    bands: B,
) -> Result<ConversionSummary, ConvertError> {
    let reader = BandReader::from_path(path)?;
    BandConverter::new(colors, bands).convert(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<ConversionSummary, ConvertError>, String, String) {
        let mut colors = Vec::new();
        let mut bands = Vec::new();
        let result =
            BandConverter::new(&mut colors, &mut bands).convert(BandReader::new(input.as_bytes()));
        (
            result,
            String::from_utf8(colors).unwrap(),
            String::from_utf8(bands).unwrap(),
        )
    }

    #[test]
    fn test_repeated_colors_reuse_names() {
        let input = "\
hs1 2200000 5100000 p36.32 0 . 0 0 255,0,0
hs1 5100000 6900000 p36.31 0 . 0 0 255,0,0
hs1 6900000 8800000 p36.23 0 . 0 0 0,255,0
";
        let (result, colors, bands) = run(input);
        let summary = result.unwrap();

        assert_eq!(colors, "gx-karyotype-0 = 255,0,0\ngx-karyotype-1 = 0,255,0\n");
        assert_eq!(
            bands,
            "band hs1 p36.32 p36.32 2200000 5100000 gx-karyotype-0\n\
             band hs1 p36.31 p36.31 5100000 6900000 gx-karyotype-0\n\
             band hs1 p36.23 p36.23 6900000 8800000 gx-karyotype-1\n"
        );
        assert_eq!(
            summary,
            ConversionSummary {
                rows: 3,
                bands: 3,
                colors: 2,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_invalid_colors_drop_rows() {
        let input = "\
chr1 0 10 p1 0 . 0 10 red
chr1 10 20 p2 0 . 0 20 255,0
chr1 20 30 p3 0 . 0 30 1,2,3,4
chr1 30 40 p4 0 . 0 40 a,b,c
chr1 40 50 p5 0 . 0 50 10,20,30
";
        let (result, colors, bands) = run(input);
        let summary = result.unwrap();

        assert_eq!(colors, "gx-karyotype-0 = 10,20,30\n");
        assert_eq!(bands, "band chr1 p5 p5 40 50 gx-karyotype-0\n");
        assert_eq!(summary.skipped, 4);
    }

    #[test]
    fn test_missing_color_always_dropped() {
        // Without itemRgb the gpos50 fallback never validates
        let input = "chr1 0 10 p1 0 . 0 10\nchr1 0 10 p1\nchr1 0 10 p1 0 . 0 10\n";
        let (result, colors, bands) = run(input);

        assert_eq!(result.unwrap().skipped, 3);
        assert!(colors.is_empty());
        assert!(bands.is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines_produce_nothing() {
        let input = "#chrom\tchromStart\tchromEnd\tname\n\n# 1,2,3\n";
        let (result, colors, bands) = run(input);

        let summary = result.unwrap();
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.skipped, 1);
        assert!(colors.is_empty());
        assert!(bands.is_empty());
    }

    #[test]
    fn test_malformed_row_announces_color_then_fails() {
        let mut colors = Vec::new();
        let mut bands = Vec::new();
        let mut converter = BandConverter::new(&mut colors, &mut bands);

        let mut row = BandRow::default();
        row.set(Column::Chrom, "chr1");
        row.set(Column::ItemRgb, "1,2,3");

        let err = converter.process_row(4, &row).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedRow {
                line: 4,
                field: Column::Name
            }
        ));
        assert_eq!(converter.table().get("1,2,3"), Some("gx-karyotype-0"));
        drop(converter);

        assert_eq!(String::from_utf8(colors).unwrap(), "gx-karyotype-0 = 1,2,3\n");
        assert!(bands.is_empty());
    }

    #[test]
    fn test_row_by_row_keeps_running_summary() {
        let mut converter = BandConverter::new(Vec::new(), Vec::new());

        let first = BandRow::from_line("chr1 0 10 p1 0 . 0 10 9,9,9");
        let dropped = BandRow::from_line("chr1 10 20 p2 0 . 10 20 gneg");
        let repeat = BandRow::from_line("chr1 20 30 p3 0 . 20 30 9,9,9");

        assert!(converter.process_row(1, &first).unwrap());
        assert!(!converter.process_row(2, &dropped).unwrap());
        assert!(converter.process_row(3, &repeat).unwrap());

        assert_eq!(
            converter.summary(),
            ConversionSummary {
                rows: 3,
                bands: 2,
                colors: 1,
                skipped: 1
            }
        );

        let (colors, bands) = converter.into_inner();
        assert_eq!(String::from_utf8(colors).unwrap(), "gx-karyotype-0 = 9,9,9\n");
        assert_eq!(
            String::from_utf8(bands).unwrap(),
            "band chr1 p1 p1 0 10 gx-karyotype-0\nband chr1 p3 p3 20 30 gx-karyotype-0\n"
        );
    }

    #[test]
    fn test_convert_directory_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut colors = Vec::new();
        let mut bands = Vec::new();

        let err = convert_file(dir.path(), &mut colors, &mut bands).unwrap_err();
        assert!(matches!(err, ConvertError::FileAccess { .. }));
        assert!(colors.is_empty());
        assert!(bands.is_empty());
    }

    #[test]
    fn test_stops_at_first_fatal_error() {
        let input: &[u8] = b"chr1 0 10 p1 0 . 0 10 1,2,3\nchr1 \xff\nchr1 10 20 p2 0 . 0 20 4,5,6\n";
        let mut colors = Vec::new();
        let mut bands = Vec::new();
        let result = BandConverter::new(&mut colors, &mut bands).convert(BandReader::new(input));

        assert!(matches!(result, Err(ConvertError::Io(_))));
        assert_eq!(String::from_utf8(colors).unwrap(), "gx-karyotype-0 = 1,2,3\n");
        assert_eq!(
            String::from_utf8(bands).unwrap(),
            "band chr1 p1 p1 0 10 gx-karyotype-0\n"
        );
    }

    #[test]
    fn test_convert_missing_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.bed");
        let mut colors = Vec::new();
        let mut bands = Vec::new();

        let err = convert_file(&path, &mut colors, &mut bands).unwrap_err();
        assert!(matches!(err, ConvertError::FileAccess { .. }));
        assert!(colors.is_empty());
        assert!(bands.is_empty());
    }
}
