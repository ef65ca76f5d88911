use std::fmt;

use crate::convert::ConvertError;

/// Columns of a BED9 band row, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Chrom,
    ChromStart,
    ChromEnd,
    Name,
    Score,
    Strand,
    ThickStart,
    ThickEnd,
    ItemRgb,
}

impl Column {
    /// All columns in positional order
    pub const ALL: [Column; 9] = [
        Column::Chrom,
        Column::ChromStart,
        Column::ChromEnd,
        Column::Name,
        Column::Score,
        Column::Strand,
        Column::ThickStart,
        Column::ThickEnd,
        Column::ItemRgb,
    ];

    /// Zero-based position of the column within a row
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column name as it appears in BED documentation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Column::Chrom => "chrom",
            Column::ChromStart => "chromStart",
            Column::ChromEnd => "chromEnd",
            Column::Name => "name",
            Column::Score => "score",
            Column::Strand => "strand",
            Column::ThickStart => "thickStart",
            Column::ThickEnd => "thickEnd",
            Column::ItemRgb => "itemRgb",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed line of a band file.
///
/// Lines are paired with [`Column::ALL`] by position. Short rows leave their
/// trailing columns empty and tokens past the ninth column are dropped. Rows
/// can also be filled column by column with [`BandRow::set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BandRow {
    fields: [Option<String>; 9],
}

impl BandRow {
    /// Build a row by zipping whitespace-separated tokens against the column sequence
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        let mut row = Self::default();
        for (slot, token) in row.fields.iter_mut().zip(line.split_whitespace()) {
            *slot = Some(token.to_string());
        }
        row
    }

    /// Set a column, replacing any existing value
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.fields[column.index()] = Some(value.into());
    }

    /// Value of a column, if the row is long enough to carry it
    #[must_use]
    pub fn get(&self, column: Column) -> Option<&str> {
        self.fields[column.index()].as_deref()
    }

    /// Value of a column that must be present
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::MalformedRow` if the column is absent.
    pub fn require(&self, column: Column, line: usize) -> Result<&str, ConvertError> {
        self.get(column)
            .ok_or(ConvertError::MalformedRow { line, field: column })
    }

    /// Number of columns present
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.iter().filter(|f| f.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }
}

/// A Circos `band` record.
///
/// Rendered as `band <chrom> <name> <name> <start> <end> <color>`; the name fills
/// both the band ID and the label field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLine<'a> {
    pub chrom: &'a str,
    pub name: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub color: &'a str,
}

impl<'a> BandLine<'a> {
    /// Pull the required columns out of a row.
    ///
    /// Columns are checked in the order name, chrom, chromStart, chromEnd and the
    /// first missing one is reported.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::MalformedRow` naming the first absent column.
    pub fn from_row(row: &'a BandRow, color: &'a str, line: usize) -> Result<Self, ConvertError> {
        let name = row.require(Column::Name, line)?;
        let chrom = row.require(Column::Chrom, line)?;
        let start = row.require(Column::ChromStart, line)?;
        let end = row.require(Column::ChromEnd, line)?;

        Ok(Self {
            chrom,
            name,
            start,
            end,
            color,
        })
    }
}

impl fmt::Display for BandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "band {} {} {} {} {} {}",
            self.chrom, self.name, self.name, self.start, self.end, self.color
        )
    }
}
