//! Command-line interface for circos-bands.
//!
//! ## Usage
//!
//! ```text
//! # Convert a band file; colors go to stderr, bands to stdout
//! circos-bands cytoBand.txt > bands.txt 2> colors.conf
//!
//! # Gzip-compressed input is decompressed on the fly
//! circos-bands cytoBand.txt.gz > bands.txt 2> colors.conf
//!
//! # Read from stdin
//! zcat cytoBand.txt.gz | circos-bands - > bands.txt 2> colors.conf
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::convert::convert_file;

#[derive(Parser)]
#[command(name = "circos-bands")]
#[command(version)]
#[command(about = "Convert cytogenetic band files into Circos karyotype definitions")]
#[command(
    long_about = "circos-bands reads a BED-like cytogenetic band file (chrom, chromStart, chromEnd, name, score, strand, thickStart, thickEnd, itemRgb) and writes Circos karyotype text.\n\nColor definitions (gx-karyotype-<k> = R,G,B) are written to stderr, one per unique color.\nBand lines are written to stdout, one per row with a valid R,G,B color."
)]
pub struct Cli {
    /// Band file to convert. Use '-' for stdin (and './-' for a file named '-'); '.gz' files are decompressed
    #[arg(required = true)]
    pub input: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the conversion
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, an output stream
/// cannot be written, or an accepted row lacks a required column.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let stderr = std::io::stderr();
    let stdout = std::io::stdout();
    let mut colors = stderr.lock();
    let mut bands = stdout.lock();

    let summary = convert_file(&cli.input, &mut colors, &mut bands)?;

    colors.flush()?;
    bands.flush()?;

    tracing::debug!(
        "Converted {}: {} rows, {} bands, {} colors, {} skipped",
        cli.input.display(),
        summary.rows,
        summary.bands,
        summary.colors,
        summary.skipped
    );

    Ok(())
}
