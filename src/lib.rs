//! # circos-bands
//!
//! Convert cytogenetic band annotation files into Circos karyotype definitions.
//!
//! Band files (such as UCSC `cytoBand` tracks exported as BED9) carry one band per
//! row with an `itemRgb` color. Circos expects colors to be declared once by name
//! and then referenced from `band` lines, so conversion produces two streams:
//!
//! - **Color stream**: one `gx-karyotype-<k> = R,G,B` line per unique color
//! - **Band stream**: one `band <chrom> <name> <name> <start> <end> <color>` line per row
//!
//! Rows whose color is missing or is not an `R,G,B` integer triplet are dropped.
//! Color names are deliberately unsupported.
//!
//! ## Example
//!
//! ```rust
//! use circos_bands::convert::BandConverter;
//! use circos_bands::parsing::bands::BandReader;
//!
//! let input = "chr1\t0\t2300000\tp36.33\t0\t.\t0\t2300000\t255,255,255\n";
//!
//! let mut colors = Vec::new();
//! let mut bands = Vec::new();
//! let mut converter = BandConverter::new(&mut colors, &mut bands);
//! converter.convert(BandReader::new(input.as_bytes())).unwrap();
//!
//! assert_eq!(String::from_utf8(colors).unwrap(), "gx-karyotype-0 = 255,255,255\n");
//! assert_eq!(
//!     String::from_utf8(bands).unwrap(),
//!     "band chr1 p36.33 p36.33 0 2300000 gx-karyotype-0\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Band rows, band lines and the color table
//! - [`parsing`]: Streaming reader for band files
//! - [`convert`]: The conversion loop and its errors
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Color validation helpers

pub mod cli;
pub mod convert;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use convert::{convert_file, BandConverter, ConversionSummary, ConvertError};
pub use core::band::{BandLine, BandRow, Column};
pub use core::color::{ColorResolution, ColorTable};
pub use parsing::bands::BandReader;
