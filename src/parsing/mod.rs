//! Parsers for cytogenetic band files.
//!
//! Band files are whitespace-delimited with the BED9 column layout:
//!
//! | Column | Description | Used |
//! |--------|-------------|------|
//! | chrom | Chromosome name | Yes |
//! | chromStart | Band start (0-based) | Yes |
//! | chromEnd | Band end (exclusive) | Yes |
//! | name | Band name, e.g. `p36.33` | Yes |
//! | score | Score | No |
//! | strand | Strand | No |
//! | thickStart | Thick start | No |
//! | thickEnd | Thick end | No |
//! | itemRgb | `R,G,B` color | Yes |
//!
//! Lines starting with `#` are comments.

pub mod bands;
