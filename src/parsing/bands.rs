use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::convert::ConvertError;
use crate::core::band::BandRow;

/// Open a band file for reading.
///
/// `-` reads stdin and paths ending in `.gz` are decompressed. Use `./-` for a
/// file literally named `-`.
///
/// # Errors
///
/// Returns `ConvertError::FileAccess` naming the path if it cannot be opened or
/// is a directory.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ConvertError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file_access = |source: io::Error| ConvertError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;

    // Opening a directory succeeds on Unix; reading it does not
    if file.metadata().map_err(file_access)?.is_dir() {
        return Err(file_access(io::Error::other("is a directory")));
    }

    let gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// A streaming band file reader.
///
/// Yields one [`BandRow`] per non-comment line together with its 1-based line
/// number. A line is a comment only if its very first character is `#`. Blank
/// lines come through as empty rows.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub struct BandReader<R: BufRead> {
    reader: R,
    path: Option<PathBuf>,
    line_number: usize,
    buffer: String,
    pending: VecDeque<String>,
}

impl BandReader<Box<dyn BufRead>> {
    /// Open a band file from a path (see [`open_input`]).
    ///
    /// Read failures are reported against the path.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::FileAccess` if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let mut reader = Self::new(open_input(path)?);
        reader.path = Some(path.to_path_buf());
        Ok(reader)
    }
}

impl<R: BufRead> BandReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            path: None,
            line_number: 0,
            buffer: String::with_capacity(256),
            pending: VecDeque::new(),
        }
    }

    /// Read the next band row, skipping comments.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Read` (or `ConvertError::Io` when the reader has no
    /// path) if reading fails or a line is not valid UTF-8.
    pub fn read_row(&mut self) -> Result<Option<(usize, BandRow)>, ConvertError> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                match Self::accept(&mut self.line_number, &line) {
                    Some(row) => return Ok(Some(row)),
                    None => continue,
                }
            }

            self.buffer.clear();
            let bytes_read = match self.reader.read_line(&mut self.buffer) {
                Ok(n) => n,
                Err(e) => return Err(self.read_error(e)),
            };
            if bytes_read == 0 {
                return Ok(None);
            }

            if self.buffer.contains('\r') {
                let text = self.buffer.replace("\r\n", "\n").replace('\r', "\n");
                self.pending
                    .extend(text.split_inclusive('\n').map(str::to_string));
                continue;
            }

            if let Some(row) = Self::accept(&mut self.line_number, &self.buffer) {
                return Ok(Some(row));
            }
        }
    }

    fn accept(line_number: &mut usize, line: &str) -> Option<(usize, BandRow)> {
        *line_number += 1;
        if line.starts_with('#') {
            None
        } else {
            Some((*line_number, BandRow::from_line(line)))
        }
    }

    fn read_error(&self, source: io::Error) -> ConvertError {
        match &self.path {
            Some(path) => ConvertError::Read {
                path: path.clone(),
                line: self.line_number + 1,
                source,
            },
            None => ConvertError::Io(source),
        }
    }

    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for BandReader<R> {
    type Item = Result<(usize, BandRow), ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}

impl<R: Read> BandReader<BufReader<R>> {
    /// Wrap any unbuffered source
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}
