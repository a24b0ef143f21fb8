//! Decoding line reader with iterator interface
//!
//! Provides a streaming iterator over the decoded lines of a Zengin file.
//!
//! # Design
//!
//! On construction the reader pulls up to [`DETECTION_SAMPLE_SIZE`] bytes to
//! settle the encoding, then chains those bytes back in front of the rest of
//! the input so nothing is lost. Lines are split on LF at the byte level
//! (safe for Shift-JIS, whose trail bytes never equal 0x0A), an optional CR
//! is stripped, and each line is decoded on its own.
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()`
//! - A line with bytes that are invalid in the chosen encoding is yielded as
//!   an `Encoding` error; there is no lossy replacement
//! - Read failures are yielded as `Io` errors
//!
//! ```no_run
//! use zengin_parser::io::{EncodingChoice, ZenginReader};
//! use std::path::Path;
//!
//! let reader = ZenginReader::open(Path::new("zengin.txt"), EncodingChoice::Auto).unwrap();
//! for line in reader {
//!     println!("{}", line.unwrap());
//! }
//! ```

use crate::io::encoding::{EncodingChoice, DETECTION_SAMPLE_SIZE};
use crate::types::{Encoding, ZenginError};
use std::fs::File;
use std::io::{BufRead, BufReader, Chain, Cursor, Read};
use std::path::Path;
use tracing::info;

/// Streaming reader yielding decoded lines
#[derive(Debug)]
pub struct ZenginReader<R> {
    reader: BufReader<Chain<Cursor<Vec<u8>>, R>>,
    encoding: Encoding,
    line_num: usize,
}

impl ZenginReader<File> {
    /// Open a file and prepare it for line-by-line decoding
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be opened or its first
    /// bytes cannot be read.
    pub fn open(path: &Path, choice: EncodingChoice) -> Result<Self, ZenginError> {
        let file = File::open(path).map_err(|e| ZenginError::Io {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;
        Self::new(file, choice)
    }
}

impl<R: Read> ZenginReader<R> {
    /// Wrap any byte source, detecting its encoding when `choice` is `Auto`
    pub fn new(mut source: R, choice: EncodingChoice) -> Result<Self, ZenginError> {
        let mut sample = Vec::with_capacity(DETECTION_SAMPLE_SIZE);
        (&mut source)
            .take(DETECTION_SAMPLE_SIZE as u64)
            .read_to_end(&mut sample)?;

        let encoding = choice.resolve(&sample);
        info!(%encoding, ?choice, "input encoding");

        Ok(Self {
            reader: BufReader::with_capacity(8 * 1024, Cursor::new(sample).chain(source)),
            encoding,
            line_num: 0,
        })
    }

    /// The encoding lines are decoded with
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn decode(&self, raw: &[u8]) -> Result<String, ZenginError> {
        self.encoding
            .codec()
            .decode_without_bom_handling_and_without_replacement(raw)
            .map(|text| text.into_owned())
            .ok_or(ZenginError::Encoding {
                line: self.line_num,
                encoding: self.encoding,
            })
    }
}

impl<R: Read> Iterator for ZenginReader<R> {
    type Item = Result<String, ZenginError>;

    /// Read and decode the next physical line
    ///
    /// # Returns
    ///
    /// * `Some(Ok(String))` - Decoded line without its terminator
    /// * `Some(Err(ZenginError))` - Read or decode failure
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => None,
            Ok(_) => {
                self.line_num += 1;
                if raw.last() == Some(&b'\n') {
                    raw.pop();
                }
                if raw.last() == Some(&b'\r') {
                    raw.pop();
                }
                Some(self.decode(&raw))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
