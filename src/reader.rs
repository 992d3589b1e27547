//! Line reader for OBJ and MTL streams
//!
//! Both formats are line oriented. [`LineReader`] turns any buffered stream
//! into trimmed lines paired with their 1-based line number, so the record
//! dispatchers never deal with separators or diagnostics bookkeeping.
//!
//! # Example
//!
//! ```
//! use objmtl::reader::LineReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = "v 0 0 0\r\n\n  f 1 2 3";
//! let lines: Vec<(usize, String)> =
//!     LineReader::new(data.as_bytes()).collect::<Result<_, _>>()?;
//!
//! assert_eq!(lines[0], (1, "v 0 0 0".to_string()));
//! assert_eq!(lines[1], (2, String::new()));
//! assert_eq!(lines[2], (3, "f 1 2 3".to_string()));
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::io::BufRead;

/// Characters stripped from both ends of every line
const TRIM_CHARS: &[char] = &['\r', '\n', '\t', ' '];

/// Default buffer capacity for a single line (256 bytes)
const LINE_BUFFER_CAPACITY: usize = 256;

/// Iterator over the trimmed lines of a stream
///
/// Blank lines are yielded as empty strings so line numbers stay aligned with
/// the source. The last line is yielded even when the stream does not end
/// with a newline. Any read error other than end-of-stream is returned once
/// and ends the iteration.
pub struct LineReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new line reader over a buffered stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(LINE_BUFFER_CAPACITY),
            line: 0,
            done: false,
        }
    }

    /// Line number of the most recently yielded line (0 before the first)
    pub fn line_number(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line += 1;
                // Non-UTF-8 bytes only ever appear in names and comments
                let text = String::from_utf8_lossy(&self.buf);
                Some(Ok((self.line, text.trim_matches(TRIM_CHARS).to_string())))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e.into()))
            }
        }
    }
}
