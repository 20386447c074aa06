use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::Config;
use crate::error::Result;

/// Reads delimiter-separated lines, reusing one scratch buffer
pub struct LineReader<R> {
    reader: R,
    delimiter: u8,
    scratch: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, delimiter: u8) -> Self {
        Self {
            reader,
            delimiter,
            scratch: Vec::new(),
        }
    }

    /// Next line without its delimiter, or None at EOF
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.scratch.clear();
        if self.reader.read_until(self.delimiter, &mut self.scratch)? == 0 {
            return Ok(None);
        }

        if self.scratch.last() == Some(&self.delimiter) {
            self.scratch.pop();
        }

        Ok(Some(&self.scratch))
    }
}

/// Append every line of `reader` to `lines`
pub fn read_lines_into<R: BufRead>(
    reader: R,
    delimiter: u8,
    lines: &mut Vec<Vec<u8>>,
) -> io::Result<()> {
    let mut reader = LineReader::new(reader, delimiter);
    while let Some(line) = reader.next_line()? {
        lines.push(line.to_vec());
    }
    Ok(())
}

/// Read all configured inputs in order; no files means stdin, as does "-"
pub fn read_inputs(config: &Config) -> Result<Vec<Vec<u8>>> {
    let mut lines = Vec::new();

    if config.input_files.is_empty() {
        read_lines_into(io::stdin().lock(), config.record_delimiter, &mut lines)?;
        return Ok(lines);
    }

    for path in &config.input_files {
        let reader: Box<dyn BufRead> = if path == "-" {
            Box::new(io::stdin().lock())
        } else {
            Box::new(BufReader::new(File::open(path)?))
        };
        read_lines_into(reader, config.record_delimiter, &mut lines)?;
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &[u8], delimiter: u8) -> Vec<Vec<u8>> {
        let mut lines = Vec::new();
        read_lines_into(Cursor::new(input), delimiter, &mut lines).unwrap();
        lines
    }

    #[test]
    fn test_read_lines_newline() {
        assert_eq!(read(b"a\nb\nc\n", b'\n'), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_read_lines_no_trailing_newline() {
        assert_eq!(read(b"a\nb", b'\n'), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_read_lines_nul_delimiter() {
        assert_eq!(read(b"x\0y\0", 0u8), vec![b"x".to_vec(), b"y".to_vec()]);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        assert_eq!(
            read(b"\n\na\n", b'\n'),
            vec![b"".to_vec(), b"".to_vec(), b"a".to_vec()]
        );
    }

    #[test]
    fn test_read_lines_appends() {
        let mut lines = vec![b"first".to_vec()];
        read_lines_into(Cursor::new(b"second\n"), b'\n', &mut lines).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], b"second".to_vec());
    }
}
