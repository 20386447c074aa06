use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::buffer::OrderedBuffer;
use crate::compare::Record;
use crate::config::Config;

/// Write the buffer in order, dropping duplicates when `-u` is set
///
/// With `-u` last-resort is disabled, so records compare equal exactly when
/// their keys do and the first of each run is kept.
pub fn write_records<W: Write>(
    writer: W,
    records: &OrderedBuffer<Record>,
    config: &Config,
) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    let delimiter = config.record_delimiter;
    let mut prev: Option<&Record> = None;

    for record in records {
        if config.unique && prev == Some(record) {
            continue;
        }
        writer.write_all(record.line())?;
        writer.write_all(&[delimiter])?;
        prev = Some(record);
    }

    writer.flush()
}

/// Open output file or return stdout
pub fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout())),
    }
}
