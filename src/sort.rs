use std::io::Write;

use crate::buffer::OrderedBuffer;
use crate::compare::Record;
use crate::config::Config;
use crate::debug;
use crate::error::Result;

/// Build an ordered buffer of records from raw lines
///
/// Lines are inserted one at a time, so records with equal keys keep their
/// input order when last-resort is off. With `--bulk` the lines are sorted
/// once instead. Insertion trace goes to `trace` when `--debug` is set.
pub fn sort_records<W: Write>(
    lines: Vec<Vec<u8>>,
    config: &Config,
    trace: &mut W,
) -> Result<OrderedBuffer<Record>> {
    let records = lines.into_iter().map(|line| Record::new(line, config));

    let buffer = if config.bulk {
        OrderedBuffer::from_unsorted(records)
    } else {
        let mut buffer = OrderedBuffer::new();
        for record in records {
            let position = buffer.try_insert(record)?;
            if config.debug {
                debug::trace_insert(trace, &buffer, position)?;
            }
        }
        buffer
    };

    if config.debug {
        debug::trace_summary(trace, &buffer)?;
    }

    Ok(buffer)
}

/// 0-based position of a record equal to `value`, if any
pub fn find_record(buffer: &OrderedBuffer<Record>, value: &[u8], config: &Config) -> Option<usize> {
    buffer.find(&Record::new(value.to_vec(), config))
}
