use std::io::{self, Write};

use bstr::ByteSlice;

use crate::buffer::OrderedBuffer;
use crate::compare::Record;

/// Trace one insertion: where the record landed and the buffer's shape after
///
/// Non-UTF-8 bytes are printed lossily.
pub fn trace_insert<W: Write>(
    writer: &mut W,
    buffer: &OrderedBuffer<Record>,
    position: usize,
) -> io::Result<()> {
    let line = buffer
        .get(position)
        .map(|record| record.line())
        .unwrap_or_default();

    writeln!(
        writer,
        "insert @{} len={} cap={}: {}",
        position,
        buffer.len(),
        buffer.capacity(),
        line.as_bstr()
    )
}

/// Final line of the trace
pub fn trace_summary<W: Write>(writer: &mut W, buffer: &OrderedBuffer<Record>) -> io::Result<()> {
    writeln!(
        writer,
        "{} records, capacity {}",
        buffer.len(),
        buffer.capacity()
    )
}
