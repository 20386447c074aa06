use std::cmp::Ordering;

use crate::config::Config;

/// Precomputed ordering key for a record
#[derive(Clone, Debug)]
enum SortKey {
    /// Compare the raw line bytes
    Raw,
    /// ASCII lower case folded to upper case
    Folded(Vec<u8>),
    /// Leading numeric value (0 when there is none)
    Numeric(f64),
}

/// A line of input together with the ordering chosen on the command line
///
/// Records compare by key first. When the keys tie and last-resort is
/// enabled, the raw bytes decide. `-r` reverses both steps. All records
/// placed in one buffer must be built from the same `Config`.
#[derive(Clone, Debug)]
pub struct Record {
    line: Vec<u8>,
    key: SortKey,
    reverse: bool,
    last_resort: bool,
}

impl Record {
    pub fn new(line: Vec<u8>, config: &Config) -> Self {
        let key = if config.numeric {
            SortKey::Numeric(parse_leading_number(&line))
        } else if config.fold_case {
            SortKey::Folded(line.iter().map(u8::to_ascii_uppercase).collect())
        } else {
            SortKey::Raw
        };

        Self {
            line,
            key,
            reverse: config.reverse,
            last_resort: config.use_last_resort(),
        }
    }

    pub fn line(&self) -> &[u8] {
        &self.line
    }

    pub fn into_line(self) -> Vec<u8> {
        self.line
    }

    fn compare_keys(&self, other: &Self) -> Ordering {
        match (&self.key, &other.key) {
            (SortKey::Numeric(a), SortKey::Numeric(b)) => a.total_cmp(b),
            (SortKey::Folded(a), SortKey::Folded(b)) => a.cmp(b),
            _ => self.line.cmp(&other.line),
        }
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_key = self.compare_keys(other);
        if by_key != Ordering::Equal {
            return maybe_reverse(by_key, self.reverse);
        }

        // Last-resort ignores every option except -r
        if self.last_resort {
            return maybe_reverse(self.line.cmp(&other.line), self.reverse);
        }

        Ordering::Equal
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Record {}

/// Compare two lines the way a buffer of records built from `config` would
pub fn compare_records(a: &[u8], b: &[u8], config: &Config) -> Ordering {
    Record::new(a.to_vec(), config).cmp(&Record::new(b.to_vec(), config))
}

/// Parse the leading number of a line, GNU `sort -n` style
///
/// Skips leading blanks, then accepts an optional sign, digits and at most
/// one decimal point. Anything without digits is 0.
pub fn parse_leading_number(line: &[u8]) -> f64 {
    let start = line
        .iter()
        .position(|&b| b != b' ' && b != b'\t')
        .unwrap_or(line.len());
    let rest = &line[start..];

    let mut end = usize::from(matches!(rest.first(), Some(b'-' | b'+')));
    let mut seen_dot = false;
    let mut seen_digit = false;
    while let Some(&b) = rest.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return 0.0;
    }

    let value = std::str::from_utf8(&rest[..end])
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(0.0);

    // -0 and 0 are the same key
    if value == 0.0 { 0.0 } else { value }
}

#[inline]
fn maybe_reverse(ord: Ordering, reverse: bool) -> Ordering {
    if reverse {
        ord.reverse()
    } else {
        ord
    }
}
