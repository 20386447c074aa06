use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sortvec", about = "Sort lines of text through an ordered buffer")]
pub struct Args {
    /// Reverse the result of comparisons
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Compare according to numerical value
    #[arg(short = 'n', long = "numeric-sort")]
    pub numeric: bool,

    /// Fold lower case to upper case characters
    #[arg(short = 'f', long = "ignore-case")]
    pub fold_case: bool,

    /// Output only the first of each run of equal lines
    #[arg(short = 'u', long)]
    pub unique: bool,

    /// Keep input order among equal lines by disabling last-resort comparison
    #[arg(short = 's', long)]
    pub stable: bool,

    /// Sort all lines at once instead of inserting them one by one
    #[arg(long)]
    pub bulk: bool,

    /// Report the rank of a line equal to VALUE instead of printing all lines
    #[arg(long, value_name = "VALUE")]
    pub find: Option<String>,

    /// Write result to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Use NUL as line delimiter
    #[arg(short = 'z', long = "zero-terminated")]
    pub zero_terminated: bool,

    /// Trace every insertion on stderr
    #[arg(long)]
    pub debug: bool,

    /// Input files
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Args {
    /// Get the record delimiter (newline or NUL)
    pub fn record_delimiter(&self) -> u8 {
        if self.zero_terminated {
            0u8
        } else {
            b'\n'
        }
    }
}
