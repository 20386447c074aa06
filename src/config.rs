use crate::cli::Args;
use crate::error::{Result, SortvecError};

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub reverse: bool,
    pub numeric: bool,
    pub fold_case: bool,
    pub unique: bool,
    pub stable: bool,
    pub bulk: bool,
    pub debug: bool,
    pub find: Option<Vec<u8>>,
    pub record_delimiter: u8,
    pub output_file: Option<String>,
    pub input_files: Vec<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        // The one-shot sort is unstable, so it cannot keep input order
        // among equal keys, which -s and -u both depend on
        if args.bulk && args.stable {
            return Err(SortvecError::ConflictingOptions("--bulk", "--stable"));
        }
        if args.bulk && args.unique {
            return Err(SortvecError::ConflictingOptions("--bulk", "--unique"));
        }

        Ok(Config {
            reverse: args.reverse,
            numeric: args.numeric,
            fold_case: args.fold_case,
            unique: args.unique,
            stable: args.stable,
            bulk: args.bulk,
            debug: args.debug,
            find: args.find.as_ref().map(|value| value.as_bytes().to_vec()),
            record_delimiter: args.record_delimiter(),
            output_file: args.output.clone(),
            input_files: args.files.clone(),
        })
    }

    /// Whether last-resort comparison is enabled
    pub fn use_last_resort(&self) -> bool {
        !self.stable && !self.unique
    }
}
