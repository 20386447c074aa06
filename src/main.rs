use std::io::{self, Write};

use bstr::ByteSlice;
use clap::Parser;

use sortvec::cli::Args;
use sortvec::config::Config;
use sortvec::error::{Result, SortvecError};
use sortvec::{input, output, sort};

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("sortvec: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;

    let lines = input::read_inputs(&config)?;

    let buffer = {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        let buffer = sort::sort_records(lines, &config, &mut stderr)?;
        stderr.flush()?;
        buffer
    };

    let mut out = output::open_output(&config)?;

    if let Some(value) = &config.find {
        let Some(position) = sort::find_record(&buffer, value, &config) else {
            return Err(SortvecError::NotFound(value.to_str_lossy().into_owned()));
        };
        writeln!(out, "{}", position + 1)?;
        out.flush()?;
        return Ok(());
    }

    output::write_records(out, &buffer, &config)?;

    Ok(())
}
