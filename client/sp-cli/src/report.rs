use crate::error::Result as CliResult;

use std::process::ExitCode;

use serde::Serialize;
use sp_core::DraftField;
use sp_session::FailureNotice;

/// Map a command result to the process exit code, reporting errors on stderr
pub fn finish(result: CliResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

pub fn report_notices(notices: &[FailureNotice]) {
    for notice in notices {
        eprintln!(
            "Warning: {} failed ({}): {}",
            notice.operation, notice.kind, notice.message
        );
    }
}

pub fn report_retained(fields: &[DraftField]) {
    for field in fields {
        eprintln!("Warning: {field} not changed: value is not a valid number");
    }
}

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
