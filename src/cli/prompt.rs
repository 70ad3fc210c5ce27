//! Interactive output-name prompt.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompt provides the "run `sdash` and type a file name" UX
//!
//! One attempt per run: blank input is an input error, not a retry loop.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::AppError;

/// Prompt once on stdin for the report file name.
pub fn prompt_for_output_name() -> Result<PathBuf, AppError> {
    print!("Report file name (e.g. report or report.html): ");
    io::stdout()
        .flush()
        .map_err(|e| AppError::input(format!("Failed to write prompt: {e}")))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

    if bytes == 0 {
        return Err(AppError::input(
            "No input received. Provide a file name with `sdash report -o <file>`.",
        ));
    }

    parse_output_name(&input)
}

/// Validate a raw file-name line: trim whitespace, reject empty input.
pub fn parse_output_name(input: &str) -> Result<PathBuf, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::input("Report file name must not be empty."));
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_an_input_error() {
        for input in ["", "   ", " \t \n"] {
            let err = parse_output_name(input).unwrap_err();
            assert_eq!(err.exit_code(), 2, "input {input:?} should be rejected");
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let path = parse_output_name("  report \n").unwrap();
        assert_eq!(path, PathBuf::from("report"));
    }

    #[test]
    fn a_plain_name_passes_through() {
        let path = parse_output_name("q1-sales.html").unwrap();
        assert_eq!(path, PathBuf::from("q1-sales.html"));
    }
}
