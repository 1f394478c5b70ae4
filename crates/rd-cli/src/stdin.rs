// crates/rd-cli/src/stdin.rs - Reminder text from stdin
//
// `rd add` takes its text from the arguments, or from piped stdin when the
// arguments stop after the schedule token:
//
// ```bash
// rd add mon@9am call the dentist
// echo "call the dentist" | rd add mon@9am
// ```

use std::io::{self, IsTerminal, Read};

use rd_core::{RdError, Result};

/// Read reminder text from stdin, refusing to block on an interactive terminal
pub fn read_text_from_stdin() -> Result<String> {
    if io::stdin().is_terminal() {
        return Err(RdError::InvalidArguments(
            "missing reminder text.\n\nExamples:\n  rd add mon@9am call the dentist\n  echo \"call the dentist\" | rd add mon@9am".to_string(),
        ));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let input = single_line(&buffer);
    if input.is_empty() {
        return Err(RdError::InvalidArguments(
            "missing reminder text (stdin was empty)".to_string(),
        ));
    }

    Ok(input)
}

/// Listings show one reminder per line, so a multi-line body is joined with
/// spaces and blank lines are dropped
fn single_line(input: &str) -> String {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_keeps_plain_text() {
        assert_eq!(single_line("water the plants\n"), "water the plants");
    }

    #[test]
    fn test_single_line_joins_lines() {
        assert_eq!(
            single_line("  line one\r\n\nline two  \n\n"),
            "line one line two"
        );
    }

    #[test]
    fn test_single_line_of_blank_input_is_empty() {
        assert_eq!(single_line(" \n\t\n"), "");
    }
}
