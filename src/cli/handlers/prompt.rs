use std::io::{self, BufRead, IsTerminal, Write};

use super::CliError;

/// Ask a yes/no question on the terminal. Refuses when stdin is not a TTY.
pub fn confirm_on_terminal(question: &str) -> Result<bool, CliError> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(CliError::NeedsConfirmation);
    }
    Ok(ask(question, &mut stdin.lock(), &mut io::stderr())?)
}

/// Write `question [y/N] ` to `output` and read one answer line from `input`.
/// Only `y` / `yes` (any case) count as yes; EOF counts as no.
pub fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> (bool, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let yes = ask("Really?", &mut input, &mut output).unwrap();
        (yes, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_answers() {
        assert!(answer("y\n").0);
        assert!(answer("YES\n").0);
        assert!(answer("  yes  \n").0);
    }

    #[test]
    fn everything_else_is_no() {
        assert!(!answer("n\n").0);
        assert!(!answer("\n").0);
        assert!(!answer("sure\n").0);
        assert!(!answer("").0);
    }

    #[test]
    fn prompt_is_written() {
        assert_eq!(answer("n\n").1, "Really? [y/N] ");
    }
}
