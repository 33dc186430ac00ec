//! Interactive stdin prompts.
//!
//! Numeric prompts re-prompt indefinitely on unparseable input; only a
//! closed input stream ends the loop (as an error).

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print `label` and read one trimmed line. EOF yields an empty string,
/// which callers treat like a blank entry.
pub fn prompt_text(reader: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let n_read = reader.read_line(&mut line)?;
    if n_read == 0 {
        return Ok(String::new());
    }
    Ok(line.trim().to_string())
}

/// Prompt until a non-empty line is entered.
pub fn prompt_text_required(reader: &mut impl BufRead, label: &str) -> io::Result<String> {
    loop {
        print!("{label}");
        io::stdout().flush()?;

        let mut line = String::new();
        let n_read = reader.read_line(&mut line)?;
        if n_read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        let text = line.trim();
        if !text.is_empty() {
            return Ok(text.to_string());
        }
        println!("Input must not be empty. Please try again.");
    }
}

/// Prompt until the line parses as `T`.
pub fn prompt_number<T>(reader: &mut impl BufRead, label: &str) -> io::Result<T>
where
    T: FromStr,
{
    loop {
        let text = prompt_text_required(reader, label)?;
        match text.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please try again."),
        }
    }
}
