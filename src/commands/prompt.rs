//! Title input

use std::io::{BufRead, Write};

use crate::error::{PostError, Result};

/// Question shown before reading a title
pub const TITLE_QUESTION: &str = "What is the name of the article ?";

/// Something that can supply the title of a new post
pub trait TitleSource {
    fn read_title(&mut self) -> Result<String>;
}

/// A title known up front (e.g. from `--title`)
#[derive(Debug, Clone)]
pub struct FixedTitle(pub String);

impl TitleSource for FixedTitle {
    fn read_title(&mut self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Interactive prompt: asks the question on `output`, reads one line from `input`
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Prompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TitleSource for Prompt<R, W> {
    fn read_title(&mut self) -> Result<String> {
        writeln!(self.output, "{}", TITLE_QUESTION).map_err(PostError::Input)?;
        self.output.flush().map_err(PostError::Input)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(PostError::Input)?;
        if read == 0 {
            return Err(PostError::EndOfInput);
        }

        // Only the line terminator is removed; surrounding spaces are part of the title
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (Result<String>, String) {
        let mut output = Vec::new();
        let result = Prompt::new(input.as_bytes(), &mut output).read_title();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let (title, shown) = ask("My First Post\nignored\n");
        assert_eq!(title.unwrap(), "My First Post");
        assert_eq!(shown, "What is the name of the article ?\n");
    }

    #[test]
    fn test_prompt_keeps_spaces() {
        let (title, _) = ask("  Weird!! Chars_here \r\n");
        assert_eq!(title.unwrap(), "  Weird!! Chars_here ");
    }

    #[test]
    fn test_prompt_without_newline() {
        let (title, _) = ask("last line");
        assert_eq!(title.unwrap(), "last line");
    }

    #[test]
    fn test_prompt_empty_line() {
        let (title, _) = ask("\n");
        assert_eq!(title.unwrap(), "");
    }

    #[test]
    fn test_prompt_end_of_input() {
        let (title, _) = ask("");
        assert!(matches!(title, Err(PostError::EndOfInput)));
    }

    #[test]
    fn test_fixed_title() {
        let mut source = FixedTitle("TIL".to_string());
        assert_eq!(source.read_title().unwrap(), "TIL");
    }
}
