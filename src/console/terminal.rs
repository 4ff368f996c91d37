//! Line-based console.

use std::io::{self, BufRead, Write};

/// The prompt shown before every read.
pub const PROMPT: &str = "> ";

/// Line-oriented player I/O.
///
/// ## Implementation Notes
///
/// - `say` writes a full line
/// - `write` writes without a newline, for messages a later line completes
/// - `prompt` returns the trimmed response, or `None` once input is closed
pub trait Console {
    /// Write a line of text.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Write text with no trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Show `prompt` and read one line.
    ///
    /// Surrounding whitespace is trimmed and invalid UTF-8 is replaced
    /// rather than rejected. Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A `Console` over a reader and writer.
///
/// ## Example
///
/// ```
/// use std::io::Cursor;
/// use simon_says::console::{Console, Terminal};
///
/// let mut term = Terminal::new(Cursor::new("  jump \n"), Vec::new());
/// assert_eq!(term.prompt("> ").unwrap().as_deref(), Some("jump"));
/// assert_eq!(term.prompt("> ").unwrap(), None);
/// assert_eq!(term.output(), b"> > ");
/// ```
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal from an input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the terminal, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// A terminal over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn say(&mut self, text: &str) -> io::Result<()> {
        (**self).say(text)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).prompt(prompt)
    }
}
