use std::io::{self, BufRead, IsTerminal, Write};

/// Terminal the client talks to: command output, confirmation answers and
/// keystore passwords.
pub trait Console {
    fn out(&mut self) -> &mut dyn Write;

    /// Print `prompt` and read one line, without its line terminator.
    /// End of input reads as an empty line.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Like `read_line` but the answer is not echoed.
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;
}

pub struct StdConsole {
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(strip_line_ending(line))
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        if io::stdin().is_terminal() {
            rpassword::prompt_password(prompt)
        } else {
            // piped input: nothing to hide
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(strip_line_ending(line))
        }
    }
}

pub fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
