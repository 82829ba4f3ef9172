use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;

use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::warn;

use crate::application::ports::trash_ports::ConfirmPrompt;

/// Confirmation prompt over a line-based reader/writer pair (stdin/stdout by default)
pub struct ConsoleConfirmPrompt<R, W> {
    io: Mutex<(R, W)>,
    assume_yes: bool,
}

impl ConsoleConfirmPrompt<BufReader<io::Stdin>, io::Stdout> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), assume_yes)
    }
}

impl<R: BufRead, W: Write> ConsoleConfirmPrompt<R, W> {
    pub fn new(reader: R, writer: W, assume_yes: bool) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
            assume_yes,
        }
    }

    fn ask(&self, message: &str) -> io::Result<bool> {
        let mut guard = self
            .io
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "confirm prompt poisoned"))?;
        let (reader, writer) = &mut *guard;

        write!(writer, "{} [y/N] ", message)?;
        writer.flush()?;

        let mut answer = String::new();
        if reader.read_line(&mut answer)? == 0 {
            return Ok(false);
        }

        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

impl<R, W> ConfirmPrompt for ConsoleConfirmPrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        // Reading stdin blocks; on a multi-thread runtime hand the worker's
        // other tasks off first. A current-thread runtime cannot do that.
        let on_multi_thread = Handle::try_current()
            .map(|handle| handle.runtime_flavor() == RuntimeFlavor::MultiThread)
            .unwrap_or(false);
        let answer = if on_multi_thread {
            tokio::task::block_in_place(|| self.ask(message))
        } else {
            self.ask(message)
        };

        match answer {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Could not read confirmation, treating as declined: {}", e);
                false
            }
        }
    }
}
