use std::io::{self, BufRead, Read, Write};
use std::os::fd::RawFd;

use super::{InputError, Line, LineSource};
use crate::process::InterruptFlag;

/// How long one `poll(2)` waits before the interrupt flag is checked again.
const POLL_INTERVAL_MS: libc::c_int = 200;

/// Reads newline-terminated lines from a script, a pipe, or a terminal the
/// line editor could not take over. Bytes that are not valid UTF-8 are
/// replaced rather than ending the input.
pub struct BufferedInput<R> {
    reader: R,
    show_prompt: bool,
    interrupt: Option<InterruptFlag>,
    buf: Vec<u8>,
}

impl<R: BufRead> BufferedInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            show_prompt: false,
            interrupt: None,
            buf: Vec::new(),
        }
    }

    /// Prints the prompt before each read and drops a line typed while
    /// Ctrl-C was pressed.
    pub fn interactive(reader: R, interrupt: InterruptFlag) -> Self {
        Self {
            reader,
            show_prompt: true,
            interrupt: Some(interrupt),
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for BufferedInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Line, InputError> {
        if self.show_prompt {
            let mut out = std::io::stdout().lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;

        if self.interrupt.as_ref().is_some_and(InterruptFlag::take) {
            writeln!(std::io::stdout())?;
            return Ok(Line::Interrupted);
        }
        if read == 0 {
            return Ok(Line::Eof);
        }

        let line = String::from_utf8_lossy(&self.buf);
        Ok(Line::Text(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Raw reads from a descriptor that give up once Ctrl-C is pressed.
///
/// SIGINT handlers are installed with `SA_RESTART`, so a blocking `read`
/// would only notice the interrupt after the next newline. This waits in
/// `poll(2)` instead and reports end of input while the flag is raised,
/// which `BufferedInput` turns into `Line::Interrupted`.
pub struct InterruptibleReader {
    fd: RawFd,
    interrupt: InterruptFlag,
}

impl InterruptibleReader {
    pub fn new(fd: RawFd, interrupt: InterruptFlag) -> Self {
        Self { fd, interrupt }
    }

    pub fn stdin(interrupt: InterruptFlag) -> Self {
        Self::new(libc::STDIN_FILENO, interrupt)
    }

    fn wait_readable(&self) -> io::Result<bool> {
        loop {
            if self.interrupt.is_raised() {
                return Ok(false);
            }

            let mut pollfd = libc::pollfd {
                fd: self.fd,
                events: libc::POLLIN,
                revents: 0,
            };
            let ready = unsafe { libc::poll(&mut pollfd, 1, POLL_INTERVAL_MS) };
            match ready {
                0 => continue,
                n if n > 0 => return Ok(true),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() != io::ErrorKind::Interrupted {
                        return Err(err);
                    }
                }
            }
        }
    }
}

impl Read for InterruptibleReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.wait_readable()? {
            return Ok(0);
        }

        let n = unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(n as usize)
    }
}
