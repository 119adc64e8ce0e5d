//! Line-based operator prompts.

use crate::error::{Result, WalletError};
use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

#[async_trait]
pub trait Prompt: Send {
    /// Shows `question` and returns the next input line without its line
    /// terminator. No other trimming is applied.
    async fn ask(&mut self, question: &str) -> Result<String>;

    /// Releases the session. Does nothing when no session is open.
    fn close(&mut self);
}

struct Session<R, W> {
    reader: R,
    writer: W,
}

/// Console prompt whose reader/writer pair is only opened on the first
/// question.
pub struct ConsolePrompt<R, W> {
    open: fn() -> (R, W),
    session: Option<Session<R, W>>,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(|| (BufReader::new(tokio::io::stdin()), tokio::io::stdout()))
    }
}

impl<R, W> ConsolePrompt<R, W> {
    pub fn new(open: fn() -> (R, W)) -> Self {
        Self {
            open,
            session: None,
        }
    }
}

#[async_trait]
impl<R, W> Prompt for ConsolePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(&mut self, question: &str) -> Result<String> {
        let open = self.open;
        let session = self.session.get_or_insert_with(|| {
            log::debug!("Opening prompt session");
            let (reader, writer) = open();
            Session { reader, writer }
        });

        session.writer.write_all(question.as_bytes()).await?;
        session.writer.flush().await?;

        let mut line = String::new();
        if session.reader.read_line(&mut line).await? == 0 {
            return Err(WalletError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before an answer was entered",
            )));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn close(&mut self) {
        if self.session.take().is_some() {
            log::debug!("Prompt session closed");
        }
    }
}

impl<R, W> Drop for ConsolePrompt<R, W> {
    fn drop(&mut self) {
        if self.session.take().is_some() {
            log::debug!("Prompt session released on drop");
        }
    }
}
