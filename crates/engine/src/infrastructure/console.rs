//! Terminal adapters for the host UI ports.
//!
//! The command loop and confirmation prompts share one line reader, so a
//! prompt simply consumes the next line the user types.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{
    ConfirmPort, ConfirmRequest, NotificationLevel, NotificationPort,
};

/// Line-oriented console over any async reader/writer pair.
pub struct Console<R, W> {
    lines: Mutex<Lines<R>>,
    output: Mutex<W>,
}

impl Console<tokio::io::BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(
            tokio::io::BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            lines: Mutex::new(input.lines()),
            output: Mutex::new(output),
        }
    }

    /// Next input line, `None` at end of input.
    pub async fn read_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }

    pub async fn write_line(&self, text: &str) -> std::io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await
    }

    async fn write_prompt(&self, text: &str) -> std::io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.flush().await
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl<R, W> ConfirmPort for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Anything but `y`/`yes`, including end of input or an I/O failure,
    /// counts as a decline.
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let prompt = format!(
            "[{}] {}\n{} [y/N] ",
            request.icon.css_class(),
            request.title,
            request.message
        );
        if let Err(e) = self.write_prompt(&prompt).await {
            tracing::warn!(error = %e, "Failed to show confirmation prompt");
            return false;
        }

        match self.read_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation answer");
                false
            }
        }
    }
}

/// Routes user notifications into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info => tracing::info!(target: "spellkits::notify", "{}", message),
            NotificationLevel::Warning => tracing::warn!(target: "spellkits::notify", "{}", message),
            NotificationLevel::Error => tracing::error!(target: "spellkits::notify", "{}", message),
        }
    }
}
