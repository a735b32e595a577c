//! Platform-controlled streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use showcase_core::{LifecyclePhase, Mark, TimingContext, WorkloadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell sent, sections may follow.
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called exactly once, before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.record(Mark::ShellStart);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.record(Mark::ShellSent);
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.timing.record(Mark::SectionStart(name.to_string()));
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.record(Mark::SectionSent(name.to_string()));
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send the closing chrome and mark the response complete.
    pub async fn send_closing(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.write(html.as_bytes().to_vec()).await?;
        self.inner
            .close()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.record(Mark::Closed);

        Ok(())
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::Completed => Err(WorkloadError::StreamError(
                "Sink already completed".to_string(),
            )),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(name) => LifecyclePhase::SectionSent(name.clone()),
                None => LifecyclePhase::ShellSent,
            },
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    fn collect(rx: mpsc::UnboundedReceiver<Vec<u8>>) -> String {
        let chunks: Vec<Vec<u8>> = block_on(rx.collect());
        String::from_utf8(chunks.concat()).unwrap()
    }

    #[test]
    fn test_section_before_shell_is_rejected() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let err = block_on(sink.send_section("products", "<section></section>")).unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_shell_then_section_then_closing() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(async {
            sink.send_shell("<html><body>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);

            sink.send_section("products", "<section>cards</section>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::SectionSent("products".to_string()));

            sink.send_closing("</body></html>").await.unwrap();
        });

        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert_eq!(sink.sections_sent(), ["products".to_string()]);
        assert!(sink.timing().time_to_shell().is_some());
        assert!(sink.timing().section_timing("products").is_some());

        drop(sink);
        assert_eq!(collect(rx), "<html><body><section>cards</section></body></html>");
    }

    #[test]
    fn test_nothing_after_completion() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_closing("</html>").await.unwrap();
            assert!(sink.send_section("late", "x").await.is_err());
            assert!(sink.send_shell("<html>").await.is_err());
        });
    }
}
