//! Page lifecycle and timing marks.

use std::time::{Duration, Instant};

/// Where a streamed page response currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Nothing written yet.
    Start,
    /// Head, navbar and heading are out.
    ShellSent,
    /// The most recent section written.
    SectionSent(String),
    /// Footer written and body closed.
    Completion,
}

/// A point in the page response worth timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    ShellStart,
    ShellSent,
    SectionStart(String),
    SectionSent(String),
    Closed,
}

/// Marks recorded against the moment the request arrived.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: Vec<(Mark, Instant)>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    pub fn record(&mut self, mark: Mark) {
        self.marks.push((mark, Instant::now()));
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Offset of the latest occurrence of `mark`.
    pub fn offset(&self, mark: &Mark) -> Option<Duration> {
        self.marks
            .iter()
            .rev()
            .find(|(m, _)| m == mark)
            .map(|(_, at)| at.duration_since(self.start))
    }

    pub fn time_to_shell(&self) -> Option<Duration> {
        self.offset(&Mark::ShellSent)
    }

    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(m, _)| matches!(m, Mark::SectionSent(_)))
            .map(|(_, at)| at.duration_since(self.start))
    }

    /// Start and flush offsets of one section; `None` until it is flushed.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let start = self.offset(&Mark::SectionStart(section.to_string()))?;
        let sent = self.offset(&Mark::SectionSent(section.to_string()))?;

        Some(SectionTiming {
            name: section.to_string(),
            start,
            sent,
            duration: sent.saturating_sub(start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct SectionTiming {
    pub name: String,
    pub start: Duration,
    pub sent: Duration,
    /// Time spent writing the section.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarked_timings_are_none() {
        let timing = TimingContext::new();
        assert!(timing.time_to_shell().is_none());
        assert!(timing.time_to_first_section().is_none());
        assert!(timing.section_timing("products").is_none());
    }

    #[test]
    fn test_section_timing_requires_flush() {
        let mut timing = TimingContext::new();
        timing.record(Mark::SectionStart("products".into()));
        assert!(timing.section_timing("products").is_none());

        timing.record(Mark::SectionSent("products".into()));
        let section = timing.section_timing("products").unwrap();
        assert_eq!(section.name, "products");
        assert!(section.sent >= section.start);
        assert!(timing.time_to_first_section().is_some());
    }

    #[test]
    fn test_shell_mark() {
        let mut timing = TimingContext::new();
        timing.record(Mark::ShellStart);
        assert!(timing.time_to_shell().is_none());

        timing.record(Mark::ShellSent);
        assert!(timing.time_to_shell().is_some());
    }
}
