//! Progress reporting for imposition runs
//!
//! A run reports through an optional [`ProgressSink`]. Percentages only ever
//! grow within a run; running without a sink behaves identically.

use std::fmt;

/// Pipeline stage a progress update belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    Loading,
    Processing,
    Composing,
    Saving,
    Complete,
    Error,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Loading => "loading",
            Stage::Processing => "processing",
            Stage::Composing => "composing",
            Stage::Saving => "saving",
            Stage::Complete => "complete",
            Stage::Error => "error",
        };
        f.write_str(name)
    }
}

/// One progress checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressUpdate {
    pub stage: Stage,
    /// 0..=100
    pub percent: u8,
    pub message: String,
}

/// Receiver for progress updates
pub trait ProgressSink: Send + Sync {
    fn report(&self, update: &ProgressUpdate);
}

impl<F> ProgressSink for F
where
    F: Fn(&ProgressUpdate) + Send + Sync,
{
    fn report(&self, update: &ProgressUpdate) {
        self(update)
    }
}

/// Sends updates to an optional sink, keeping the percentage monotonic
pub(crate) struct Progress<'a> {
    sink: Option<&'a dyn ProgressSink>,
    percent: u8,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(sink: Option<&'a dyn ProgressSink>) -> Self {
        Self { sink, percent: 0 }
    }

    pub(crate) fn report(&mut self, stage: Stage, percent: u8, message: impl Into<String>) {
        self.percent = self.percent.max(percent.min(100));
        if let Some(sink) = self.sink {
            sink.report(&ProgressUpdate {
                stage,
                percent: self.percent,
                message: message.into(),
            });
        }
    }

    /// Report step `done` of `total` within the `from..=to` percent band
    pub(crate) fn step(
        &mut self,
        stage: Stage,
        from: u8,
        to: u8,
        done: usize,
        total: usize,
        message: impl Into<String>,
    ) {
        let span = to.saturating_sub(from) as usize;
        let offset = if total == 0 { span } else { span * done.min(total) / total };
        self.report(stage, from + offset as u8, message);
    }

    /// Report a failure at the current percentage
    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        let percent = self.percent;
        self.report(Stage::Error, percent, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_percent_never_decreases() {
        let seen = Mutex::new(Vec::new());
        let sink = |u: &ProgressUpdate| seen.lock().unwrap().push(u.percent);

        let mut progress = Progress::new(Some(&sink));
        progress.report(Stage::Loading, 10, "a");
        progress.report(Stage::Processing, 5, "b");
        progress.step(Stage::Composing, 20, 90, 1, 2, "c");
        progress.report(Stage::Complete, 150, "d");

        assert_eq!(*seen.lock().unwrap(), vec![10, 10, 55, 100]);
    }

    #[test]
    fn test_without_sink() {
        let mut progress = Progress::new(None);
        progress.report(Stage::Loading, 40, "ignored");
        progress.fail("still fine");
        assert_eq!(progress.percent, 40);
    }
}
