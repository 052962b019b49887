/// Named stages of an analysis run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Profiling,
    Aggregating,
    Projecting,
    Writing,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Loading => "Loading",
            Phase::Profiling => "Profiling proteins",
            Phase::Aggregating => "Aggregating",
            Phase::Projecting => "Projecting",
            Phase::Writing => "Writing outputs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart(Phase),
    PhaseFinish(Phase),

    /// Per-entry progress inside a phase.
    EntriesStart { total: u64 },
    EntryProcessed,
    EntriesFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `work` bracketed by start and finish events for `phase`.
    ///
    /// The finish event is only sent when `work` returns.
    pub fn phase<T>(&self, phase: Phase, work: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart(phase));
        let result = work();
        self.report(Progress::PhaseFinish(phase));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("ignored".to_string()));
        assert_eq!(reporter.phase(Phase::Loading, || 7), 7);
    }

    #[test]
    fn phase_brackets_its_work() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        reporter.phase(Phase::Aggregating, || {
            reporter.report(Progress::Message("inside".to_string()));
        });
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::PhaseStart(Phase::Aggregating),
                Progress::Message("inside".to_string()),
                Progress::PhaseFinish(Phase::Aggregating),
            ]
        );
    }

    #[test]
    fn phase_labels_are_human_readable() {
        assert_eq!(Phase::Profiling.label(), "Profiling proteins");
        assert_eq!(Phase::Writing.label(), "Writing outputs");
    }
}
