//! Scenario lifecycle hooks.
//!
//! [`SuiteHooks`] turns the start and end of a scenario into a sequence of
//! [`HookEvent`]s, logging each through `tracing`. Tag-specific hooks fire for
//! `@smoke` and `@regression` scenarios, and failed scenarios get a failure
//! analysis event before the closing summary.
//!
//! [`ScenarioHookGuard`] runs the hooks around a scenario body: it is built as
//! an `rstest` fixture before the first step and finishes the scenario when it
//! drops, reading the outcome from whether the thread is unwinding.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use tracing::{info, warn};

/// Tag selecting the smoke-test hook.
pub const SMOKE_TAG: &str = "@smoke";

/// Tag selecting the regression-suite hook.
pub const REGRESSION_TAG: &str = "@regression";

/// Identifying details of a running scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioMeta {
    /// Scenario title.
    pub name: String,
    /// Tags as written in the feature file, including the leading `@`.
    pub tags: Vec<String>,
    /// Feature file the scenario came from.
    pub uri: String,
    /// Line of the scenario title within the feature file.
    pub line: u32,
}

impl ScenarioMeta {
    /// Builds metadata for `name` declared at `uri:line`.
    pub fn new(name: impl Into<String>, uri: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            uri: uri.into(),
            line,
        }
    }

    /// Adds `tag`, prefixing `@` when it is missing.
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        let normalised = if tag.starts_with('@') {
            tag.to_owned()
        } else {
            format!("@{tag}")
        };
        self.tags.push(normalised);
        self
    }

    /// Reports whether the scenario carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// Final state of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioOutcome {
    /// Every step succeeded.
    Passed,
    /// A step failed and aborted the scenario.
    Failed,
    /// The scenario was filtered out or skipped.
    Skipped,
}

impl fmt::Display for ScenarioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
        })
    }
}

/// Something a hook reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    /// A scenario began.
    Started {
        /// Scenario title.
        name: String,
        /// Scenario tags.
        tags: Vec<String>,
    },
    /// The scenario is part of the smoke suite.
    SmokeSuite,
    /// The scenario is part of the regression suite.
    RegressionSuite,
    /// A failed scenario's location, reported before the summary.
    FailureAnalysis {
        /// Feature file of the failed scenario.
        uri: String,
        /// Line of the failed scenario.
        line: u32,
    },
    /// A scenario ended.
    Finished {
        /// Scenario title.
        name: String,
        /// How it ended.
        outcome: ScenarioOutcome,
    },
}

/// Hooks run around every scenario.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuiteHooks;

impl SuiteHooks {
    /// Runs the before-scenario hooks: the general start hook, then the
    /// smoke and regression hooks when their tags are present.
    #[must_use]
    pub fn before_scenario(self, meta: &ScenarioMeta) -> Vec<HookEvent> {
        info!(scenario = %meta.name, tags = ?meta.tags, "starting scenario");
        let mut events = vec![HookEvent::Started {
            name: meta.name.clone(),
            tags: meta.tags.clone(),
        }];
        if meta.has_tag(SMOKE_TAG) {
            info!(scenario = %meta.name, "running critical smoke test");
            events.push(HookEvent::SmokeSuite);
        }
        if meta.has_tag(REGRESSION_TAG) {
            info!(scenario = %meta.name, "running regression test suite");
            events.push(HookEvent::RegressionSuite);
        }
        events
    }

    /// Runs the after-scenario hooks. Failure analysis runs first so its
    /// details precede the closing summary.
    #[must_use]
    pub fn after_scenario(self, meta: &ScenarioMeta, outcome: ScenarioOutcome) -> Vec<HookEvent> {
        let mut events = Vec::with_capacity(2);
        if outcome == ScenarioOutcome::Failed {
            warn!(uri = %meta.uri, line = meta.line, "performing failure analysis");
            events.push(HookEvent::FailureAnalysis {
                uri: meta.uri.clone(),
                line: meta.line,
            });
        }
        info!(scenario = %meta.name, %outcome, "finished scenario");
        events.push(HookEvent::Finished {
            name: meta.name.clone(),
            outcome,
        });
        events
    }
}

/// Shared, append-only record of the events emitted around a scenario.
///
/// Clones share the same record, so a log handed to a guard can still be read
/// after the guard has dropped.
#[derive(Debug, Clone, Default)]
pub struct HookLog(Arc<Mutex<Vec<HookEvent>>>);

impl HookLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<HookEvent> {
        self.entries().clone()
    }

    fn record(&self, events: Vec<HookEvent>) {
        self.entries().extend(events);
    }

    fn entries(&self) -> MutexGuard<'_, Vec<HookEvent>> {
        // A panicking step never holds the lock, so the data is intact.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs [`SuiteHooks`] around one scenario.
///
/// The before-scenario hooks run when the guard starts. The after-scenario
/// hooks run when it drops: a drop while the thread unwinds from a failed step
/// reports [`ScenarioOutcome::Failed`], any other drop
/// [`ScenarioOutcome::Passed`].
///
/// # Examples
///
/// ```
/// use bdd_showcase::hooks::{HookEvent, HookLog, ScenarioHookGuard, ScenarioMeta, SMOKE_TAG};
///
/// let log = HookLog::new();
/// let meta = ScenarioMeta::new("Add two numbers", "calculator.feature", 9).with_tag(SMOKE_TAG);
/// drop(ScenarioHookGuard::start_with_log(meta, log.clone()));
///
/// let events = log.events();
/// assert_eq!(events.get(1), Some(&HookEvent::SmokeSuite));
/// assert!(matches!(events.last(), Some(HookEvent::Finished { .. })));
/// ```
#[derive(Debug)]
pub struct ScenarioHookGuard {
    meta: ScenarioMeta,
    log: HookLog,
}

impl ScenarioHookGuard {
    /// Runs the before-scenario hooks for `meta` into a fresh log.
    #[must_use]
    pub fn start(meta: ScenarioMeta) -> Self {
        Self::start_with_log(meta, HookLog::new())
    }

    /// Runs the before-scenario hooks for `meta`, recording into `log`.
    #[must_use]
    pub fn start_with_log(meta: ScenarioMeta, log: HookLog) -> Self {
        log.record(SuiteHooks.before_scenario(&meta));
        Self { meta, log }
    }

    /// Metadata of the guarded scenario.
    #[must_use]
    pub const fn meta(&self) -> &ScenarioMeta {
        &self.meta
    }

    /// Events recorded so far.
    #[must_use]
    pub const fn log(&self) -> &HookLog {
        &self.log
    }
}

impl Drop for ScenarioHookGuard {
    fn drop(&mut self) {
        let outcome = if thread::panicking() {
            ScenarioOutcome::Failed
        } else {
            ScenarioOutcome::Passed
        };
        let events = SuiteHooks.after_scenario(&self.meta, outcome);
        self.log.record(events);
    }
}
