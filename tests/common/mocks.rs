//! Recording doubles for the UI seams
//!
//! Controllers are constructed against these in tests so that navigation,
//! notifications, and confirmation prompts can be asserted on afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use campus_admin::controllers::{ConfirmPrompt, Navigator, Notifier};
use campus_admin::routes::Route;

/// Notification severity recorded by `RecordingNotifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Notifier that records every surfaced message
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_severity(Severity::Success)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.of_severity(Severity::Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        self.of_severity(Severity::Error)
    }

    fn of_severity(&self, severity: Severity) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn record(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.record(Severity::Success, message);
    }

    fn warning(&self, message: &str) {
        self.record(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }
}

/// Navigator that records every navigation target
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn go(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Confirmation prompt with a scripted answer, recording every question
pub struct ScriptedPrompt {
    answer: AtomicBool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmPrompt for ScriptedPrompt {
    async fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }
}
