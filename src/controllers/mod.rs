//! Page controllers and their UI seams
//!
//! Controllers are UI-agnostic: the rendering layer injects the navigation,
//! notification, and confirmation surfaces at construction time. Each
//! controller runs at most one network operation at a time, and a response
//! that arrives after the screen was torn down is discarded via the
//! controller's `ActivityHandle`.

pub mod detail;
pub mod form;
pub mod list;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::routes::Route;

pub use detail::DetailController;
pub use form::{FormController, FormMode, FormPhase};
pub use list::ListController;

/// Global notification surface; transport and application failures are
/// presented identically through `error`
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Navigation surface; controllers navigate only on terminal success or
/// fatal load failure
pub trait Navigator: Send + Sync {
    fn go(&self, route: Route);
}

/// Blocking yes/no confirmation surfaced before destructive actions
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Tracks whether a controller's screen is still on display.
///
/// The rendering layer deactivates the handle when the user navigates away;
/// a controller checks it after every await and drops late responses instead
/// of mutating torn-down view state.
#[derive(Debug, Clone)]
pub struct ActivityHandle(Arc<AtomicBool>);

impl ActivityHandle {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn deactivate(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for ActivityHandle {
    fn default() -> Self {
        Self::new()
    }
}
