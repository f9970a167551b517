//! Generic create/edit form controller
//!
//! One controller drives the form lifecycle for every entity, parameterized
//! by the entity's field descriptor table. The mode is fixed at activation:
//! Create seeds declared defaults, Edit loads and merges the record. A form
//! is never left open against a record that failed to load.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::controllers::{ActivityHandle, Navigator, Notifier};
use crate::forms::FormModel;
use crate::models::Resource;
use crate::routes::Route;
use crate::services::ResourceService;

/// Which network operation a submission issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Lifecycle phase of the form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Edit mode only: the record is being fetched
    Loading,
    /// Fields accept input
    Ready,
    /// A create/update call is in flight; further submits are ignored
    Submitting,
    /// The screen navigated away
    Closed,
}

/// Create/edit controller for one entity type
pub struct FormController<R: Resource> {
    service: ResourceService<R>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    activity: ActivityHandle,
    mode: FormMode,
    phase: FormPhase,
    form: FormModel,
}

impl<R: Resource> FormController<R> {
    pub fn new(
        service: ResourceService<R>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        mode: FormMode,
    ) -> Self {
        let phase = match mode {
            FormMode::Create => FormPhase::Ready,
            FormMode::Edit(_) => FormPhase::Loading,
        };
        Self {
            service,
            notifier,
            navigator,
            activity: ActivityHandle::new(),
            mode,
            phase,
            form: FormModel::from_descriptors(R::fields()),
        }
    }

    /// Handle used by the rendering layer to discard late responses after
    /// the user navigates away
    pub fn activity(&self) -> ActivityHandle {
        self.activity.clone()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Field states in declaration order, for data-driven rendering
    pub fn form(&self) -> &FormModel {
        &self.form
    }

    /// Activate the screen. In Edit mode this loads the record and merges
    /// its writable fields; on any load failure the screen surfaces the
    /// error and navigates back to the list.
    pub async fn activate(&mut self) {
        let FormMode::Edit(id) = self.mode else {
            return;
        };
        debug!(endpoint = R::ENDPOINT, id, "loading record for edit");

        let loaded = self
            .service
            .get(id)
            .await
            .and_then(|record| serde_json::to_value(&record).map_err(Into::into));

        if !self.activity.is_active() {
            self.phase = FormPhase::Closed;
            return;
        }

        match loaded {
            Ok(record) => {
                self.form.merge_record(&record);
                self.phase = FormPhase::Ready;
            }
            Err(err) => {
                warn!(endpoint = R::ENDPOINT, id, error = %err, "edit load failed");
                self.notifier.error(&err.user_message());
                self.navigator.go(Route::list_of::<R>());
                self.phase = FormPhase::Closed;
            }
        }
    }

    /// Set a field value; the field is re-validated synchronously
    pub fn set_field(&mut self, name: &str, value: Value) {
        if self.phase != FormPhase::Ready {
            warn!(endpoint = R::ENDPOINT, field = name, "field write outside Ready phase ignored");
            return;
        }
        self.form.set(name, value);
    }

    /// Submit the form.
    ///
    /// Rejected locally when any rule fails: every field is marked touched
    /// so pending messages become visible, a warning is surfaced, and the
    /// backend is not contacted. On success the screen notifies and
    /// navigates to the list; on failure it stays put with the entered data
    /// intact.
    pub async fn submit(&mut self) {
        match self.phase {
            FormPhase::Submitting => {
                debug!(endpoint = R::ENDPOINT, "submission already in flight");
                return;
            }
            FormPhase::Ready => {}
            _ => return,
        }

        if !self.form.validate_all() {
            self.form.touch_all();
            self.notifier.warning("Please correct the highlighted fields");
            return;
        }

        let data: R::FormData = match serde_json::from_value(self.form.payload()) {
            Ok(data) => data,
            Err(err) => {
                // descriptor table and form type disagree; not user-fixable
                warn!(endpoint = R::ENDPOINT, error = %err, "payload does not fit form type");
                self.notifier.error("The form could not be submitted");
                return;
            }
        };

        self.phase = FormPhase::Submitting;
        let outcome = match self.mode {
            FormMode::Create => self.service.create(&data).await.map(|_| "created"),
            FormMode::Edit(id) => self.service.update(id, &data).await.map(|_| "updated"),
        };

        if !self.activity.is_active() {
            self.phase = FormPhase::Closed;
            return;
        }

        match outcome {
            Ok(verb) => {
                info!(endpoint = R::ENDPOINT, "{} {}", R::SINGULAR, verb);
                self.notifier
                    .success(&format!("{} {} successfully", R::SINGULAR, verb));
                self.navigator.go(Route::list_of::<R>());
                self.phase = FormPhase::Closed;
            }
            Err(err) => {
                warn!(endpoint = R::ENDPOINT, error = %err, "submission failed");
                self.notifier.error(&err.user_message());
                self.phase = FormPhase::Ready;
            }
        }
    }
}
