//! Generic detail controller
//!
//! Fetches one record for display. A detail screen never renders against a
//! record that failed to load; any load failure navigates back to the list.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::controllers::{ActivityHandle, ConfirmPrompt, Navigator, Notifier};
use crate::models::Resource;
use crate::routes::Route;
use crate::services::ResourceService;

/// Read-only record screen controller for one entity type
pub struct DetailController<R: Resource> {
    service: ResourceService<R>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    confirm: Arc<dyn ConfirmPrompt>,
    activity: ActivityHandle,
    record: Option<R::Record>,
    busy: bool,
}

impl<R: Resource> DetailController<R> {
    pub fn new(
        service: ResourceService<R>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            service,
            notifier,
            navigator,
            confirm,
            activity: ActivityHandle::new(),
            record: None,
            busy: false,
        }
    }

    pub fn activity(&self) -> ActivityHandle {
        self.activity.clone()
    }

    pub fn record(&self) -> Option<&R::Record> {
        self.record.as_ref()
    }

    /// Route to the edit form for the displayed record
    pub fn edit_route(&self) -> Option<Route> {
        self.record
            .as_ref()
            .map(|r| Route::edit_of::<R>(R::record_id(r)))
    }

    /// Activate the screen: fetch the record, or leave for the list on any
    /// failure
    pub async fn activate(&mut self, id: i64) {
        if self.busy {
            return;
        }
        self.busy = true;
        debug!(endpoint = R::ENDPOINT, id, "loading record for view");
        let result = self.service.get(id).await;
        self.busy = false;

        if !self.activity.is_active() {
            return;
        }

        match result {
            Ok(record) => self.record = Some(record),
            Err(err) => {
                warn!(endpoint = R::ENDPOINT, id, error = %err, "detail load failed");
                self.notifier.error(&err.user_message());
                self.navigator.go(Route::list_of::<R>());
                self.record = None;
            }
        }
    }

    /// Delete or deactivate the displayed record after explicit
    /// confirmation; success navigates back to the list
    pub async fn delete(&mut self) {
        if self.busy {
            return;
        }
        let Some(ref record) = self.record else {
            warn!(endpoint = R::ENDPOINT, "delete requested with no record loaded");
            return;
        };
        let id = R::record_id(record);
        let name = R::display_name(record);
        let verb = if R::SOFT_DELETE { "deactivate" } else { "delete" };
        let message = format!("Are you sure you want to {} \"{}\"?", verb, name);

        if !self.confirm.confirm(&message).await {
            debug!(endpoint = R::ENDPOINT, id, "delete not confirmed");
            return;
        }

        self.busy = true;
        let result = self.service.remove(id).await;
        self.busy = false;

        if !self.activity.is_active() {
            return;
        }

        match result {
            Ok(()) => {
                info!(endpoint = R::ENDPOINT, id, "record removed");
                self.notifier
                    .success(&format!("{} \"{}\" removed", R::SINGULAR, name));
                self.navigator.go(Route::list_of::<R>());
            }
            Err(err) => {
                warn!(endpoint = R::ENDPOINT, id, error = %err, "delete failed");
                self.notifier.error(&err.user_message());
            }
        }
    }
}
