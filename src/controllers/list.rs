//! Generic list controller
//!
//! Loads a filtered collection on activation and exposes row-level actions.
//! Destructive actions require an explicit confirmation naming the record.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::controllers::{ActivityHandle, ConfirmPrompt, Navigator, Notifier};
use crate::models::{Resource, ToggleStatus};
use crate::routes::Route;
use crate::services::{ListFilter, ResourceService};

/// Collection screen controller for one entity type
pub struct ListController<R: Resource> {
    service: ResourceService<R>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    confirm: Arc<dyn ConfirmPrompt>,
    activity: ActivityHandle,
    filter: ListFilter,
    rows: Vec<R::Record>,
    busy: bool,
}

impl<R: Resource> ListController<R> {
    pub fn new(
        service: ResourceService<R>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        // soft-delete entities list active records by default
        let filter = if R::SOFT_DELETE {
            ListFilter::active_only()
        } else {
            ListFilter::new()
        };
        Self {
            service,
            notifier,
            navigator,
            confirm,
            activity: ActivityHandle::new(),
            filter,
            rows: Vec::new(),
            busy: false,
        }
    }

    /// Replace the default filter before activation
    pub fn with_filter(mut self, filter: ListFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn activity(&self) -> ActivityHandle {
        self.activity.clone()
    }

    pub fn rows(&self) -> &[R::Record] {
        &self.rows
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Route to the edit form for a row
    pub fn edit_route(&self, id: i64) -> Route {
        Route::edit_of::<R>(id)
    }

    /// Route to the read-only detail view for a row
    pub fn view_route(&self, id: i64) -> Route {
        Route::view_of::<R>(id)
    }

    /// Activate the screen: fetch the collection
    pub async fn activate(&mut self) {
        self.load().await;
    }

    /// Fetch the collection with the current filter
    pub async fn load(&mut self) {
        if self.busy {
            debug!(endpoint = R::ENDPOINT, "load already in flight");
            return;
        }
        self.busy = true;
        let result = self.service.list(&self.filter).await;
        self.busy = false;

        if !self.activity.is_active() {
            return;
        }

        match result {
            Ok(rows) => {
                debug!(endpoint = R::ENDPOINT, count = rows.len(), "list loaded");
                self.rows = rows;
            }
            Err(err) => {
                warn!(endpoint = R::ENDPOINT, error = %err, "list load failed");
                self.notifier.error(&err.user_message());
            }
        }
    }

    /// Delete or deactivate a row after explicit confirmation.
    ///
    /// Declined confirmation issues no network call. On success the screen
    /// notifies and navigates to the list route (re-activation refetches);
    /// on failure it stays unchanged so the user can retry.
    pub async fn delete(&mut self, id: i64) {
        if self.busy {
            return;
        }
        let Some(record) = self.rows.iter().find(|r| R::record_id(r) == id) else {
            warn!(endpoint = R::ENDPOINT, id, "delete requested for unknown row");
            return;
        };
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

impl<R: ToggleStatus> ListController<R> {
    /// Flip a row's active flag server-side and update the row in place
    pub async fn toggle(&mut self, id: i64) {
        if self.busy {
            return;
        }
        self.busy = true;
        let result = self.service.toggle_status(id).await;
        self.busy = false;

        if !self.activity.is_active() {
            return;
        }

        match result {
            Ok(updated) => {
                if let Some(row) = self.rows.iter_mut().find(|r| R::record_id(r) == id) {
                    *row = updated;
                }
                info!(endpoint = R::ENDPOINT, id, "status toggled");
            }
            Err(err) => {
                warn!(endpoint = R::ENDPOINT, id, error = %err, "status toggle failed");
                self.notifier.error(&err.user_message());
            }
        }
    }
}
