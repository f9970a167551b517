//! Route conventions
//!
//! Every resource follows the same four-route table: `/{resource}`,
//! `/{resource}/create`, `/{resource}/edit/{id}`, `/{resource}/view/{id}`.
//! The table is a contract the rendering layer preserves for UI consistency.
//! Authentication itself lives outside this crate; route activation only
//! checks the `AuthGuard` precondition and redirects to the login entry
//! point when it fails.

use crate::models::{
    Attendance, Branch, Department, Fee, Grade, Group, Holiday, Invoice, Resource, SchoolClass,
    Section, Student, Subject, Teacher,
};

/// Resource path segments known to the route table
static RESOURCES: &[&str] = &[
    Attendance::ENDPOINT,
    Branch::ENDPOINT,
    SchoolClass::ENDPOINT,
    Department::ENDPOINT,
    Fee::ENDPOINT,
    Grade::ENDPOINT,
    Group::ENDPOINT,
    Holiday::ENDPOINT,
    Invoice::ENDPOINT,
    Section::ENDPOINT,
    Student::ENDPOINT,
    Subject::ENDPOINT,
    Teacher::ENDPOINT,
];

/// A logical navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/{resource}` — filtered collection
    List(&'static str),
    /// `/{resource}/create` — empty form
    Create(&'static str),
    /// `/{resource}/edit/{id}` — pre-filled form
    Edit(&'static str, i64),
    /// `/{resource}/view/{id}` — read-only detail
    View(&'static str, i64),
    /// `/login` — authentication entry point
    Login,
}

impl Route {
    pub fn list_of<R: Resource>() -> Self {
        Route::List(R::ENDPOINT)
    }

    pub fn create_of<R: Resource>() -> Self {
        Route::Create(R::ENDPOINT)
    }

    pub fn edit_of<R: Resource>(id: i64) -> Self {
        Route::Edit(R::ENDPOINT, id)
    }

    pub fn view_of<R: Resource>(id: i64) -> Self {
        Route::View(R::ENDPOINT, id)
    }

    /// Render the route as a URL path
    pub fn path(&self) -> String {
        match self {
            Route::List(resource) => format!("/{}", resource),
            Route::Create(resource) => format!("/{}/create", resource),
            Route::Edit(resource, id) => format!("/{}/edit/{}", resource, id),
            Route::View(resource, id) => format!("/{}/view/{}", resource, id),
            Route::Login => "/login".to_string(),
        }
    }

    /// Parse a URL path against the route table
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["login"] => Some(Route::Login),
            [resource] => known(resource).map(Route::List),
            [resource, "create"] => known(resource).map(Route::Create),
            [resource, "edit", id] => {
                let id = id.parse().ok()?;
                known(resource).map(|r| Route::Edit(r, id))
            }
            [resource, "view", id] => {
                let id = id.parse().ok()?;
                known(resource).map(|r| Route::View(r, id))
            }
            _ => None,
        }
    }
}

fn known(resource: &str) -> Option<&'static str> {
    RESOURCES.iter().find(|r| **r == resource).copied()
}

/// Authentication precondition checked before any route activation
pub trait AuthGuard: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Resolve an activation target; unauthenticated access to any admin route
/// redirects to the login entry point instead of revealing the page
pub fn guard_route(guard: &dyn AuthGuard, route: Route) -> Route {
    if route == Route::Login || guard.is_authenticated() {
        route
    } else {
        Route::Login
    }
}
