//! Structured reporting of fetch and mutation events.
//!
//! Views never log domain events directly. They emit a [`DashboardEvent`]
//! through the [`Reporter`] found in context, which makes the diagnostics
//! channel replaceable (tests record events instead of printing them).

use leptos::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    FetchStarted {
        resource: &'static str,
    },
    FetchSucceeded {
        resource: &'static str,
    },
    FetchFailed {
        resource: &'static str,
        error: String,
    },
    /// A response arrived after its view was disposed and was dropped.
    LateResultDiscarded {
        resource: &'static str,
    },
    /// Server data did not satisfy a client-side invariant.
    TransformFailed {
        resource: &'static str,
        error: String,
    },
    MemberDeleted {
        id: u32,
    },
    MemberDeleteFailed {
        id: u32,
        error: String,
    },
    UserCreated {
        id: u32,
    },
    UserCreateFailed {
        error: String,
    },
}

pub trait EventReporter: Send + Sync {
    fn report(&self, event: DashboardEvent);
}

/// Default reporter: forwards events to the `log` facade (browser console).
pub struct LogReporter;

impl EventReporter for LogReporter {
    fn report(&self, event: DashboardEvent) {
        match event {
            DashboardEvent::FetchStarted { resource } => {
                log::debug!(target: "dashboard::fetch", "GET {} started", resource)
            }
            DashboardEvent::FetchSucceeded { resource } => {
                log::debug!(target: "dashboard::fetch", "GET {} succeeded", resource)
            }
            DashboardEvent::FetchFailed { resource, error } => {
                log::error!(target: "dashboard::fetch", "GET {} failed: {}", resource, error)
            }
            DashboardEvent::LateResultDiscarded { resource } => {
                log::warn!(target: "dashboard::fetch", "GET {} resolved after unmount, result dropped", resource)
            }
            DashboardEvent::TransformFailed { resource, error } => {
                log::error!(target: "dashboard::transform", "{}: {}", resource, error)
            }
            DashboardEvent::MemberDeleted { id } => {
                log::info!(target: "dashboard::team", "team member {} deleted", id)
            }
            DashboardEvent::MemberDeleteFailed { id, error } => {
                log::error!(target: "dashboard::team", "deleting team member {} failed: {}", id, error)
            }
            DashboardEvent::UserCreated { id } => {
                log::info!(target: "dashboard::users", "user {} created", id)
            }
            DashboardEvent::UserCreateFailed { error } => {
                log::error!(target: "dashboard::users", "creating user failed: {}", error)
            }
        }
    }
}

/// Cloneable handle stored in Leptos context.
#[derive(Clone)]
pub struct Reporter(Arc<dyn EventReporter>);

impl Reporter {
    pub fn new(reporter: impl EventReporter + 'static) -> Self {
        Self(Arc::new(reporter))
    }

    pub fn from_shared(reporter: Arc<dyn EventReporter>) -> Self {
        Self(reporter)
    }

    pub fn report(&self, event: DashboardEvent) {
        self.0.report(event);
    }
}

/// Reporter from context; falls back to logging when none was provided.
pub fn use_reporter() -> Reporter {
    use_context::<Reporter>().unwrap_or_else(|| Reporter::new(LogReporter))
}
