//! Structured logging module for the Green Scheduler shell
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured fields so log lines stay greppable.

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    NavValidation,
    RouteResolve,
    ViewportTracking,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::NavValidation => "nav_validation",
            LogOperation::RouteResolve => "route_resolve",
            LogOperation::ViewportTracking => "viewport_tracking",
        }
    }
}

/// Log a navigation entry rejected during model construction
pub fn log_nav_entry_dropped(label: &str, path: &str, reason: &str) {
    tracing::warn!(
        operation = LogOperation::NavValidation.as_str(),
        label = label,
        path = path,
        reason = reason,
        "Dropped malformed navigation entry"
    );
}

/// Log the final navigation entry count after validation
pub fn log_nav_ready(count: usize) {
    if count == 0 {
        tracing::warn!(
            operation = LogOperation::NavValidation.as_str(),
            "Navigation model is empty; sidebar will render without entries"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::NavValidation.as_str(),
            entry_count = count,
            "Navigation model ready"
        );
    }
}

/// Log a route change as seen by the shell
pub fn log_route_change(path: &str) {
    tracing::debug!(
        operation = LogOperation::RouteResolve.as_str(),
        path = path,
        "Route changed"
    );
}

/// Log a failure to attach the viewport resize listener
pub fn log_viewport_listener_failed() {
    tracing::warn!(
        operation = LogOperation::ViewportTracking.as_str(),
        "Could not attach resize listener; layout mode frozen at initial width"
    );
}
