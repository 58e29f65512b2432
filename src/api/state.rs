//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::data::Dataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Static World Cup tables
    pub dataset: Arc<Dataset>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
    /// Number of open dashboard WebSocket sessions
    sessions: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig) -> Self {
        Self {
            dataset,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
            sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get open WebSocket session count
    pub fn session_count(&self) -> usize {
        self.sessions.load(Ordering::Relaxed)
    }

    /// Track a session for as long as the returned guard lives
    pub fn open_session(&self) -> SessionGuard {
        self.sessions.fetch_add(1, Ordering::Relaxed);
        SessionGuard {
            sessions: Arc::clone(&self.sessions),
        }
    }
}

/// Decrements the session count on drop
pub struct SessionGuard {
    sessions: Arc<AtomicUsize>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.sessions.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_guard_counts() {
        let state = AppState::new(
            Arc::new(Dataset::builtin().unwrap()),
            ServerConfig::default(),
        );
        assert_eq!(state.session_count(), 0);

        let a = state.open_session();
        let b = state.clone().open_session();
        assert_eq!(state.session_count(), 2);

        drop(a);
        assert_eq!(state.session_count(), 1);
        drop(b);
        assert_eq!(state.session_count(), 0);
    }
}
