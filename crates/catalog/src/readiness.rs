//! Live-store readiness tracking.
//!
//! The monitor holds the driver-style connection state in a shared atomic.
//! A background task pings the pool on an interval; the readiness endpoint
//! can also probe on demand. Reads consult [`StoreMonitor::is_ready`] to
//! choose between the live store and the fallback dataset.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use sqlx::PgPool;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Connection state of the live store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    Disconnected = 0,
    Connecting = 1,
    Connected = 2,
    Disconnecting = 3,
}

impl ConnectionState {
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Connecting,
            2 => Self::Connected,
            3 => Self::Disconnecting,
            _ => Self::Disconnected,
        }
    }

    /// Lowercase wire/log form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnecting => "disconnecting",
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared readiness monitor for the live store.
///
/// Cheaply cloneable; all clones observe the same state.
#[derive(Debug, Clone)]
pub struct StoreMonitor {
    state: Arc<AtomicU8>,
}

impl Default for StoreMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreMonitor {
    /// Create a monitor in the `Disconnected` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(AtomicU8::new(ConnectionState::Disconnected as u8)),
        }
    }

    /// Current connection state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Relaxed))
    }

    /// Whether live queries can currently be expected to succeed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    fn set(&self, state: ConnectionState) {
        self.state.store(state as u8, Ordering::Relaxed);
    }

    /// Probe the store once and update the state.
    ///
    /// A shutdown in progress (`Disconnecting`) is left untouched.
    pub async fn probe(&self, pool: &PgPool) -> ConnectionState {
        if self.state() == ConnectionState::Disconnecting {
            return ConnectionState::Disconnecting;
        }

        let next = match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => ConnectionState::Connected,
            Err(e) => {
                tracing::debug!(error = %e, "live store probe failed");
                ConnectionState::Disconnected
            }
        };
        self.set(next);
        next
    }

    /// Spawn a background task that keeps the state current.
    ///
    /// The first probe fires immediately; the task exits once
    /// [`Self::begin_shutdown`] has been called.
    pub fn spawn(&self, pool: PgPool, interval: Duration) -> JoinHandle<()> {
        let monitor = self.clone();
        tokio::spawn(async move {
            monitor.set(ConnectionState::Connecting);

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if monitor.state() == ConnectionState::Disconnecting {
                    break;
                }
                let state = monitor.probe(&pool).await;
                tracing::trace!(state = %state, "store monitor tick");
            }
        })
    }

    /// Mark the store as shutting down; the monitor task will stop.
    pub fn begin_shutdown(&self) {
        self.set(ConnectionState::Disconnecting);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_starts_disconnected() {
        let monitor = StoreMonitor::new();
        assert_eq!(monitor.state(), ConnectionState::Disconnected);
        assert!(!monitor.is_ready());
    }

    #[test]
    fn test_only_connected_is_ready() {
        let monitor = StoreMonitor::new();
        for state in [
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Disconnecting,
        ] {
            monitor.set(state);
            assert!(!monitor.is_ready());
        }
        monitor.set(ConnectionState::Connected);
        assert!(monitor.is_ready());
    }

    #[test]
    fn test_clones_share_state() {
        let monitor = StoreMonitor::new();
        let clone = monitor.clone();
        monitor.set(ConnectionState::Connected);
        assert!(clone.is_ready());
    }

    #[test]
    fn test_begin_shutdown() {
        let monitor = StoreMonitor::new();
        monitor.set(ConnectionState::Connected);
        monitor.begin_shutdown();
        assert_eq!(monitor.state(), ConnectionState::Disconnecting);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ConnectionState::Connected.to_string(), "connected");
        assert_eq!(ConnectionState::Disconnecting.to_string(), "disconnecting");
    }
}
