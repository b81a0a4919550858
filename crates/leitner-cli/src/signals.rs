// Rust guideline compliant 2026-10-19

//! Shutdown signal handling for long-running commands.
//!
//! Listeners are registered once and keep receiving for the life of the
//! value, so a signal delivered while the caller is busy is picked up by the
//! next `recv`.

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// The signal that requested shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// `SIGINT` or Ctrl-C.
    Interrupt,
    /// `SIGTERM`.
    Terminate,
}

impl ShutdownSignal {
    /// Returns the lowercase name of the signal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "interrupt",
            ShutdownSignal::Terminate => "terminate",
        }
    }
}

/// Registered listeners for interrupt and terminate signals.
///
/// Must be created inside a tokio runtime.
pub struct ShutdownSignals {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl ShutdownSignals {
    /// Registers the signal listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if a signal handler cannot be installed.
    #[cfg(unix)]
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    /// Registers the signal listeners.
    ///
    /// # Errors
    ///
    /// Never fails on this platform; Ctrl-C is registered lazily.
    #[cfg(not(unix))]
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {})
    }

    /// Waits for the next shutdown signal.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> ShutdownSignal {
        tokio::select! {
            _ = self.interrupt.recv() => ShutdownSignal::Interrupt,
            _ = self.terminate.recv() => ShutdownSignal::Terminate,
        }
    }

    /// Waits for the next shutdown signal.
    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> ShutdownSignal {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
        ShutdownSignal::Interrupt
    }
}
