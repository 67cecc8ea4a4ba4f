//! User interruption (Ctrl-C) support.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::error::{Error, Result};

/// Shared flag raised when the user asks the run to stop.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Create a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether the flag has been raised.
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Error::Interrupted)` once the flag is raised.
    pub fn check(&self) -> Result<()> {
        if self.is_raised() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Spawn a helper thread that raises the returned flag on Ctrl-C.
///
/// The thread runs a single-threaded tokio runtime that only waits for the
/// signal; the scenario run itself stays synchronous.
pub fn install_ctrl_c_handler() -> io::Result<InterruptFlag> {
    let flag = InterruptFlag::new();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let raised = flag.clone();
    thread::Builder::new()
        .name("ctrl-c".into())
        .spawn(move || {
            runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        log::info!("interrupt received");
                        raised.raise();
                    }
                    Err(e) => log::warn!("cannot listen for Ctrl-C: {}", e),
                }
            });
        })?;

    Ok(flag)
}
