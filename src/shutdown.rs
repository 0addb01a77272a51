//! Process shutdown signals.

use std::future::Future;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Ctrl-C / SIGINT.
    Interrupt,
    /// SIGTERM, e.g. a container stop.
    Terminate,
}

/// A future resolving once the process is asked to stop.
///
/// The SIGTERM handler is installed before this returns, so a signal arriving before the future
/// is first polled is not lost.
///
/// # Errors
///
/// Returns an IO error if the SIGTERM handler can't be installed.
pub fn signal() -> io::Result<impl Future<Output = Reason>> {
    #[cfg(unix)]
    let mut terminate =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    Ok(async move {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => Reason::Interrupt,
                _ = terminate.recv() => Reason::Terminate,
            }
        }
        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
            Reason::Interrupt
        }
    })
}
