//! Unrecoverable failure
//!
//! `halt` is the designated way to stop when an invariant the caller has
//! proven cannot break does break. It is not an error return: control never
//! comes back and this layer performs no cleanup.
//!
//! By default the failure is a panic, so release builds with
//! `panic = "abort"` terminate the process. With the `abort-on-halt`
//! feature the process is aborted directly, whatever the panic strategy.

use std::fmt::Display;

/// Logs `message` and terminates.
#[cold]
#[track_caller]
pub fn halt(message: impl Display) -> ! {
    log::error!("halt: {}", message);

    terminate(message)
}

#[cfg(not(feature = "abort-on-halt"))]
#[track_caller]
fn terminate(message: impl Display) -> ! {
    panic!("{}", message)
}

#[cfg(feature = "abort-on-halt")]
fn terminate(_message: impl Display) -> ! {
    std::process::abort()
}
