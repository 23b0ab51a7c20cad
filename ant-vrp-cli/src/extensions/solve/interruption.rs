//! Interruption handler.

use ant_vrp_core::prelude::GenericError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Returns a flag which is raised on Ctrl-C. The handler is installed once per process, later
/// calls share the same flag.
pub fn create_interruption_flag() -> Result<Arc<AtomicBool>, GenericError> {
    static INSTALLED: Mutex<Option<Arc<AtomicBool>>> = Mutex::new(None);

    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(should_interrupt) = installed.as_ref() {
        return Ok(should_interrupt.clone());
    }

    let should_interrupt = Arc::new(AtomicBool::new(false));

    ctrlc::set_handler({
        let should_interrupt = should_interrupt.clone();
        move || {
            should_interrupt.store(true, Ordering::Relaxed);
        }
    })
    .map_err(|err| format!("cannot set interruption handler: '{err}'"))?;

    *installed = Some(should_interrupt.clone());

    Ok(should_interrupt)
}
