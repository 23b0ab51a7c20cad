
use crate::utils::{Environment, InfoLogger};
use std::sync::{Arc, Mutex};

pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment { logger: Arc::new(|_| {}), ..Environment::new_with_seed(Some(0)) })
}

pub fn create_test_environment_with_random(random: Arc<dyn crate::utils::Random + Send + Sync>) -> Arc<Environment> {
    Arc::new(Environment { random, logger: Arc::new(|_| {}), ..Environment::default() })
}

/// Creates a logger which keeps all messages.
pub fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = Arc::new({
        let messages = messages.clone();
        move |msg: &str| messages.lock().unwrap().push(msg.to_string())
    });

    (logger, messages)
}
