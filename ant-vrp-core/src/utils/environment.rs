use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A seed used to derive repeatable random generators for every ant.
    pub seed: Option<u64>,

    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies whether detailed construction messages are logged.
    pub is_verbose: bool,
}

impl Environment {
    /// Creates an instance of `Environment` with optional seed and default logger.
    pub fn new_with_seed(seed: Option<u64>) -> Self {
        let random: Arc<dyn Random + Send + Sync> = match seed {
            Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
            None => Arc::new(DefaultRandom::default()),
        };

        Self { random, seed, ..Environment::default() }
    }

    /// Creates a random generator for the given stream (e.g. ant id). When environment is seeded,
    /// every stream gets its own repeatable sequence.
    pub fn random_for(&self, stream: usize) -> Arc<dyn Random + Send + Sync> {
        match self.seed {
            Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed.wrapping_add(stream as u64 + 1))),
            None => Arc::new(DefaultRandom::default()),
        }
    }

    /// Logs message only if environment is verbose.
    pub fn log_verbose(&self, message: impl FnOnce() -> String) {
        if self.is_verbose {
            (self.logger)(message().as_str())
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            random: Arc::new(DefaultRandom::default()),
            seed: None,
            logger: create_default_logger(),
            is_verbose: false,
        }
    }
}

/// Creates a logger which prints messages prefixed by the current thread's name to stdout.
pub fn create_default_logger() -> InfoLogger {
    Arc::new(|msg: &str| {
        let thread = std::thread::current();
        println!("[{}] {msg}", thread.name().unwrap_or("main"))
    })
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
