//! Pseudo-random backends
//!
//! Both backends wrap the `rand` crate: `ThreadBackend` draws from the
//! thread-local RNG, `SeededBackend` wraps a `StdRng` behind a mutex so
//! a fixed seed reproduces the same coordinate sequence.

use crate::rng::RngBackend;
use rand::Rng;
use std::sync::Mutex;

/// Thread-local pseudo-random backend
pub struct ThreadBackend;

impl ThreadBackend {
    /// Create a new thread-local backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RngBackend for ThreadBackend {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn description(&self) -> &'static str {
        "Thread-local pseudo-random number generator"
    }

    fn floats(&self, n: usize) -> Vec<f64> {
        let mut rng = rand::thread_rng();
        (0..n).map(|_| rng.gen::<f64>()).collect()
    }
}

/// Seeded pseudo-random backend for deterministic runs
pub struct SeededBackend {
    rng: Mutex<rand::rngs::StdRng>,
}

impl SeededBackend {
    /// Create a new seeded backend
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl RngBackend for SeededBackend {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn description(&self) -> &'static str {
        "Seeded pseudo-random number generator (reproducible)"
    }

    fn floats(&self, n: usize) -> Vec<f64> {
        let mut rng = self.rng.lock().unwrap();
        (0..n).map(|_| rng.gen::<f64>()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_backend_floats() {
        let backend = ThreadBackend::new();
        let floats = backend.floats(100);
        assert_eq!(floats.len(), 100);
        for f in &floats {
            assert!(*f >= 0.0 && *f < 1.0);
        }
    }

    #[test]
    fn test_seeded_backend_reproducible() {
        let backend1 = SeededBackend::new(42);
        let backend2 = SeededBackend::new(42);
        assert_eq!(backend1.floats(100), backend2.floats(100));
    }

    #[test]
    fn test_seeded_backend_floats_in_range() {
        let backend = SeededBackend::new(12345);
        for f in backend.floats(1000) {
            assert!((0.0..1.0).contains(&f), "Float {} out of range [0, 1)", f);
        }
    }

    #[test]
    fn test_single_float() {
        let backend = SeededBackend::new(9);
        let f = backend.float();
        assert!((0.0..1.0).contains(&f));
    }
}
