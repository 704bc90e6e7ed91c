//! RNG backends for the report simulator
//!
//! The simulator never draws from an implicit global generator; callers
//! hand it an explicit `RngBackend` so tests and demos can seed the
//! sequence and reproduce a run exactly.

pub mod pseudo;

/// Trait for random number backends
///
/// Implementations must be thread-safe (Send + Sync) to work with the
/// async server.
pub trait RngBackend: Send + Sync {
    /// Returns the backend name (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this backend
    fn description(&self) -> &'static str;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    fn float(&self) -> f64 {
        self.floats(1)[0]
    }

    /// Generate n random floats, each uniformly distributed in [0.0, 1.0)
    fn floats(&self, n: usize) -> Vec<f64>;
}

/// Get a backend, seeded when a seed is supplied
pub fn get_backend(seed: Option<u64>) -> Box<dyn RngBackend> {
    match seed {
        Some(seed) => Box::new(pseudo::SeededBackend::new(seed)),
        None => Box::new(pseudo::ThreadBackend::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_backend_unseeded() {
        let backend = get_backend(None);
        assert_eq!(backend.name(), "thread");
    }

    #[test]
    fn test_get_backend_seeded() {
        let backend = get_backend(Some(7));
        assert_eq!(backend.name(), "seeded");
    }
}
