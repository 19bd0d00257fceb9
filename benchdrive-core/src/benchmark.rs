//! Benchmark Definitions

use std::fmt;

type Routine = Box<dyn Fn(u64) + Send + Sync>;

/// A named routine. The measurement stage calls it with an iteration count.
pub struct Benchmark {
    name: String,
    routine: Routine,
}

impl Benchmark {
    pub fn new(name: impl Into<String>, routine: impl Fn(u64) + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            routine: Box::new(routine),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the routine `iterations` times
    pub fn run(&self, iterations: u64) {
        (self.routine)(iterations)
    }
}

impl fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Benchmark").field("name", &self.name).finish_non_exhaustive()
    }
}
