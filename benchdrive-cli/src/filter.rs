//! Benchmark Name Filter
//!
//! Positional arguments select benchmarks by name prefix.

/// Selects benchmarks whose name starts with any of the given prefixes.
/// No prefixes selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkFilter {
    prefixes: Vec<String>,
}

impl BenchmarkFilter {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Case-sensitive, byte-wise prefix match
    pub fn selects(&self, name: &str) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_selects_everything() {
        let filter = BenchmarkFilter::default();
        assert!(filter.is_empty());
        assert!(filter.selects("fib 10"));
        assert!(filter.selects(""));
    }

    #[test]
    fn matches_by_prefix() {
        let filter = BenchmarkFilter::new(vec!["fib".to_string()]);
        assert!(!filter.is_empty());
        assert!(filter.selects("fib 10"));
        assert!(filter.selects("fib 35"));
        assert!(!filter.selects("sort 100"));
    }

    #[test]
    fn any_prefix_is_enough() {
        let filter = BenchmarkFilter::new(vec!["sort".to_string(), "fib 3".to_string()]);
        assert!(filter.selects("fib 35"));
        assert!(!filter.selects("fib 10"));
        assert!(filter.selects("sort 100"));
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let filter = BenchmarkFilter::new(vec!["Fib".to_string()]);
        assert!(!filter.selects("fib 10"));
        assert!(!filter.selects("a fib"));
    }
}
