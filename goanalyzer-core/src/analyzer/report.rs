use std::fmt;

/// A single finding produced by a [`Checker`](super::Checker).
pub trait Violation: fmt::Display {
    /// Summary text of a report with no violations.
    const ALL_CLEAR: &'static str;

    /// Stable machine-readable identifier of the violation kind.
    fn code(&self) -> &'static str;
}

/// Ordered, exhaustive list of the violations one checker found.
///
/// An empty report means the input passed every check. Violations are kept
/// in the order the checks ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<V> {
    violations: Vec<V>,
}

impl<V> Default for Report<V> {
    fn default() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl<V: Violation> Report<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: V) {
        self.violations.push(violation);
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[V] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<V> {
        self.violations
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// The all-clear text, or every message joined by single spaces.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            V::ALL_CLEAR.to_string()
        } else {
            self.messages().join(" ")
        }
    }
}

impl<V: Violation> From<Vec<V>> for Report<V> {
    fn from(violations: Vec<V>) -> Self {
        Self { violations }
    }
}

impl<V: Violation> fmt::Display for Report<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
