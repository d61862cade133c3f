//! Collected session data.

/// One measured run: a graph size and its execution time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Number of vertices in the measured graph.
    pub vertices: i64,
    /// Measured execution time in milliseconds.
    pub time_ms: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(vertices: i64, time_ms: f64) -> Self {
        Self { vertices, time_ms }
    }
}

/// Everything entered during the collection phase.
///
/// Samples keep their entry order; duplicate vertex counts are kept as
/// separate samples. The session is never mutated after collection.
#[derive(Debug, Clone)]
pub struct Session {
    /// Number of odd-degree vertices, shown in the chart title.
    pub odd_vertices: i64,
    /// Measured samples in entry order.
    pub samples: Vec<Sample>,
}

impl Session {
    /// Create a new session.
    pub fn new(odd_vertices: i64, samples: Vec<Sample>) -> Self {
        Self {
            odd_vertices,
            samples,
        }
    }

    /// Number of collected samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check whether no samples were collected.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
