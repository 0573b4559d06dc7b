//! Simulation statistics.

use std::fmt;

use crate::engine::trace::Trace;

/// Aggregate statistics derived from a [`Trace`].
///
/// The hit ratio is carried as a pre-formatted string with one decimal
/// place, matching what a display layer prints ("30.8"). A trace with no
/// steps reports the literal `"0"` rather than dividing by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Total page faults.
    pub faults: usize,

    /// Total page hits.
    pub hits: usize,

    /// `hits / (hits + faults) * 100`, one decimal place; `"0"` when the
    /// trace is empty.
    pub hit_ratio_percent: String,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary {{ faults: {}, hits: {}, hit_ratio: {}% }}",
            self.faults, self.hits, self.hit_ratio_percent
        )
    }
}

/// Compute aggregate statistics for a trace.
///
/// Pure function: no state, no side effects.
pub fn summarize(trace: &Trace) -> Summary {
    Summary {
        faults: trace.fault_count,
        hits: trace.hit_count,
        hit_ratio_percent: hit_ratio_percent(trace.hit_count, trace.fault_count),
    }
}

fn hit_ratio_percent(hits: usize, faults: usize) -> String {
    let total = hits + faults;
    if total == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", hits as f64 / total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_with_counts(faults: usize, hits: usize) -> Trace {
        Trace {
            steps: Vec::new(),
            fault_count: faults,
            hit_count: hits,
        }
    }

    #[test]
    fn test_summarize_basic() {
        let summary = summarize(&trace_with_counts(9, 4));
        assert_eq!(summary.faults, 9);
        assert_eq!(summary.hits, 4);
        assert_eq!(summary.hit_ratio_percent, "30.8");
    }

    #[test]
    fn test_summarize_empty_trace() {
        let summary = summarize(&Trace::default());
        assert_eq!(summary.faults, 0);
        assert_eq!(summary.hits, 0);
        assert_eq!(summary.hit_ratio_percent, "0");
    }

    #[test]
    fn test_summarize_all_hits() {
        let summary = summarize(&trace_with_counts(0, 5));
        assert_eq!(summary.hit_ratio_percent, "100.0");
    }

    #[test]
    fn test_summarize_all_faults() {
        let summary = summarize(&trace_with_counts(8, 0));
        assert_eq!(summary.hit_ratio_percent, "0.0");
    }

    #[test]
    fn test_summary_display() {
        let summary = summarize(&trace_with_counts(10, 3));
        let display = format!("{}", summary);

        assert!(display.contains("faults: 10"));
        assert!(display.contains("hits: 3"));
        assert!(display.contains("23.1%"));
    }
}
