/// Acceptance rule applied against the previously accepted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRule {
    /// Candidate must start strictly after the previous window's end. Before
    /// any acceptance the end is taken as 0, so a window starting at 0 is refused.
    Strict,
    /// Candidate must lie at least this many samples away from the previous
    /// window, on either side of it. Candidates may arrive in any order.
    MinDistance(usize),
}

/// Greedy single-pass cursor over one stream and one label class.
///
/// Only the immediately preceding accepted window is remembered. Candidates
/// are judged in the order they are offered.
#[derive(Debug, Clone)]
pub struct OverlapGuard {
    rule: GuardRule,
    last: Option<(usize, usize)>,
}

impl OverlapGuard {
    pub fn strict() -> Self {
        Self {
            rule: GuardRule::Strict,
            last: None,
        }
    }

    pub fn min_distance(distance: usize) -> Self {
        Self {
            rule: GuardRule::MinDistance(distance),
            last: None,
        }
    }

    /// Accept `[start, end)` and advance the cursor, or reject it untouched.
    pub fn accept(&mut self, start: usize, end: usize) -> bool {
        let ok = match (self.last, self.rule) {
            (None, GuardRule::Strict) => start > 0,
            (None, GuardRule::MinDistance(_)) => true,
            (Some((_, last_end)), GuardRule::Strict) => start > last_end,
            (Some((last_start, last_end)), GuardRule::MinDistance(d)) => {
                start >= last_end + d || end + d <= last_start
            }
        };

        if ok {
            self.last = Some((start, end));
        }
        ok
    }

    pub fn last_accepted(&self) -> Option<(usize, usize)> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_guard() {
        let mut guard = OverlapGuard::strict();
        assert!(guard.accept(10, 20));
        assert!(!guard.accept(15, 25));
        assert!(!guard.accept(20, 30));
        assert!(guard.accept(21, 31));
        assert_eq!(guard.last_accepted(), Some((21, 31)));
    }

    #[test]
    fn test_strict_guard_refuses_window_at_origin() {
        let mut guard = OverlapGuard::strict();
        assert!(!guard.accept(0, 10));
        assert_eq!(guard.last_accepted(), None);
        assert!(guard.accept(1, 11));

        let mut guard = OverlapGuard::min_distance(0);
        assert!(guard.accept(0, 10));
    }

    #[test]
    fn test_rejection_keeps_cursor() {
        let mut guard = OverlapGuard::strict();
        assert!(guard.accept(10, 20));
        assert!(!guard.accept(5, 15));
        assert_eq!(guard.last_accepted(), Some((10, 20)));
    }

    #[test]
    fn test_min_distance_guard() {
        let mut guard = OverlapGuard::min_distance(5);
        assert!(guard.accept(100, 110));
        assert!(!guard.accept(112, 122));
        assert!(guard.accept(115, 125));
        // Before the previous window, with enough room
        assert!(guard.accept(50, 60));
        assert!(!guard.accept(56, 66));
    }

    #[test]
    fn test_zero_distance_still_rejects_overlap() {
        let mut guard = OverlapGuard::min_distance(0);
        assert!(guard.accept(0, 10));
        assert!(!guard.accept(5, 15));
        assert!(guard.accept(10, 20));
    }
}
