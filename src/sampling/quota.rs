//! Division of a global sample cap across streams.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuotaPolicy {
    /// `cap / streams` each, truncated, unused quota is not redistributed
    #[default]
    EvenSplit,
    /// Streams run in order; each gets `remaining / streams_left`
    CarryOver,
}

pub struct QuotaAllocator {
    cap: usize,
    policy: QuotaPolicy,
}

impl QuotaAllocator {
    pub fn new(cap: usize, policy: QuotaPolicy) -> Self {
        Self { cap, policy }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn policy(&self) -> QuotaPolicy {
        self.policy
    }

    /// Fixed per-stream quota table for the even-split policy.
    pub fn even_split(&self, num_streams: usize) -> Vec<usize> {
        if num_streams == 0 {
            return Vec::new();
        }
        vec![self.cap / num_streams; num_streams]
    }

    /// Quota for the next stream under carry-over.
    pub fn next_quota(remaining: usize, streams_left: usize) -> usize {
        if streams_left == 0 {
            return 0;
        }
        remaining / streams_left
    }
}

/// Running count against a hard cap.
#[derive(Debug, Clone)]
pub struct SampleBudget {
    cap: usize,
    used: usize,
}

impl SampleBudget {
    pub fn new(cap: usize) -> Self {
        Self { cap, used: 0 }
    }

    /// Grant up to `requested` samples and record them as used.
    pub fn grant(&mut self, requested: usize) -> usize {
        let granted = requested.min(self.remaining());
        self.used += granted;
        granted
    }

    pub fn remaining(&self) -> usize {
        self.cap - self.used
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split_truncates() {
        let allocator = QuotaAllocator::new(10, QuotaPolicy::EvenSplit);
        assert_eq!(allocator.even_split(3), vec![3, 3, 3]);
        assert_eq!(allocator.even_split(0), Vec::<usize>::new());
        assert_eq!(allocator.even_split(20), vec![0; 20]);
    }

    #[test]
    fn test_next_quota() {
        assert_eq!(QuotaAllocator::next_quota(10, 3), 3);
        assert_eq!(QuotaAllocator::next_quota(7, 2), 3);
        assert_eq!(QuotaAllocator::next_quota(4, 1), 4);
        assert_eq!(QuotaAllocator::next_quota(4, 0), 0);
    }

    #[test]
    fn test_budget() {
        let mut budget = SampleBudget::new(5);
        assert_eq!(budget.grant(3), 3);
        assert_eq!(budget.grant(3), 2);
        assert!(budget.is_exhausted());
        assert_eq!(budget.grant(1), 0);
        assert_eq!(budget.used(), 5);
    }
}
