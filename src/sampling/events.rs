use crate::data::Stream;

/// Sorted positions of every sample whose event flag is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex(Vec<usize>);

impl EventIndex {
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Number of events in `[start, end)`
    pub fn count_in(&self, start: usize, end: usize) -> usize {
        if end <= start {
            return 0;
        }
        let lo = self.0.partition_point(|&p| p < start);
        let hi = self.0.partition_point(|&p| p < end);
        hi - lo
    }

    pub fn contains_any(&self, start: usize, end: usize) -> bool {
        self.count_in(start, end) > 0
    }
}

pub fn locate_events(stream: &Stream) -> EventIndex {
    EventIndex(
        stream
            .samples()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.event)
            .map(|(i, _)| i)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_events_ordered() {
        let stream = Stream::synthetic("s", 10, 100, &[70, 3, 42]);
        let events = locate_events(&stream);
        assert_eq!(events.positions(), &[3, 42, 70]);
    }

    #[test]
    fn test_no_events() {
        let stream = Stream::synthetic("s", 10, 100, &[]);
        assert!(locate_events(&stream).is_empty());
    }

    #[test]
    fn test_count_in_range() {
        let stream = Stream::synthetic("s", 10, 100, &[10, 20, 30]);
        let events = locate_events(&stream);
        assert_eq!(events.count_in(0, 10), 0);
        assert_eq!(events.count_in(10, 11), 1);
        assert_eq!(events.count_in(10, 31), 3);
        assert_eq!(events.count_in(21, 30), 0);
        assert_eq!(events.count_in(50, 40), 0);
        assert!(events.contains_any(15, 25));
    }
}
