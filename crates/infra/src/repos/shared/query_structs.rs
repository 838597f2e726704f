/// Inclusive time window in millis used by the due-event queries. An event
/// scheduled exactly at `end` is still a candidate.
#[derive(Debug, Clone, Copy)]
pub struct DueWindow {
    pub start: i64,
    pub end: i64,
}

impl DueWindow {
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn window_bounds_are_inclusive() {
        let window = DueWindow { start: 100, end: 200 };
        assert!(window.contains(100));
        assert!(window.contains(200));
        assert!(!window.contains(99));
        assert!(!window.contains(201));
    }
}
