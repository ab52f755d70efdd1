/// Counters shown next to the visualization.
///
/// Reset at the start of every run and only ever incremented while it lasts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
    pub passes: u64,
    pub rotations: u64,
}

impl Stats {
    pub fn reset(&mut self) {
        *self = Stats::default();
    }

    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    /// Counts an exchange, or a shift in insertion sort
    pub fn swap(&mut self) {
        self.swaps += 1;
    }

    pub fn pass(&mut self) {
        self.passes += 1;
    }

    /// Counts single rotations; a double rotation counts as two
    pub fn rotate(&mut self, count: u64) {
        self.rotations += count;
    }
}
