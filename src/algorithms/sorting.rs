//! Comparison sorts.
//!
//! Every sort works on `canvas`, a private copy of the committed array, and
//! writes the result back to `array` only after its last step. A superseded
//! sort therefore never alters the committed array.

use crate::command::SortKind;
use crate::run::{Animated, Driver, RunToken};
use crate::session::{format_array, Session};
use crate::snapshot::{Level, Role};

impl Session {
    pub(crate) fn bubble_sort(&mut self, driver: &mut dyn Driver, token: RunToken) -> Animated {
        self.canvas = self.array.clone();
        let n = self.canvas.len();
        self.log(format!(
            "Starting Bubble Sort on array: {}",
            format_array(&self.canvas)
        ));

        for i in 0..n.saturating_sub(1) {
            self.stats.pass();
            self.log(format!(
                "Pass {}: Looking for largest element in remaining array",
                i + 1
            ));
            let settled: Vec<usize> = (n - i..n).collect();

            for j in 0..n - i - 1 {
                let (a, b) = (self.canvas[j], self.canvas[j + 1]);
                self.stats.compare();
                self.highlight([(Role::Comparing, &[j, j + 1]), (Role::Sorted, &settled)]);
                self.log(format!(
                    "Comparing elements at index {j} ({a}) and {} ({b})",
                    j + 1
                ));
                self.suspend(driver, token)?;

                if a > b {
                    self.highlight([(Role::Swapping, &[j, j + 1]), (Role::Sorted, &settled)]);
                    self.log(format!("Swapping {a} and {b} because {a} > {b}"));
                    self.suspend(driver, token)?;

                    self.canvas.swap(j, j + 1);
                    self.stats.swap();
                    self.log(format!("After swap: arr[{j}] = {b}, arr[{}] = {a}", j + 1));
                    self.suspend(driver, token)?;
                } else {
                    self.log(format!("No swap needed ({a} ≤ {b})"));
                }
            }

            let position = n - i - 1;
            let sorted: Vec<usize> = (position..n).collect();
            self.highlight([(Role::Sorted, &sorted)]);
            self.log(format!(
                "Element {} is now in its correct position at index {position}",
                self.canvas[position]
            ));
            self.suspend(driver, token)?;
        }

        self.complete_sort(SortKind::Bubble);
        Ok(())
    }

    pub(crate) fn selection_sort(&mut self, driver: &mut dyn Driver, token: RunToken) -> Animated {
        self.canvas = self.array.clone();
        let n = self.canvas.len();
        self.log(format!(
            "Starting Selection Sort on array: {}",
            format_array(&self.canvas)
        ));

        for i in 0..n.saturating_sub(1) {
            self.stats.pass();
            self.log(format!(
                "Pass {}: Finding minimum element from index {i} to {}",
                i + 1,
                n - 1
            ));
            let placed: Vec<usize> = (0..i).collect();
            let mut min = i;

            for j in i + 1..n {
                self.stats.compare();
                self.highlight([
                    (Role::Active, &[min]),
                    (Role::Comparing, &[j]),
                    (Role::Sorted, &placed),
                ]);
                self.log(format!(
                    "Comparing current min {} with {}",
                    self.canvas[min], self.canvas[j]
                ));
                self.suspend(driver, token)?;

                if self.canvas[j] < self.canvas[min] {
                    min = j;
                    self.highlight([(Role::Active, &[min]), (Role::Sorted, &placed)]);
                    self.log(format!(
                        "New minimum found: {} at index {min}",
                        self.canvas[min]
                    ));
                    self.suspend(driver, token)?;
                }
            }

            if min != i {
                let (a, b) = (self.canvas[i], self.canvas[min]);
                self.highlight([(Role::Swapping, &[i, min]), (Role::Sorted, &placed)]);
                self.log(format!(
                    "Swapping {a} (index {i}) with minimum {b} (index {min})"
                ));
                self.suspend(driver, token)?;

                self.canvas.swap(i, min);
                self.stats.swap();
                self.log(format!("After swap: arr[{i}] = {b}, arr[{min}] = {a}"));
                self.suspend(driver, token)?;
            } else {
                self.log(format!("Minimum is already at correct position (index {i})"));
            }

            let sorted: Vec<usize> = (0..=i).collect();
            self.highlight([(Role::Sorted, &sorted)]);
            self.log(format!(
                "Element {} is now in correct position at index {i}",
                self.canvas[i]
            ));
            self.suspend(driver, token)?;
        }

        self.complete_sort(SortKind::Selection);
        Ok(())
    }

    /// Insertion sort; each shift counts as a swap
    pub(crate) fn insertion_sort(&mut self, driver: &mut dyn Driver, token: RunToken) -> Animated {
        self.canvas = self.array.clone();
        let n = self.canvas.len();
        self.log(format!(
            "Starting Insertion Sort on array: {}",
            format_array(&self.canvas)
        ));

        for i in 1..n {
            self.stats.pass();
            let key = self.canvas[i];
            let prefix: Vec<usize> = (0..i).collect();
            self.log(format!(
                "Pass {i}: Inserting element {key} into sorted subarray [0..{}]",
                i - 1
            ));
            self.highlight([(Role::Active, &[i]), (Role::Sorted, &prefix)]);
            self.suspend(driver, token)?;

            let mut j = i;
            while j > 0 {
                let previous = self.canvas[j - 1];
                self.stats.compare();
                if previous <= key {
                    self.log(format!("{previous} ≤ {key}, stop shifting"));
                    break;
                }

                self.highlight([(Role::Active, &[j - 1, j]), (Role::Sorted, &prefix)]);
                self.log(format!(
                    "Shifting {previous} to position {j} because {previous} > {key}"
                ));
                self.suspend(driver, token)?;

                self.canvas[j] = previous;
                self.stats.swap();
                j -= 1;
            }

            self.canvas[j] = key;
            let sorted: Vec<usize> = (0..=i).collect();
            self.highlight([(Role::Active, &[j]), (Role::Sorted, &sorted)]);
            self.log(format!("Inserted {key} at position {j}"));
            self.suspend(driver, token)?;
        }

        self.complete_sort(SortKind::Insertion);
        Ok(())
    }

    /// Mark everything sorted and commit the working copy
    fn complete_sort(&mut self, kind: SortKind) {
        let all: Vec<usize> = (0..self.canvas.len()).collect();
        self.highlight([(Role::Sorted, &all)]);
        self.log(format!(
            "{} completed! Array is sorted: {}",
            kind.name(),
            format_array(&self.canvas)
        ));
        self.array = self.canvas.clone();
        self.set_status(format!("{} completed successfully!", kind.name()), Level::Success);
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, SortKind};
    use crate::config::Config;
    use crate::run::Immediate;
    use crate::session::Session;

    fn sorted_by(kind: SortKind, values: Vec<i32>) -> Session {
        let mut session = Session::with_array(&Config::default(), values);
        session.execute(Command::Sort(kind), &mut Immediate).unwrap();
        session
    }

    #[test]
    fn test_bubble_sort_scenario() {
        let session = sorted_by(SortKind::Bubble, vec![5, 1, 4, 2, 8]);
        assert_eq!(session.array(), &[1, 2, 4, 5, 8]);
        assert_eq!(session.stats().passes, 4);
        assert_eq!(session.stats().comparisons, 10);
        assert_eq!(session.stats().swaps, 4);
        assert_eq!(
            session.steps().last(),
            Some("Bubble Sort completed! Array is sorted: [1, 2, 4, 5, 8]")
        );
    }

    #[test]
    fn test_selection_sort_equal_elements() {
        let session = sorted_by(SortKind::Selection, vec![3, 3, 1, 3]);
        assert_eq!(session.array(), &[1, 3, 3, 3]);
        assert_eq!(session.stats().passes, 3);
        assert_eq!(session.stats().swaps, 1);
    }

    #[test]
    fn test_insertion_sort_counts_shifts() {
        let session = sorted_by(SortKind::Insertion, vec![4, 3, 2, 1]);
        assert_eq!(session.array(), &[1, 2, 3, 4]);
        assert_eq!(session.stats().swaps, 6);
        assert_eq!(session.stats().passes, 3);
    }

    #[test]
    fn test_sorted_input_needs_no_swaps() {
        for kind in [SortKind::Bubble, SortKind::Insertion, SortKind::Selection] {
            let session = sorted_by(kind, vec![1, 2, 3, 4, 5]);
            assert_eq!(session.stats().swaps, 0, "{:?}", kind);
            assert_eq!(session.array(), &[1, 2, 3, 4, 5]);
        }
    }
}
