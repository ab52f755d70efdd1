//! Linear and binary search.
//!
//! Both increment passes and comparisons once per iteration and suspend once
//! per iteration. Binary search works on a sorted copy shown on the canvas;
//! the committed array is left as it was.

use crate::run::{Animated, Driver, RunToken};
use crate::session::{format_array, Session};
use crate::snapshot::{Level, Role};

impl Session {
    pub(crate) fn linear_search(
        &mut self,
        driver: &mut dyn Driver,
        token: RunToken,
        target: i32,
    ) -> Animated {
        self.canvas = self.array.clone();
        self.log(format!("Starting Linear Search for value {target}"));
        self.log(format!("Array: {}", format_array(&self.canvas)));

        for i in 0..self.canvas.len() {
            let value = self.canvas[i];
            self.stats.pass();
            self.stats.compare();
            self.highlight([(Role::Active, &[i])]);
            self.log(format!("Checking element at index {i}: {value}"));
            self.suspend(driver, token)?;

            if value == target {
                self.highlight([(Role::Found, &[i])]);
                self.log(format!("✅ Found {target} at index {i}!"));
                self.set_status(format!("Found {target} at index {i}"), Level::Success);
                return Ok(());
            }
            self.log(format!("❌ {value} ≠ {target}, moving to next element"));
        }

        self.report_missing(target);
        Ok(())
    }

    pub(crate) fn binary_search(
        &mut self,
        driver: &mut dyn Driver,
        token: RunToken,
        target: i32,
    ) -> Animated {
        self.canvas = self.array.clone();
        self.canvas.sort_unstable();
        self.log(format!("Starting Binary Search for value {target}"));
        self.log(format!(
            "Sorted Array: {} (Binary search requires sorted array)",
            format_array(&self.canvas)
        ));

        // Signed bounds: `right` drops to -1 when the target is below every element
        let mut left: i64 = 0;
        let mut right = self.canvas.len() as i64 - 1;

        while left <= right {
            let mid = (left + right) / 2;
            let value = self.canvas[mid as usize];
            self.stats.pass();
            self.stats.compare();
            self.highlight([
                (Role::Active, &[mid as usize]),
                (Role::Comparing, &[left as usize, right as usize]),
            ]);
            self.log(format!(
                "Search range: [{left}..{right}], Mid index: {mid}, Mid value: {value}"
            ));
            self.suspend(driver, token)?;

            if value == target {
                self.highlight([(Role::Found, &[mid as usize])]);
                self.log(format!("✅ Found {target} at index {mid}!"));
                self.set_status(format!("Found {target} at index {mid}"), Level::Success);
                return Ok(());
            } else if value < target {
                self.log(format!(
                    "{value} < {target}, searching right half [{}..{right}]",
                    mid + 1
                ));
                left = mid + 1;
            } else {
                self.log(format!(
                    "{value} > {target}, searching left half [{left}..{}]",
                    mid - 1
                ));
                right = mid - 1;
            }
        }

        self.report_missing(target);
        Ok(())
    }

    fn report_missing(&mut self, target: i32) {
        self.marks.clear();
        self.log(format!("❌ Value {target} not found in array"));
        self.set_status(format!("{target} not found in array"), Level::Error);
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, SearchKind};
    use crate::config::Config;
    use crate::run::Immediate;
    use crate::session::Session;
    use crate::snapshot::{Level, Role};

    fn session() -> Session {
        Session::with_array(&Config::default(), vec![9, 4, 7, 1, 3])
    }

    #[test]
    fn test_linear_search_stops_at_first_match() {
        let mut session = session();
        session
            .execute(Command::Search(SearchKind::Linear, 7), &mut Immediate)
            .unwrap();

        assert_eq!(session.stats().comparisons, 3);
        assert!(session.marks().has(Role::Found, 2));
        assert_eq!(session.status().message, "Found 7 at index 2");
    }

    #[test]
    fn test_binary_search_keeps_committed_array() {
        let mut session = session();
        session
            .execute(Command::Search(SearchKind::Binary, 9), &mut Immediate)
            .unwrap();

        assert_eq!(session.canvas(), &[1, 3, 4, 7, 9]);
        assert_eq!(session.array(), &[9, 4, 7, 1, 3]);
        assert_eq!(session.stats().comparisons, 3);
        assert_eq!(session.status().level, Level::Success);
    }

    #[test]
    fn test_binary_search_below_every_element() {
        let mut session = session();
        session
            .execute(Command::Search(SearchKind::Binary, 0), &mut Immediate)
            .unwrap();

        assert_eq!(session.stats().passes, 2);
        assert_eq!(session.status().message, "0 not found in array");
        assert_eq!(
            session.steps().last(),
            Some("❌ Value 0 not found in array")
        );
    }
}
