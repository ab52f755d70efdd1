//! Staged circular-queue commands
//!
//! A mutating command highlights its target slot, waits one cosmetic delay
//! and only then changes the queue. The delay is not a suspension point: it
//! cannot be superseded and the mutation always follows it.

use crate::run::Driver;
use crate::session::{format_array, Session};
use crate::snapshot::{Level, Panel, Role};
use crate::structures::StructureError;

impl Session {
    pub(crate) fn circular_enqueue(
        &mut self,
        driver: &mut dyn Driver,
        value: i32,
    ) -> Result<(), StructureError> {
        self.set_panel(Panel::CircularQueue);
        let Some(slot) = self.circular.next_rear() else {
            self.log(format!(
                "Queue Overflow! Cannot enqueue {value} - Queue is full"
            ));
            let occupied = self.circular.occupied();
            self.highlight([(Role::Occupied, &occupied)]);
            return Err(StructureError::Full {
                structure: "Circular Queue",
                capacity: self.circular.capacity(),
            });
        };

        self.highlight([(Role::Enqueue, &[slot])]);
        self.cosmetic_delay(driver, self.speed());

        let rear = self.circular.enqueue(value)?;
        self.mark_pointers();
        self.log(format!("Enqueued: {value} at position {rear}"));
        self.set_status(
            format!("Enqueued {value}. Count: {}", self.circular.count()),
            Level::Success,
        );
        Ok(())
    }

    pub(crate) fn circular_dequeue(
        &mut self,
        driver: &mut dyn Driver,
    ) -> Result<(), StructureError> {
        self.set_panel(Panel::CircularQueue);
        let Some(front) = self.circular.front() else {
            self.log("Queue Underflow! Cannot dequeue - Queue is empty");
            self.marks.clear();
            return Err(StructureError::Empty {
                structure: "Circular Queue",
            });
        };

        self.highlight([(Role::Dequeue, &[front])]);
        self.cosmetic_delay(driver, self.speed());

        let (value, slot) = self.circular.dequeue()?;
        self.mark_pointers();
        self.log(format!("Dequeued: {value} from position {slot}"));
        self.set_status(
            format!("Dequeued {value}. Count: {}", self.circular.count()),
            Level::Success,
        );
        Ok(())
    }

    /// Highlight and log the front or rear element
    pub(crate) fn circular_peek(&mut self, driver: &mut dyn Driver, front: bool) {
        self.set_panel(Panel::CircularQueue);
        let peeked = if front {
            self.circular.peek_front()
        } else {
            self.circular.peek_rear()
        };
        let Some((value, slot)) = peeked else {
            self.log("Queue is empty! Cannot peek");
            self.set_status("Queue is empty! Cannot peek", Level::Error);
            return;
        };

        let (role, label) = if front {
            (Role::Front, "Front")
        } else {
            (Role::Rear, "Rear")
        };
        self.highlight([(role, &[slot])]);
        self.log(format!("{label} element: {value} at position {slot}"));
        self.set_status(format!("{label} element is: {value}"), Level::Info);
        self.cosmetic_delay(driver, self.speed());
        self.marks.clear();
    }

    /// Report emptiness (`empty == true`) or fullness
    pub(crate) fn circular_check(&mut self, driver: &mut dyn Driver, empty: bool) {
        self.set_panel(Panel::CircularQueue);
        let (holds, word) = if empty {
            (self.circular.is_empty(), "EMPTY")
        } else {
            (self.circular.is_full(), "FULL")
        };

        let message = if holds {
            format!("Queue is {word}")
        } else {
            format!("Queue is NOT {}", word.to_ascii_lowercase())
        };
        if holds && !empty {
            let occupied = self.circular.occupied();
            self.highlight([(Role::Occupied, &occupied)]);
        } else {
            self.marks.clear();
        }
        self.log(message.clone());
        self.set_status(message, Level::Info);
        self.cosmetic_delay(driver, self.speed() * 2);
        self.marks.clear();
    }

    /// Log the contents front to rear and highlight occupied slots
    pub(crate) fn circular_show(&mut self, driver: &mut dyn Driver) {
        self.set_panel(Panel::CircularQueue);
        let values = self.circular.values();
        let listed = if values.is_empty() {
            "[Empty]".to_string()
        } else {
            format_array(&values)
        };
        self.log(format!("Queue elements: {listed}"));

        let occupied = self.circular.occupied();
        self.highlight([(Role::Occupied, &occupied)]);
        self.set_status(
            format!(
                "{} of {} slots used ({})",
                self.circular.count(),
                self.circular.capacity(),
                self.circular.state_label()
            ),
            Level::Info,
        );
        self.cosmetic_delay(driver, self.speed() * 3);
        self.marks.clear();
    }

    fn mark_pointers(&mut self) {
        self.marks.clear();
        if let Some(front) = self.circular.front() {
            self.marks.add(Role::Front, front);
        }
        if let Some(rear) = self.circular.rear() {
            self.marks.add(Role::Rear, rear);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::command::Command;
    use crate::config::Config;
    use crate::run::Immediate;
    use crate::session::Session;
    use crate::snapshot::Role;

    fn session(capacity: usize) -> Session {
        Session::new(&Config::new(100, 5, capacity, Some(1)))
    }

    #[test]
    fn test_capacity_three_wraps() {
        let mut session = session(3);
        for v in [1, 2, 3] {
            session
                .execute(Command::CircularEnqueue(v), &mut Immediate)
                .unwrap();
        }
        assert!(session.circular().is_full());
        assert!(session
            .execute(Command::CircularEnqueue(4), &mut Immediate)
            .is_err());
        assert_eq!(
            session.steps().last(),
            Some("Queue Overflow! Cannot enqueue 4 - Queue is full")
        );

        session.execute(Command::CircularDequeue, &mut Immediate).unwrap();
        assert_eq!(session.steps().last(), Some("Dequeued: 1 from position 0"));

        session
            .execute(Command::CircularEnqueue(4), &mut Immediate)
            .unwrap();
        assert_eq!(session.circular().rear(), Some(0));
        assert_eq!(session.circular().values(), vec![2, 3, 4]);
        assert!(session.marks().has(Role::Rear, 0));
        assert!(session.marks().has(Role::Front, 1));
    }

    #[test]
    fn test_dequeue_empty_is_rejected() {
        let mut session = session(5);
        let err = session
            .execute(Command::CircularDequeue, &mut Immediate)
            .unwrap_err();
        assert_eq!(err.to_string(), "Circular Queue is empty!");
        assert_eq!(
            session.steps().last(),
            Some("Queue Underflow! Cannot dequeue - Queue is empty")
        );
    }

    #[test]
    fn test_show_and_checks_leave_queue_alone() {
        let mut session = session(4);
        session
            .execute(Command::CircularEnqueue(9), &mut Immediate)
            .unwrap();
        session.execute(Command::CircularShow, &mut Immediate).unwrap();
        session
            .execute(Command::CircularCheckFull, &mut Immediate)
            .unwrap();
        session
            .execute(Command::CircularPeekRear, &mut Immediate)
            .unwrap();

        let steps = session.steps().entries();
        assert!(steps.iter().any(|s| s == "Queue elements: [9]"));
        assert!(steps.iter().any(|s| s == "Queue is NOT full"));
        assert_eq!(steps.last().map(String::as_str), Some("Rear element: 9 at position 0"));
        assert_eq!(session.circular().count(), 1);
        assert!(session.marks().is_empty());
    }

    #[test]
    fn test_init_clamps_capacity() {
        let mut session = session(8);
        session
            .execute(Command::CircularInit(Some(50)), &mut Immediate)
            .unwrap();
        assert_eq!(session.circular().capacity(), 15);
        session
            .execute(Command::CircularInit(None), &mut Immediate)
            .unwrap();
        assert_eq!(session.circular().capacity(), 8);
    }
}
