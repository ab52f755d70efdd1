//! Command dispatch
//!
//! [`Session::execute`] is the single entry point for user actions. Animated
//! commands claim a run through [`Session::start_run`] and are handed to the
//! engines in [`crate::algorithms`]; everything else completes immediately.

use super::errors::CommandError;
use super::Session;
use crate::command::{Command, SearchKind, SortKind, TreeKind};
use crate::config::clamp_speed;
use crate::listing;
use crate::run::{Animated, Driver, RunToken, Superseded};
use crate::snapshot::{Level, Panel};
use crate::structures::{avl, circular::CircularQueue, StructureError};
use tracing::{debug, info};

impl Session {
    /// Run one command to completion.
    ///
    /// Animated commands return once their run completes or is superseded.
    /// A rejected command leaves the session untouched apart from the status
    /// line, which shows the error.
    pub fn execute(
        &mut self,
        command: Command,
        driver: &mut dyn Driver,
    ) -> Result<(), CommandError> {
        debug!(?command, "executing command");
        let result = self.dispatch(command, driver);
        if let Err(err) = &result {
            debug!(%err, "command rejected");
            self.set_status(err.to_string(), Level::Error);
        }
        result
    }

    /// Parse and run one line of input
    pub fn execute_line(
        &mut self,
        line: &str,
        driver: &mut dyn Driver,
    ) -> Result<(), CommandError> {
        match Command::parse(line) {
            Ok(command) => self.execute(command, driver),
            Err(err) => {
                self.set_status(err.to_string(), Level::Error);
                Err(err)
            }
        }
    }

    fn dispatch(
        &mut self,
        command: Command,
        driver: &mut dyn Driver,
    ) -> Result<(), CommandError> {
        match command {
            Command::Generate(size) => self.generate(size),
            Command::Sort(kind) => {
                let code = listing::for_sort(kind);
                self.animate(driver, Panel::Array, code, |session, driver, token| match kind {
                    SortKind::Bubble => session.bubble_sort(driver, token),
                    SortKind::Selection => session.selection_sort(driver, token),
                    SortKind::Insertion => session.insertion_sort(driver, token),
                });
            }
            Command::Search(kind, target) => {
                let code = listing::for_search(kind);
                self.animate(driver, Panel::Array, code, |session, driver, token| match kind {
                    SearchKind::Linear => session.linear_search(driver, token, target),
                    SearchKind::Binary => session.binary_search(driver, token, target),
                });
            }
            Command::Stop => {
                self.control.stop();
                self.set_status("Paused", Level::Info);
            }
            Command::Resume => {
                self.control.resume();
                self.set_status("Resumed", Level::Info);
            }
            Command::Reset => self.reset(),
            Command::Speed(ms) => {
                self.control.set_speed(clamp_speed(ms));
                self.set_status(
                    format!("Speed set to {} ms per step", self.speed().as_millis()),
                    Level::Info,
                );
            }
            Command::Show(panel) => self.set_panel(panel),

            Command::Push(value) => self.push(value)?,
            Command::Pop => self.pop()?,
            Command::Peek => self.peek()?,
            Command::Enqueue(value) => self.enqueue(value)?,
            Command::Dequeue => self.dequeue()?,
            Command::Front => self.front()?,

            Command::ListAdd(value) => self.list_add(value, false),
            Command::ListAddFirst(value) => self.list_add(value, true),
            Command::ListRemove(value) => self.list_remove(value)?,
            Command::ListRemoveFirst => self.list_remove_end(true)?,
            Command::ListRemoveLast => self.list_remove_end(false)?,
            Command::ListSearch(value) => self.list_search(value)?,
            Command::ListClear => {
                self.set_panel(Panel::LinkedList);
                self.list.clear();
                self.steps.clear();
                self.set_status("Linked List cleared", Level::Info);
            }

            Command::CircularInit(capacity) => self.circular_init(capacity),
            Command::CircularEnqueue(value) => self.circular_enqueue(driver, value)?,
            Command::CircularDequeue => self.circular_dequeue(driver)?,
            Command::CircularPeekFront => self.circular_peek(driver, true),
            Command::CircularPeekRear => self.circular_peek(driver, false),
            Command::CircularCheckEmpty => self.circular_check(driver, true),
            Command::CircularCheckFull => self.circular_check(driver, false),
            Command::CircularShow => self.circular_show(driver),
            Command::CircularReset => {
                self.set_panel(Panel::CircularQueue);
                self.circular.reset();
                self.marks.clear();
                self.log("Circular Queue has been reset");
                self.set_status("Circular Queue has been reset", Level::Info);
            }

            Command::TreeInsert(kind, values) => {
                let panel = kind.panel();
                let code = listing::for_panel(panel);
                self.animate(driver, panel, code, |session, driver, token| {
                    session.tree_insert(driver, token, kind, &values)
                });
            }
            Command::TreeDelete(kind, value) => self.tree_delete(kind, value),
            Command::TreeReset(kind) => {
                self.set_panel(kind.panel());
                self.tree_mut(kind).clear();
                self.marks.clear();
                let message = format!("{} reset successfully", kind.name());
                self.log(message.clone());
                self.set_status(message, Level::Info);
            }
            Command::BstSearch(value) => {
                self.animate(driver, Panel::Bst, listing::BST, |session, driver, token| {
                    session.bst_search(driver, token, value)
                });
            }
            Command::BstTraverse(order) => {
                self.animate(driver, Panel::Bst, listing::BST, |session, driver, token| {
                    session.bst_traverse(driver, token, order)
                });
            }
            Command::AvlCheckBalance => self.avl_check_balance(),
            Command::AvlCases => {
                self.set_panel(Panel::Avl);
                self.log("Rotation Examples:");
                for (number, rotation) in avl::Rotation::ALL.iter().enumerate() {
                    self.log(format!("{}. {}", number + 1, rotation.explanation()));
                }
            }
        }
        Ok(())
    }

    /// Claim a run and drive `run` to completion or supersession.
    ///
    /// A start while another run is animating is ignored and changes
    /// nothing, not even the visible panel.
    fn animate<F>(
        &mut self,
        driver: &mut dyn Driver,
        panel: Panel,
        code: &'static str,
        run: F,
    ) where
        F: FnOnce(&mut Session, &mut dyn Driver, RunToken) -> Animated,
    {
        let Some(token) = self.start_run() else {
            return;
        };
        self.panel = panel;
        self.listing = code;
        match run(self, driver, token) {
            Ok(()) => debug!(run = token.id(), "run completed"),
            Err(Superseded) => debug!(run = token.id(), "run abandoned after supersession"),
        }
        self.finish_run(token);
    }

    /// Supersede any active run and start over with a fresh array
    pub fn reset(&mut self) {
        info!(run = self.control.current_run(), "visualization reset");
        self.control.supersede();
        self.steps.clear();
        self.stats.reset();
        self.set_panel(Panel::Array);
        self.regenerate(self.array_size);
        self.set_status("Visualization reset", Level::Info);
    }

    fn generate(&mut self, size: Option<usize>) {
        let size = size.unwrap_or(self.array_size);
        self.set_panel(Panel::Array);
        self.regenerate(size);
        self.steps.clear();
        self.set_status(
            format!("Generated new array with {size} random elements"),
            Level::Success,
        );
    }

    fn push(&mut self, value: String) -> Result<(), StructureError> {
        self.set_panel(Panel::Stack);
        self.stack.push(value.clone())?;
        self.log(format!("Pushed {value} to stack"));
        self.set_status(
            format!("Pushed {value} to stack. Stack size: {}", self.stack.len()),
            Level::Success,
        );
        Ok(())
    }

    fn pop(&mut self) -> Result<(), StructureError> {
        self.set_panel(Panel::Stack);
        let value = self.stack.pop()?;
        self.log(format!("Popped {value} from stack"));
        self.set_status(
            format!("Popped {value} from stack. Stack size: {}", self.stack.len()),
            Level::Success,
        );
        Ok(())
    }

    fn peek(&mut self) -> Result<(), StructureError> {
        self.set_panel(Panel::Stack);
        let value = self.stack.peek()?.to_string();
        self.log(format!("Peeked at stack top: {value}"));
        self.set_status(format!("Top element is: {value}"), Level::Info);
        Ok(())
    }

    fn enqueue(&mut self, value: String) -> Result<(), StructureError> {
        self.set_panel(Panel::Queue);
        self.queue.enqueue(value.clone())?;
        self.log(format!("Enqueued {value} to queue"));
        self.set_status(
            format!("Enqueued {value} to queue. Queue size: {}", self.queue.len()),
            Level::Success,
        );
        Ok(())
    }

    fn dequeue(&mut self) -> Result<(), StructureError> {
        self.set_panel(Panel::Queue);
        let value = self.queue.dequeue()?;
        self.log(format!("Dequeued {value} from queue"));
        self.set_status(
            format!("Dequeued {value} from queue. Queue size: {}", self.queue.len()),
            Level::Success,
        );
        Ok(())
    }

    fn front(&mut self) -> Result<(), StructureError> {
        self.set_panel(Panel::Queue);
        let value = self.queue.front()?.to_string();
        self.log(format!("Checked queue front: {value}"));
        self.set_status(format!("Front element is: {value}"), Level::Info);
        Ok(())
    }

    fn list_add(&mut self, value: String, at_head: bool) {
        self.set_panel(Panel::LinkedList);
        if at_head {
            self.list.add_first(value.clone());
            self.log(format!("Added {value} to the head of linked list"));
        } else {
            self.list.add(value.clone());
            self.log(format!("Added {value} to linked list"));
        }
        self.set_status(
            format!("Added {value} to linked list. Size: {}", self.list.len()),
            Level::Success,
        );
    }

    fn list_remove(&mut self, value: String) -> Result<(), CommandError> {
        self.set_panel(Panel::LinkedList);
        if !self.list.remove(&value) {
            return Err(CommandError::NotFound {
                structure: "linked list",
                value,
            });
        }
        self.log(format!("Removed {value} from linked list"));
        self.set_status(
            format!("Removed {value} from linked list. Size: {}", self.list.len()),
            Level::Success,
        );
        Ok(())
    }

    fn list_remove_end(&mut self, head: bool) -> Result<(), StructureError> {
        self.set_panel(Panel::LinkedList);
        let (value, end) = if head {
            (self.list.remove_first()?, "head")
        } else {
            (self.list.remove_last()?, "tail")
        };
        self.log(format!("Removed {value} from the {end} of linked list"));
        self.set_status(
            format!("Removed {value} from linked list. Size: {}", self.list.len()),
            Level::Success,
        );
        Ok(())
    }

    fn list_search(&mut self, value: String) -> Result<(), CommandError> {
        self.set_panel(Panel::LinkedList);
        match self.list.search(&value) {
            Some(index) => {
                self.log(format!("Found {value} at index {index}"));
                self.set_status(format!("Found {value} at index {index}"), Level::Success);
                Ok(())
            }
            None => {
                self.log(format!("{value} not found in linked list"));
                Err(CommandError::NotFound {
                    structure: "linked list",
                    value,
                })
            }
        }
    }

    fn circular_init(&mut self, capacity: Option<usize>) {
        self.set_panel(Panel::CircularQueue);
        self.circular = match capacity {
            Some(capacity) => CircularQueue::new(capacity),
            None => CircularQueue::default(),
        };
        self.marks.clear();
        let message = format!(
            "Circular Queue initialized with size {}",
            self.circular.capacity()
        );
        self.log(message.clone());
        self.set_status(message, Level::Success);
    }

    fn tree_delete(&mut self, kind: TreeKind, value: i32) {
        self.set_panel(kind.panel());
        self.marks.clear();
        let removed = match kind {
            TreeKind::Bst => self.bst.remove(value),
            TreeKind::Avl => {
                let (removed, rotations) = avl::remove(&mut self.avl, value);
                for rotation in rotations {
                    self.stats.rotate(rotation.count());
                    self.log(format!(
                        "Performing {} after deletion ({} Case)",
                        rotation.name(),
                        rotation.case()
                    ));
                }
                removed
            }
        };

        if removed {
            self.log(format!("Deleted: {value}"));
            self.set_status(format!("Deleted {value} from {}", kind.name()), Level::Success);
        } else {
            let message = format!("{value} not found in {}", kind.name());
            self.log(message.clone());
            self.set_status(message, Level::Info);
        }
    }

    fn avl_check_balance(&mut self) {
        self.set_panel(Panel::Avl);
        if self.avl.is_empty() {
            self.log("Tree is empty");
            return;
        }
        for (value, balance) in avl::balance_report(&self.avl) {
            let verdict = if balance.abs() > 1 {
                "(UNBALANCED!)"
            } else {
                "(balanced)"
            };
            self.log(format!("Node {value}: Balance factor = {balance} {verdict}"));
        }
        self.set_status("Balance check complete", Level::Info);
    }
}
