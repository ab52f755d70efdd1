// Timing and sizing limits shared by the session and the CLI

use std::time::Duration;

/// Interval at which a paused run re-checks the pause flag
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default delay between two logical steps
pub const DEFAULT_SPEED_MS: u64 = 800;

/// Fastest and slowest accepted step delays
pub const MIN_SPEED_MS: u64 = 100;
pub const MAX_SPEED_MS: u64 = 1000;

/// Speed adjustment applied by the `+` / `-` keys
pub const SPEED_STEP_MS: u64 = 100;

/// Array size bounds and default
pub const MIN_ARRAY_SIZE: usize = 3;
pub const MAX_ARRAY_SIZE: usize = 20;
pub const DEFAULT_ARRAY_SIZE: usize = 8;

/// Array values are drawn from this inclusive range
pub const MIN_ARRAY_VALUE: i32 = 1;
pub const MAX_ARRAY_VALUE: i32 = 100;

/// Capacity of the bounded stack and linear queue
pub const LINEAR_CAPACITY: usize = 10;

/// Circular queue capacity bounds and default
pub const MIN_CIRCULAR_CAPACITY: usize = 3;
pub const MAX_CIRCULAR_CAPACITY: usize = 15;
pub const DEFAULT_CIRCULAR_CAPACITY: usize = 8;
