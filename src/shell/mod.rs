//! External command execution and executable checks.

pub mod command;
pub mod executable;
pub mod mock;

pub use command::{execute, CommandRunner, Invocation, RunResult, SystemRunner};
pub use executable::{ensure_usable, is_executable};
pub use mock::MockRunner;
