//! Mock command runner for testing.
//!
//! `MockRunner` implements the [`CommandRunner`] trait, returns canned
//! output, and records every invocation it receives for later assertion.
//!
//! # Example
//!
//! ```
//! use check_yum::shell::{CommandRunner, Invocation, MockRunner};
//!
//! let runner = MockRunner::new(100, "Loaded plugins: security\n");
//! let result = runner
//!     .run(&Invocation::new("/usr/bin/yum", vec!["check-update".into()]))
//!     .unwrap();
//!
//! assert_eq!(result.exit_code, 100);
//! assert_eq!(runner.invocations()[0].args, vec!["check-update"]);
//! ```

use std::cell::RefCell;

use crate::error::{ProbeError, Result};

use super::command::{CommandRunner, Invocation, RunResult};

/// What the mock hands back.
#[derive(Debug)]
enum Response {
    Output { exit_code: i32, output: String },
    Timeout { seconds: u64 },
}

/// Mock runner with a single canned response.
#[derive(Debug)]
pub struct MockRunner {
    response: Response,
    invocations: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// Respond with the given exit code and raw output.
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            response: Response::Output {
                exit_code,
                output: output.into(),
            },
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Respond as if the deadline expired.
    pub fn timing_out(seconds: u64) -> Self {
        Self {
            response: Response::Timeout { seconds },
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Invocations received so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunResult> {
        self.invocations.borrow_mut().push(invocation.clone());

        match &self.response {
            Response::Timeout { seconds } => Err(ProbeError::Timeout { seconds: *seconds }),
            Response::Output { output, .. } if output.is_empty() => {
                Err(ProbeError::EmptyOutput {
                    tool: invocation.tool(),
                })
            }
            Response::Output { exit_code, output } => {
                Ok(RunResult::from_output(*exit_code, output))
            }
        }
    }
}
