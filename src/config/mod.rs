//! Check configuration.
//!
//! - [`PolicyConfig`] - the immutable policy for one run
//! - [`validator`] - validation of raw argument values

pub mod policy;
pub mod validator;

pub use policy::{PolicyConfig, UpdateMode, DEFAULT_TIMEOUT_SECS, DEFAULT_YUM_PATH};
pub use validator::{validate_timeout, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};
