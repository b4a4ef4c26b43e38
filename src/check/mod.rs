//! Update checking: classification, parsing, and verdicts.
//!
//! The stages run in order, each a plain function over owned or borrowed
//! data:
//!
//! 1. [`exit_code::classify`] gates on YUM's exit code
//! 2. [`parser`] turns output into [`UpdateCounts`]
//! 3. [`verdict::derive_verdict`] maps counts and policy to a [`Verdict`]
//!
//! [`engine::run_check`] ties them to a [`crate::shell::CommandRunner`].

// Compiled regexes (one-time via LazyLock).
macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

pub mod engine;
pub mod exit_code;
pub mod parser;
pub mod status;
pub mod verdict;

pub use engine::{check, run_check};
pub use exit_code::{classify, clean_output, Classification};
pub use parser::{parse_all_updates, parse_security_updates, UpdateCounts};
pub use status::{Status, Verdict};
pub use verdict::{all_updates_verdict, derive_verdict, security_verdict};
