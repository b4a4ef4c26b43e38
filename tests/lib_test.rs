//! Library integration tests.

use check_yum::check::{
    classify, parse_all_updates, parse_security_updates, run_check, security_verdict,
    Classification, Status,
};
use check_yum::config::PolicyConfig;
use check_yum::shell::MockRunner;
use check_yum::ProbeError;

fn lines(text: &str) -> Vec<String> {
    text.split('\n').map(String::from).collect()
}

#[test]
fn error_types_are_public() {
    let err = ProbeError::EmptyOutput {
        tool: "yum".into(),
    };
    assert!(err.to_string().contains("yum"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> check_yum::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use check_yum::cli::Cli;
    use clap::Parser;

    let cli = Cli::parse_from(["check_yum", "--all-updates", "-t", "30"]);
    assert!(cli.all_updates);
    assert_eq!(cli.timeout.as_deref(), Some("30"));
}

#[test]
fn security_summary_examples() {
    assert_eq!(
        parse_security_updates(&lines("Needed 2 of 10 packages, for security")).unwrap(),
        (2, 8)
    );
    assert_eq!(
        parse_security_updates(&lines(
            "No packages needed for security; 5 packages available"
        ))
        .unwrap(),
        (0, 5)
    );
}

#[test]
fn preamble_only_output_has_no_updates() {
    let output = lines("Loaded plugins: fastestmirror\n");
    assert_eq!(parse_all_updates(&output).unwrap(), 0);
}

#[test]
fn section_and_architecture_counts_must_agree() {
    let output = lines(
        "Loaded plugins: fastestmirror\n\
         \n\
         kernel.x86_64   3.10.0-1160.el7   updates\n\
         zlib.i686       1.2.7-21.el7      updates\n\
         truncated-kmod-line 1.0 updates\n",
    );
    let err = parse_all_updates(&output).unwrap_err();
    assert_eq!(err.status(), Status::Unknown);
}

#[test]
fn lock_never_escalates_past_warning() {
    let output = lines(
        "Loaded plugins: fastestmirror\n\
         Existing lock /var/run/yum.pid: another copy is running.\n",
    );

    let default_policy = PolicyConfig::default();
    let quiet_policy = PolicyConfig {
        suppress_lock_warning: true,
        ..Default::default()
    };

    match classify(200, &output, &default_policy) {
        Classification::Locked(verdict) => assert_eq!(verdict.status, Status::Warning),
        other => panic!("unexpected {other:?}"),
    }
    match classify(200, &output, &quiet_policy) {
        Classification::Locked(verdict) => assert_eq!(verdict.status, Status::Ok),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn warn_on_any_update_with_only_other_updates() {
    let policy = PolicyConfig {
        warn_on_any_update: true,
        ..Default::default()
    };
    let verdict = security_verdict(0, 3, &policy);
    assert_eq!(verdict.status, Status::Warning);
    assert!(verdict.message.contains("3 Non-Security Updates Available"));
}

#[test]
fn full_run_through_mock_runner() {
    let runner = MockRunner::new(
        100,
        "Loaded plugins: product-id, security\n\
         1 package(s) needed for security, out of 1 available\n",
    );
    let verdict = run_check(&PolicyConfig::default(), &runner).unwrap();
    assert_eq!(verdict.status, Status::Critical);
    assert_eq!(verdict.render(), "1 Security Update Available");
}
