mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn less_and_sass_are_mutually_exclusive() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "my-site", "--less", "--sass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    // Validation fails before any filesystem action.
    ctx.assert_work_dir_empty();
}

#[test]
fn init_requires_a_project_name() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().failure().stderr(predicate::str::contains("<NAME>"));
    ctx.assert_work_dir_empty();
}

#[test]
fn unknown_subcommand_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("teardown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn help_lists_the_init_command_and_alias() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init").and(predicate::str::contains("Initialize")));

    ctx.cli()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--less")
                .and(predicate::str::contains("--sass"))
                .and(predicate::str::contains("--yarn"))
                .and(predicate::str::contains("--bundle")),
        );
}

#[test]
fn version_flag_prints_the_crate_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
