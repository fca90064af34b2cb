use predicates::prelude::*;

use crate::harness::TestContext;

#[test]
fn lists_builtin_services_for_every_provider() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("services")
        .assert()
        .success()
        .stdout(predicate::str::contains("AWS:"))
        .stdout(predicate::str::contains("EC2"))
        .stdout(predicate::str::contains("Azure:"))
        .stdout(predicate::str::contains("Blob Storage"))
        .stdout(predicate::str::contains("GCP:"))
        .stdout(predicate::str::contains("GKE"));
}

#[test]
fn provider_filter_limits_the_listing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["services", "--provider", "azure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Azure:"))
        .stdout(predicate::str::contains("SQL Database"))
        .stdout(predicate::str::contains("AWS:").not())
        .stdout(predicate::str::contains("EC2").not());
}

#[test]
fn unknown_provider_starts_with_an_empty_list() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["services", "--provider", "OpenStack"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OpenStack:"))
        .stdout(predicate::str::contains("no built-in services"));
}
