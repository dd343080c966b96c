// tests/pipeline_test.rs
use autorelease::domain::Version;
use autorelease::error::AutoreleaseError;
use autorelease::github::MockHost;
use autorelease::pipeline::{run, RunOptions, RunOutcome};

fn options() -> RunOptions {
    RunOptions {
        target_commit: "headsha".to_string(),
        dry_run: false,
    }
}

#[test]
fn test_full_release_path() {
    let host = MockHost::new()
        .with_release("v1.2.3", "basesha")
        .with_commit("c1", "feat(ui): add Y")
        .with_commit("c2", "fix(core): patch Z");

    let outcome = run(&host, &options()).unwrap();
    assert_eq!(outcome, RunOutcome::Released(Version::new(1, 3, 0)));

    let published = host.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].tag, "v1.3.0");
    assert_eq!(published[0].target_commit, "headsha");
    assert_eq!(
        published[0].body,
        "#### Features\n* **ui**, add Y\n\n#### Bug Fixes\n* **core**, patch Z"
    );
}

#[test]
fn test_breaking_release_resets_minor_and_patch() {
    let host = MockHost::new()
        .with_release("v1.2.3", "basesha")
        .with_commit("c1", "fix(core): bug")
        .with_commit("c2", "breaking(core): drop");

    let outcome = run(&host, &options()).unwrap();
    assert_eq!(outcome, RunOutcome::Released(Version::new(2, 0, 0)));
    assert_eq!(host.published()[0].tag, "v2.0.0");
}

#[test]
fn test_no_release_needed_is_not_an_error() {
    let host = MockHost::new()
        .with_release("v1.2.3", "basesha")
        .with_commit("c1", "chore: bump deps")
        .with_commit("c2", "docs: update readme");

    let outcome = run(&host, &options()).unwrap();
    assert_eq!(outcome, RunOutcome::NoRelease);
    assert!(host.published().is_empty());
}

#[test]
fn test_empty_commit_batch_means_no_release() {
    let host = MockHost::new().with_release("v0.4.1", "basesha");

    let outcome = run(&host, &options()).unwrap();
    assert_eq!(outcome, RunOutcome::NoRelease);
    assert!(host.published().is_empty());
}

#[test]
fn test_repository_without_releases_fails() {
    let host = MockHost::new().with_commit("c1", "feat(ui): add Y");

    let err = run(&host, &options()).unwrap_err();
    assert!(matches!(err, AutoreleaseError::NoReleases));
    assert!(host.published().is_empty());
}

#[test]
fn test_malformed_prior_version_fails() {
    let host = MockHost::new()
        .with_release("release-one", "basesha")
        .with_commit("c1", "feat(ui): add Y");

    let err = run(&host, &options()).unwrap_err();
    assert!(matches!(err, AutoreleaseError::Version(_)));
    assert!(host.published().is_empty());
}

#[test]
fn test_transport_failure_aborts_run() {
    let host = MockHost::new()
        .with_release("v1.0.0", "basesha")
        .fail_commits_with("rate limited");

    let err = run(&host, &options()).unwrap_err();
    assert!(matches!(err, AutoreleaseError::Api(_)));
    assert!(host.published().is_empty());
}

#[test]
fn test_publish_failure_propagates() {
    let host = MockHost::new()
        .with_release("v1.0.0", "basesha")
        .with_commit("c1", "fix(core): bug")
        .fail_publish_with("tag already exists");

    let err = run(&host, &options()).unwrap_err();
    assert!(matches!(err, AutoreleaseError::Api(_)));
}

#[test]
fn test_dry_run_skips_publish() {
    let host = MockHost::new()
        .with_release("v1.2.3", "basesha")
        .with_commit("c1", "feat(ui): add Y");

    let opts = RunOptions {
        target_commit: "headsha".to_string(),
        dry_run: true,
    };

    let outcome = run(&host, &opts).unwrap();
    assert_eq!(outcome, RunOutcome::Released(Version::new(1, 3, 0)));
    assert!(host.published().is_empty());
}

#[test]
fn test_published_notes_omit_unclassified_commits() {
    let host = MockHost::new()
        .with_release("v2.1.0", "basesha")
        .with_commit("c1", "chore: bump deps")
        .with_commit("c2", "perf(db): cache lookups")
        .with_commit("c3", "Merge branch 'main'");

    let outcome = run(&host, &options()).unwrap();
    assert_eq!(outcome, RunOutcome::Released(Version::new(2, 1, 1)));

    let body = &host.published()[0].body;
    assert_eq!(body, "#### Performance Improvements\n* **db**, cache lookups");
}

#[test]
fn test_release_from_patch_version() {
    let host = MockHost::new()
        .with_release("v0.0.9", "basesha")
        .with_commit("c1", "fix(core): off by one");

    let outcome = run(&host, &options()).unwrap();
    assert_eq!(outcome, RunOutcome::Released(Version::new(0, 0, 10)));
    assert_eq!(host.published()[0].tag, "v0.0.10");
}
