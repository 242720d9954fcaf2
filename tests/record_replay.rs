//! Record-replay round trip for the git port.
//!
//! 1. Run an upload against a scratch repository while recording.
//! 2. Replay the cassette without a repository.
//! 3. Assert the replayed outcome matches the live one.

mod common;

use common::{scratch_repo, write_image};
use gh_image::adapters::live::LiveGitRepo;
use gh_image::context::ServiceContext;
use gh_image::upload::{commit_and_upload, ImagePath};

#[test]
fn recorded_upload_replays_identically() {
    let repo = scratch_repo("gh_image_record_replay_repo");
    write_image(&repo, "shots/a.png", 9);
    let cassette_dir = std::env::temp_dir().join("gh_image_record_replay_cassettes");
    let _ = std::fs::remove_dir_all(&cassette_dir);

    let path = ImagePath::new("shots/a.png").unwrap();

    let ctx = ServiceContext::recording(LiveGitRepo::new("git", Some(repo.clone())), &cassette_dir)
        .unwrap();
    let live = commit_and_upload(ctx.git.as_ref(), &path);
    assert!(!live.is_error(), "{live:?}");
    let cassette = ctx.finish().unwrap().expect("cassette written");

    // The repository is gone; only the cassette remains.
    std::fs::remove_dir_all(&repo).unwrap();

    let first = ServiceContext::replaying(&cassette).unwrap();
    let replayed = commit_and_upload(first.git.as_ref(), &path);
    assert_eq!(replayed, live);

    let second = ServiceContext::replaying(&cassette).unwrap();
    assert_eq!(commit_and_upload(second.git.as_ref(), &path), live);

    let _ = std::fs::remove_dir_all(&cassette_dir);
}

#[test]
fn recorded_failure_replays_identically() {
    let dir = common::plain_dir("gh_image_record_replay_plain");
    let cassette_dir = std::env::temp_dir().join("gh_image_record_replay_fail_cassettes");
    let _ = std::fs::remove_dir_all(&cassette_dir);
    let path = ImagePath::new("a.png").unwrap();

    let ctx = ServiceContext::recording(LiveGitRepo::new("git", Some(dir.clone())), &cassette_dir)
        .unwrap();
    let live = commit_and_upload(ctx.git.as_ref(), &path);
    assert!(live.is_error());
    let cassette = ctx.finish().unwrap().expect("cassette written");

    let ctx = ServiceContext::replaying(&cassette).unwrap();
    let replayed = commit_and_upload(ctx.git.as_ref(), &path);
    // The stack differs (replayed errors carry no io source), the rest matches.
    let (gh_image::upload::UploadOutcome::Failure(a), gh_image::upload::UploadOutcome::Failure(b)) =
        (&live, &replayed)
    else {
        panic!("expected failures")
    };
    assert_eq!(a.error(), b.error());
    assert_eq!(a.details(), b.details());

    let _ = std::fs::remove_dir_all(&dir);
    let _ = std::fs::remove_dir_all(&cassette_dir);
}
