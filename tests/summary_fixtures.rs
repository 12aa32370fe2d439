use std::fs;
use std::time::{Duration, Instant};

use tutorchat::feedback::dialog::{DialogEvent, FeedbackDialog};
use tutorchat::feedback::plan::{MessageBody, build_plan};
use tutorchat::feedback::reveal::RevealPhase;
use tutorchat::session::summary::{SummaryError, load_queue};

const SINGLE_SESSION: &str = r#"{
    "score": 90.0,
    "accuracy": 95.0,
    "completed_at": "2026-08-20T09:30:00Z"
}"#;

const SESSION_BATCH: &str = r#"[
    {"score": 90.0, "accuracy": 95.0},
    {"score": 72.0, "accuracy": 78.0, "improvement": 12.0, "weak_points": ["分数", "应用题"]},
    {"score": 45.0, "accuracy": 52.0, "weak_points": ["long division"]}
]"#;

fn write_fixture(content: &str) -> tempfile::TempPath {
    let mut file = tempfile::NamedTempFile::new().expect("create fixture");
    use std::io::Write;
    file.write_all(content.as_bytes()).expect("write fixture");
    file.into_temp_path()
}

#[test]
fn loads_single_object_as_one_entry_queue() {
    let path = write_fixture(SINGLE_SESSION);
    let queue = load_queue(path.as_ref()).unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].score, 90.0);
    assert_eq!(queue[0].improvement, 0.0);
    assert!(queue[0].weak_points.is_empty());
}

#[test]
fn loads_array_queue_in_order() {
    let path = write_fixture(SESSION_BATCH);
    let queue = load_queue(path.as_ref()).unwrap();
    assert_eq!(queue.len(), 3);
    assert_eq!(queue[1].improvement, 12.0);
    assert_eq!(queue[1].weak_points, vec!["分数", "应用题"]);
}

#[test]
fn empty_array_is_rejected() {
    let path = write_fixture("[]");
    assert!(matches!(
        load_queue(path.as_ref()),
        Err(SummaryError::Empty)
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let path = write_fixture("{score: 90}");
    assert!(matches!(
        load_queue(path.as_ref()),
        Err(SummaryError::Parse(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    assert!(matches!(load_queue(&path), Err(SummaryError::Io(_))));
}

/// Full pipeline on a loaded fixture: plan contents, reveal timing, and
/// dialog events, driven with synthetic instants.
#[test]
fn loaded_session_plays_out_end_to_end() {
    let path = write_fixture(SESSION_BATCH);
    let queue = load_queue(path.as_ref()).unwrap();

    let plan = build_plan(&queue[1]);
    assert_eq!(plan.len(), 5);
    let MessageBody::Text(feedback) = &plan[2].body else {
        panic!("expected prose feedback entry");
    };
    assert!(feedback.contains("12%"));
    assert!(feedback.contains("分数"));
    assert!(!feedback.contains("应用题"));

    let mut dialog = FeedbackDialog::new(queue[1].clone());
    let t0 = Instant::now();
    dialog.open(t0);

    dialog.tick(t0 + Duration::from_millis(2800));
    assert_eq!(dialog.visible_messages().len(), 4);
    assert_eq!(dialog.view_report(), Some(DialogEvent::ViewReport));
    assert!(dialog.activate_action().is_none());

    dialog.tick(t0 + Duration::from_millis(4400));
    assert_eq!(dialog.phase(), RevealPhase::ActionsShown);
    assert_eq!(dialog.activate_action(), Some(DialogEvent::ContinuePractice));
}

#[test]
fn fixture_file_on_disk_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    fs::write(&path, SINGLE_SESSION).unwrap();

    let queue = load_queue(&path).unwrap();
    let serialized = serde_json::to_string(&queue[0]).unwrap();
    assert!(serialized.contains("2026-08-20"));
}
