use super::{Board, WALL_START, new_board, record_two_strokes};
use crate::codec::SavedSession;
use crate::error::WhiteboardError;
use crate::replay::PlaybackState;
use crate::store::{DirStore, MemoryStore, SESSION_ID_LEN, SessionId, SessionStore};
use crate::time::Millis;

fn recorded_board() -> Board {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);
    wb
}

#[test]
fn session_id_is_generated_once() {
    let mut wb = recorded_board();
    assert!(wb.session_id().is_none());
    let id = wb.ensure_session_id();
    assert_eq!(id.as_str().len(), SESSION_ID_LEN);
    assert!(id.as_str().bytes().all(|b| b.is_ascii_alphanumeric()));
    assert_eq!(wb.ensure_session_id(), id);
    assert_eq!(wb.session_id(), Some(&id));
}

#[test]
fn session_id_parse_rejects_bad_input() {
    assert!(SessionId::parse("abcDEF12345").is_ok());
    assert!(matches!(
        SessionId::parse("short"),
        Err(WhiteboardError::InvalidSessionId(_))
    ));
    assert!(SessionId::parse("abcDEF1234!").is_err());
}

#[test]
fn snapshot_serializes_fields_in_fixed_order() {
    let mut wb = recorded_board();
    let json = serde_json::to_string(&wb.snapshot()).expect("to json");
    let keys = [
        "\"uniqueID\"",
        "\"recordingTime\"",
        "\"subtractTime\"",
        "\"lastEndTime\"",
        "\"strokeColor\"",
        "\"events\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|k| json.find(k).unwrap_or_else(|| panic!("missing {k} in {json}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    assert!(json.contains("\"recordingTime\":2000"));
    assert!(json.contains("{\"type\":\"b\",\"coord\":[10.0,10.0],\"time\":100}"));
}

#[test]
fn save_and_restore_reproduces_session() {
    let mut a = recorded_board();
    let live = a.surface().ops().to_vec();
    let mut store = MemoryStore::default();
    let id = a.save(&mut store).expect("save");
    assert_eq!(store.len(), 1);

    let (mut b, _clock) = new_board();
    b.restore(&store, &id).expect("restore");
    assert_eq!(b.events(), a.events());
    assert_eq!(b.session_id(), Some(&id));
    assert_eq!(b.stroke_color(), a.stroke_color());
    assert_eq!(b.recording_elapsed(), Millis(2_000));
    assert_eq!(b.cursor(), 0);
    assert_eq!(b.state(), PlaybackState::Stopped);
    assert_eq!(b.playback_clock(), Millis(0));
    assert!(b.surface().ops().is_empty());

    b.jump(Millis(u64::MAX));
    assert_eq!(b.surface().ops(), live.as_slice());
}

#[test]
fn restored_session_keeps_recording_on_the_same_timeline() {
    let mut a = recorded_board();
    let blob = a.serialize().expect("serialize");

    let (mut b, clock) = new_board();
    b.deserialize(&blob).expect("deserialize");
    clock.set(WALL_START.saturating_add(Millis(60_000)));
    b.start_recording();
    clock.advance(Millis(100));
    b.begin_draw(1.0, 1.0);
    b.stop_recording();

    let last = b.events().last_time();
    assert_eq!(last, Some(Millis(2_100)));
    assert_eq!(b.recording_elapsed(), Millis(2_100));
}

#[test]
fn restore_with_mismatched_id_leaves_session_untouched() {
    let mut a = recorded_board();
    let blob = a.serialize().expect("serialize");
    let wrong = SessionId::parse("ZZZZZZZZZZZ").expect("id");
    let mut store = MemoryStore::default();
    store.put(&wrong, &blob).expect("put");

    let (mut b, _clock) = new_board();
    let before = b.events().clone();
    let err = b.restore(&store, &wrong).expect_err("must reject");
    match err {
        WhiteboardError::SessionMismatch { requested, stored } => {
            assert_eq!(requested, "ZZZZZZZZZZZ");
            assert_eq!(stored, a.session_id().expect("id").to_string());
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(b.events(), &before);
    assert!(b.session_id().is_none());
}

#[test]
fn restore_unknown_id_is_not_found() {
    let store = MemoryStore::default();
    let (mut b, _clock) = new_board();
    let id = SessionId::parse("abcdefghijk").expect("id");
    assert!(matches!(
        b.restore(&store, &id),
        Err(WhiteboardError::SessionNotFound(_))
    ));
}

#[test]
fn garbage_blob_is_a_decode_error() {
    let (mut b, _clock) = new_board();
    let len = b.events().len();
    assert!(b.deserialize("%%% not base64 %%%").is_err());
    assert_eq!(b.events().len(), len);
}

#[test]
fn load_rejects_non_monotonic_events() {
    let (mut b, _clock) = new_board();
    let raw = r##"{
        "recordingTime": 500,
        "subtractTime": 0,
        "lastEndTime": 0,
        "strokeColor": "#000000",
        "events": [
            {"type": "b", "coord": [0, 0], "time": 300},
            {"type": "d", "coord": [1, 1], "time": 200}
        ]
    }"##;
    let saved: SavedSession = serde_json::from_str(raw).expect("parse");
    assert!(saved.unique_id.is_none());
    let err = b.load(saved).expect_err("must reject");
    assert!(matches!(
        err,
        WhiteboardError::NonMonotonic {
            index: 1,
            prev_ms: 300,
            t_ms: 200
        }
    ));
}

#[test]
fn dir_store_round_trip_and_missing_file() {
    let dir = std::env::temp_dir().join(format!(
        "xboard-rs-store-{}-{}",
        std::process::id(),
        SessionId::generate()
    ));
    let mut store = DirStore::new(&dir);
    assert_eq!(store.root(), dir.as_path());
    let id = SessionId::parse("abcdefghijk").expect("id");
    assert_eq!(store.get(&id).expect("get"), None);

    store.put(&id, "blob").expect("put");
    assert!(store.path_for(&id).ends_with("abcdefghijk.xboard"));
    assert_eq!(store.get(&id).expect("get").as_deref(), Some("blob"));

    let _ = std::fs::remove_dir_all(&dir);
}
