use super::{Board, new_board, record_two_strokes};
use crate::surface::{DisplayList, Surface, apply_event};
use crate::time::Millis;

/// 在一块新表面上按顺序执行 `t < before` 的事件。
fn expected_prefix(wb: &Board, before: Option<Millis>) -> DisplayList {
    let mut fresh = DisplayList::default();
    fresh.clear();
    for ev in wb.events() {
        if before.is_some_and(|t| ev.t() >= t) {
            break;
        }
        apply_event(&mut fresh, ev);
    }
    fresh
}

#[test]
fn replay_to_end_matches_live_drawing() {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);
    let live = wb.surface().ops().to_vec();
    assert_eq!(wb.surface().line_count(), 4);

    wb.redraw_to(Some(Millis(0)));
    assert!(wb.surface().ops().is_empty());
    wb.redraw_to(None);
    assert_eq!(wb.surface().ops(), live.as_slice());
    assert_eq!(wb.cursor(), wb.events().len());
}

#[test]
fn jump_shows_only_events_before_target() {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);

    wb.jump(Millis(1_000));
    let expected = expected_prefix(&wb, Some(Millis(1_000)));
    assert_eq!(wb.surface().ops(), expected.ops());
    assert_eq!(wb.surface().line_count(), 2);
    assert_eq!(wb.cursor(), 5);
    assert_eq!(wb.playback_clock(), Millis(1_000));
}

#[test]
fn event_exactly_at_target_is_not_applied() {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);

    wb.redraw_to(Some(Millis(1_300)));
    assert_eq!(wb.cursor(), 6);
    assert_eq!(wb.surface().line_count(), 2);

    wb.redraw_to(Some(Millis(1_301)));
    assert_eq!(wb.cursor(), 7);
    assert_eq!(wb.surface().line_count(), 3);
}

#[test]
fn repeated_seeking_is_idempotent() {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);

    wb.redraw_to(Some(Millis(1_000)));
    let direct = wb.surface().ops().to_vec();
    let cursor = wb.cursor();

    wb.redraw_to(Some(Millis(1_450)));
    wb.redraw_to(Some(Millis(1_000)));
    assert_eq!(wb.surface().ops(), direct.as_slice());
    assert_eq!(wb.cursor(), cursor);

    wb.redraw_to(Some(Millis(1_000)));
    assert_eq!(wb.surface().ops(), direct.as_slice());
}

#[test]
fn forward_seek_continues_without_clearing() {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);

    wb.redraw_to(Some(Millis(300)));
    assert_eq!(wb.cursor(), 3);
    let clears = wb.surface().clear_count();

    wb.redraw_to(Some(Millis(1_300)));
    assert_eq!(wb.cursor(), 6);
    assert_eq!(wb.surface().clear_count(), clears);
    assert_eq!(
        wb.surface().ops(),
        expected_prefix(&wb, Some(Millis(1_300))).ops()
    );
}

#[test]
fn backward_seek_clears_and_replays_from_start() {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);

    wb.redraw_to(Some(Millis(1_450)));
    let clears = wb.surface().clear_count();
    wb.redraw_to(Some(Millis(250)));

    assert_eq!(wb.surface().clear_count(), clears + 1);
    assert_eq!(wb.cursor(), 3);
    assert_eq!(wb.surface().line_count(), 1);
}

#[test]
fn jump_past_end_clamps_and_draws_everything() {
    let (mut wb, clock) = new_board();
    record_two_strokes(&mut wb, &clock);

    wb.jump(Millis(0));
    wb.jump(Millis(99_999));
    assert_eq!(wb.playback_clock(), Millis(2_000));
    assert_eq!(wb.cursor(), wb.events().len());
    assert_eq!(wb.surface().ops(), expected_prefix(&wb, None).ops());
    assert!(wb.at_end());
}

#[test]
fn seek_on_empty_log_only_clears() {
    let (mut wb, _clock) = new_board();
    wb.load(crate::codec::SavedSession {
        unique_id: None,
        recording_time: Millis(0),
        subtract_time: Millis(0),
        last_end_time: Millis(0),
        stroke_color: "#000000".to_string(),
        events: Vec::new(),
    })
    .expect("load empty");

    wb.redraw_to(Some(Millis(10)));
    wb.redraw_to(None);
    assert_eq!(wb.cursor(), 0);
    assert!(wb.surface().ops().is_empty());
}

#[test]
fn replay_from_scratch_ignores_stale_pen_position() {
    let (mut wb, _clock) = new_board();
    wb.start_recording();
    // 没有 begin_draw 的 draw_to 只移动画笔
    wb.draw_to(5.0, 5.0);
    wb.begin_draw(10.0, 10.0);
    wb.draw_to(20.0, 20.0);
    wb.stop_recording();
    let live = wb.surface().ops().to_vec();
    assert_eq!(wb.surface().line_count(), 1);

    wb.redraw_to(Some(Millis(0)));
    wb.redraw_to(None);
    assert_eq!(wb.surface().line_count(), 1);
    assert_eq!(wb.surface().ops(), live.as_slice());
}
