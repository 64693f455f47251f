mod persistence;
mod seek;

use crate::Whiteboard;
use crate::config::WhiteboardConfig;
use crate::surface::DisplayList;
use crate::time::{ManualClock, Millis};

pub(crate) const WALL_START: Millis = Millis(1_000_000);

pub(crate) type Board = Whiteboard<DisplayList, ManualClock>;

pub(crate) fn new_board() -> (Board, ManualClock) {
    let clock = ManualClock::new(WALL_START);
    let wb = Whiteboard::new(
        DisplayList::default(),
        clock.clone(),
        WhiteboardConfig::default(),
    );
    (wb, clock)
}

/// 录制两笔，共 2000ms：
/// s@0, b@100, d@200, d@300, c@400, b@1200, d@1300, d@1400, c@1500
pub(crate) fn record_two_strokes(wb: &mut Board, clock: &ManualClock) {
    wb.start_recording();
    clock.advance(Millis(100));
    wb.begin_draw(10.0, 10.0);
    clock.advance(Millis(100));
    wb.draw_to(20.0, 20.0);
    clock.advance(Millis(100));
    wb.draw_to(30.0, 30.0);
    clock.advance(Millis(100));
    wb.end_draw();

    clock.advance(Millis(800));
    wb.begin_draw(100.0, 100.0);
    clock.advance(Millis(100));
    wb.draw_to(110.0, 110.0);
    clock.advance(Millis(100));
    wb.draw_to(120.0, 120.0);
    clock.advance(Millis(100));
    wb.end_draw();

    clock.advance(Millis(500));
    wb.stop_recording();
}

pub(crate) fn event_times(wb: &Board) -> Vec<u64> {
    wb.events().iter().map(|e| e.t().0).collect()
}
