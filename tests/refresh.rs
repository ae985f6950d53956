//! End to end checks that pure state changes are replayed correctly against
//! the display connection by the refresh pipeline.
use trellis::{
    builtin::layout::{MainAndStack, Monocle},
    core::{layout::Message, Config, WindowManager},
    display::{
        mock::{RecordedCall, RecordingConn},
        DisplayEvent,
    },
    pure::geometry::Rect,
    stack, WinId,
};

fn w(id: u32) -> WinId {
    WinId::from(id)
}

fn test_config(border_width: u32) -> Config<RecordingConn> {
    Config {
        default_layouts: stack!(MainAndStack::boxed(1, 0.5, 0.1), [Monocle::boxed()]),
        border_width,
        ..Config::default()
    }
}

fn wm_with_events(
    border_width: u32,
    events: Vec<DisplayEvent>,
) -> WindowManager<RecordingConn> {
    let conn = RecordingConn::new(vec![Rect::new(0, 0, 1000, 600)], events);

    WindowManager::new(test_config(border_width), conn).unwrap()
}

fn positions(calls: &[RecordedCall]) -> Vec<(WinId, Rect)> {
    calls
        .iter()
        .filter_map(|c| match c {
            &RecordedCall::Position(id, r) => Some((id, r)),
            _ => None,
        })
        .collect()
}

#[test]
fn mapping_three_windows_tiles_them_and_focuses_the_last() {
    let mut wm = wm_with_events(
        0,
        vec![
            DisplayEvent::MapRequest(w(1)),
            DisplayEvent::MapRequest(w(2)),
            DisplayEvent::MapRequest(w(3)),
        ],
    );

    wm.run().unwrap();

    let calls = wm.connection().calls();

    // the last refresh tiled all three windows: first window keeps the main
    // pane, later arrivals stack in the right hand column
    let ps = positions(&calls);
    let final_positions = &ps[ps.len() - 3..];
    assert_eq!(
        final_positions,
        &[
            (w(1), Rect::new(0, 0, 500, 600)),
            (w(2), Rect::new(500, 0, 500, 300)),
            (w(3), Rect::new(500, 300, 500, 300)),
        ]
    );

    // every window was revealed and the most recent insertion holds focus
    for id in [1, 2, 3] {
        assert!(calls.contains(&RecordedCall::Map(w(id))));
    }
    let last_focus = calls
        .iter()
        .rev()
        .find_map(|c| match c {
            &RecordedCall::Focus(id) => Some(id),
            _ => None,
        })
        .unwrap();
    assert_eq!(last_focus, w(3));
}

#[test]
fn positions_are_shrunk_by_the_border_width() {
    let mut wm = wm_with_events(2, vec![DisplayEvent::MapRequest(w(1))]);

    wm.run().unwrap();

    let calls = wm.connection().calls();

    assert!(positions(&calls).contains(&(w(1), Rect::new(0, 0, 996, 596))));
    assert!(calls.contains(&RecordedCall::BorderWidth(w(1), 2)));
}

#[test]
fn pointer_entry_focuses_the_entered_window() {
    let mut wm = wm_with_events(
        0,
        vec![
            DisplayEvent::MapRequest(w(1)),
            DisplayEvent::MapRequest(w(2)),
            DisplayEvent::Enter(w(1)),
        ],
    );

    wm.run().unwrap();

    let calls = wm.connection().calls();
    let last_focus = calls
        .iter()
        .rev()
        .find_map(|c| match c {
            &RecordedCall::Focus(id) => Some(id),
            _ => None,
        })
        .unwrap();

    assert_eq!(last_focus, w(1));

    // the focused window has its input released, the other is grabbed so
    // that clicks on it can focus it
    let last_grabs: Vec<&RecordedCall> = calls
        .iter()
        .filter(|c| matches!(c, RecordedCall::GrabInput(_) | RecordedCall::UngrabInput(_)))
        .rev()
        .take(2)
        .collect();
    assert!(last_grabs.contains(&&RecordedCall::UngrabInput(w(1))));
    assert!(last_grabs.contains(&&RecordedCall::GrabInput(w(2))));
}

#[test]
fn killing_the_focused_client_closes_and_hides_it() {
    let mut wm = wm_with_events(0, vec![]);

    wm.handle_event(DisplayEvent::MapRequest(w(1))).unwrap();
    wm.handle_event(DisplayEvent::MapRequest(w(2))).unwrap();
    wm.connection().clear_calls();

    wm.modify_and_refresh(|cs| cs.kill_focused()).unwrap();

    let calls = wm.connection().calls();
    assert!(calls.contains(&RecordedCall::Kill(w(2))));
    assert!(calls.contains(&RecordedCall::Unmap(w(2))));
}

#[test]
fn switching_to_monocle_hides_the_unfocused_window() {
    let mut wm = wm_with_events(0, vec![]);

    wm.handle_event(DisplayEvent::MapRequest(w(1))).unwrap();
    wm.handle_event(DisplayEvent::MapRequest(w(2))).unwrap();
    wm.connection().clear_calls();

    wm.send_layout_message(Message::NextLayout).unwrap();

    let calls = wm.connection().calls();
    assert!(
        calls.contains(&RecordedCall::Unmap(w(1))),
        "window without a position should be hidden: {calls:?}"
    );
    assert!(positions(&calls).contains(&(w(2), Rect::new(0, 0, 1000, 600))));
}

#[test]
fn floating_windows_use_their_stored_rect_and_stack_on_top() {
    let mut wm = wm_with_events(0, vec![]);
    let float_r = Rect::new(100, 100, 300, 200);

    wm.handle_event(DisplayEvent::MapRequest(w(1))).unwrap();
    wm.handle_event(DisplayEvent::MapRequest(w(2))).unwrap();
    wm.connection().clear_calls();

    wm.modify_and_refresh(|cs| {
        cs.float(w(2), float_r).expect("client 2 is managed");
    })
    .unwrap();

    let calls = wm.connection().calls();
    let ps = positions(&calls);

    assert_eq!(
        ps,
        vec![
            (w(1), Rect::new(0, 0, 1000, 600)),
            (w(2), float_r),
        ]
    );
    assert!(calls.contains(&RecordedCall::StackAbove(w(2), w(1))));
}

#[test]
fn urgency_hints_arm_reminders_and_focus_clears_them() {
    let mut wm = wm_with_events(0, vec![]);

    wm.handle_event(DisplayEvent::MapRequest(w(1))).unwrap();
    wm.handle_event(DisplayEvent::MapRequest(w(2))).unwrap();

    // window 1 is unfocused and raises its urgency hint
    wm.connection().set_urgency_hint(w(1), true);
    wm.connection().clear_calls();
    wm.handle_event(DisplayEvent::PropertyHints(w(1))).unwrap();

    assert!(wm.state.urgency.is_urgent(&w(1)));
    let calls = wm.connection().calls();
    assert!(calls
        .iter()
        .any(|c| matches!(c, RecordedCall::ArmTimer(_))));

    // focusing the urgent window answers the request for attention
    wm.connection().clear_calls();
    wm.handle_event(DisplayEvent::Enter(w(1))).unwrap();

    assert!(!wm.state.urgency.is_urgent(&w(1)));
    let calls = wm.connection().calls();
    assert!(calls
        .iter()
        .any(|c| matches!(c, RecordedCall::CancelTimer(_))));
}

#[test]
fn unmaps_from_hiding_are_not_treated_as_withdrawals() {
    let mut wm = wm_with_events(0, vec![]);

    wm.handle_event(DisplayEvent::MapRequest(w(1))).unwrap();
    wm.handle_event(DisplayEvent::MapRequest(w(2))).unwrap();

    // switching to Monocle unmaps window 1; the resulting Unmap event must
    // not remove it from management
    wm.send_layout_message(Message::NextLayout).unwrap();
    wm.handle_event(DisplayEvent::Unmap(w(1))).unwrap();
    assert!(wm.state.client_set.contains(&w(1)));

    // a second, unexpected unmap is the client withdrawing itself
    wm.handle_event(DisplayEvent::Unmap(w(1))).unwrap();
    assert!(!wm.state.client_set.contains(&w(1)));
}
