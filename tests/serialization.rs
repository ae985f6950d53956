//! Checks that state intended to survive a restart round-trips as text.
use trellis::{
    builtin::layout::{Grid, MainAndStack, Monocle},
    core::layout::LayoutStack,
    pure::geometry::Rect,
    stack, StackSet, WinId,
};

fn layouts() -> LayoutStack {
    stack!(
        MainAndStack::boxed_default(),
        [Monocle::boxed(), Grid::boxed()]
    )
}

fn test_stack_set() -> StackSet<WinId> {
    StackSet::try_new(layouts(), ["1", "2", "3"], vec![Rect::new(0, 0, 1000, 600)]).unwrap()
}

#[test]
fn layout_snapshot_lists_every_workspace_in_order() {
    let s = test_stack_set();

    let snapshot = s.layout_snapshot();
    let lines: Vec<&str> = snapshot.lines().map(str::trim_end).collect();

    assert_eq!(lines, vec!["1\tSide", "2\tSide", "3\tSide"]);
}

#[test]
fn active_layouts_survive_a_round_trip() {
    let mut s = test_stack_set();

    // leave "1" on the default, switch the others
    s.workspace_mut("2").unwrap().set_layout_by_name("Mono");
    s.workspace_mut("3").unwrap().set_layout_by_name("Grid");

    let snapshot = s.layout_snapshot();

    let mut restored = test_stack_set();
    restored.restore_layout_snapshot(&snapshot);

    assert_eq!(restored.workspace("1").unwrap().layout_name(), "Side");
    assert_eq!(restored.workspace("2").unwrap().layout_name(), "Mono");
    assert_eq!(restored.workspace("3").unwrap().layout_name(), "Grid");
    assert_eq!(restored.layout_snapshot(), snapshot);
}

#[test]
fn unparseable_snapshot_lines_fall_back_to_the_default_layout() {
    let mut restored = test_stack_set();

    restored.restore_layout_snapshot("2\tNoSuchLayout\nnot a snapshot line\n");

    assert_eq!(restored.workspace("2").unwrap().layout_name(), "Side");
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use trellis::{pure::geometry::Rect, stack, Stack, WinId};

    #[test]
    fn stacks_round_trip_through_json() {
        let w = |id: u32| WinId::from(id);
        let s: Stack<WinId> = stack!([w(1)], w(2), [w(3), w(4)]);

        let json = serde_json::to_string(&s).unwrap();
        let back: Stack<WinId> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, s);
    }

    #[test]
    fn rects_round_trip_through_json() {
        let r = Rect::new(1, 2, 3, 4);

        let json = serde_json::to_string(&r).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();

        assert_eq!(back, r);
    }
}
