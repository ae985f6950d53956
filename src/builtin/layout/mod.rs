//! Built-in layouts.
use crate::{
    core::layout::{Layout, Message},
    pure::{geometry::Rect, Stack},
    WinId,
};

pub mod transformers;

/// A simple [Layout] with main and secondary regions.
///
/// The main region occupies the left hand side of the screen with remaining
/// clients tiled in a single column to the right. If the number of clients
/// does not exceed the size of the main region then all clients are stacked
/// vertically over the full screen.
///
/// The ratio between the main and secondary regions can be adjusted by
/// sending [Message::ShrinkMain] and [Message::ExpandMain] to this layout.
/// The number of clients in the main area can be increased or decreased by
/// sending [Message::IncMain]: the main area always holds at least one
/// client. For a horizontal split, wrap this layout in
/// [Mirror][transformers::Mirror].
#[derive(Debug, Clone, Copy)]
pub struct MainAndStack {
    max_main: u32,
    ratio: f32,
    ratio_step: f32,
}

impl MainAndStack {
    /// Create a new [MainAndStack] as a boxed trait object ready for use in
    /// a layout stack.
    pub fn boxed(max_main: u32, ratio: f32, ratio_step: f32) -> Box<dyn Layout> {
        Box::new(Self::new(max_main, ratio, ratio_step))
    }

    /// A boxed [MainAndStack] with default parameters.
    pub fn boxed_default() -> Box<dyn Layout> {
        Box::<Self>::default()
    }

    /// Create a new [MainAndStack], clamping the ratio into [0, 1] and the
    /// main client count to at least one.
    pub fn new(max_main: u32, ratio: f32, ratio_step: f32) -> Self {
        Self {
            max_main: max_main.max(1),
            ratio: ratio.clamp(0.0, 1.0),
            ratio_step,
        }
    }

    fn layout_side(&self, s: &Stack<WinId>, r: Rect) -> Vec<(WinId, Rect)> {
        let n = s.len() as u32;

        if n <= self.max_main || r.w < 2 {
            // All windows fit in the main region so they share a single stack
            return r.as_rows(n).iter().zip(s).map(|(r, c)| (*c, *r)).collect();
        }

        // Two stacks, so split the screen in two and then build a stack for each.
        // The split point is clamped to keep both regions non-empty.
        let split = (((r.w as f32) * self.ratio) as u32).clamp(1, r.w - 1);
        let (main, stack) = r.split_at_width(split).expect("split point is in bounds");

        main.as_rows(self.max_main)
            .into_iter()
            .chain(stack.as_rows(n - self.max_main))
            .zip(s)
            .map(|(r, c)| (*c, r))
            .collect()
    }
}

impl Default for MainAndStack {
    fn default() -> Self {
        Self {
            max_main: 1,
            ratio: 0.6,
            ratio_step: 0.1,
        }
    }
}

impl Layout for MainAndStack {
    fn name(&self) -> String {
        "Side".to_owned()
    }

    fn boxed_clone(&self) -> Box<dyn Layout> {
        Box::new(*self)
    }

    fn layout(&mut self, s: &Stack<WinId>, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        (None, self.layout_side(s, r))
    }

    fn handle_message(&mut self, m: &Message) -> Option<Box<dyn Layout>> {
        match m {
            Message::ExpandMain => {
                self.ratio = (self.ratio + self.ratio_step).min(1.0);
            }
            Message::ShrinkMain => {
                self.ratio = (self.ratio - self.ratio_step).max(0.0);
            }
            &Message::IncMain(n) => {
                let new = self.max_main as i64 + n as i64;
                self.max_main = new.max(1) as u32;
            }
            _ => (),
        }

        None
    }
}

/// A simple fullscreen layout that gives the maximum available space to the
/// currently focused client and hides all other windows.
#[derive(Debug, Clone, Copy)]
pub struct Monocle;

impl Monocle {
    /// Create a new [Monocle] as a boxed trait object ready for use in a
    /// layout stack.
    pub fn boxed() -> Box<dyn Layout> {
        Box::new(Monocle)
    }
}

impl Layout for Monocle {
    fn name(&self) -> String {
        "Mono".to_owned()
    }

    fn boxed_clone(&self) -> Box<dyn Layout> {
        Self::boxed()
    }

    fn layout(&mut self, s: &Stack<WinId>, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        (None, vec![(s.focus, r)])
    }

    fn handle_message(&mut self, _: &Message) -> Option<Box<dyn Layout>> {
        None
    }
}

/// A fixed grid layout.
///
/// Windows are arranged into `ceil(sqrt(n))` columns with the rows of each
/// column balanced so that no column holds more than one window over any
/// other. The grid is an exact partition of the screen. There are no
/// parameters to adjust so all messages are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grid;

impl Grid {
    /// Create a new [Grid] as a boxed trait object ready for use in a layout
    /// stack.
    pub fn boxed() -> Box<dyn Layout> {
        Box::new(Grid)
    }
}

impl Layout for Grid {
    fn name(&self) -> String {
        "Grid".to_owned()
    }

    fn boxed_clone(&self) -> Box<dyn Layout> {
        Self::boxed()
    }

    fn layout(&mut self, s: &Stack<WinId>, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let n = s.len() as u32;
        let n_cols = (n as f64).sqrt().ceil() as u32;
        let per_col = n / n_cols;
        let with_extra = (n % n_cols) as usize;

        let rects = r
            .as_columns(n_cols)
            .into_iter()
            .enumerate()
            .flat_map(|(i, col)| {
                let rows = if i < with_extra { per_col + 1 } else { per_col };
                col.as_rows(rows)
            });

        (None, rects.zip(s).map(|(r, c)| (*c, r)).collect())
    }

    fn handle_message(&mut self, _: &Message) -> Option<Box<dyn Layout>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack;
    use simple_test_case::test_case;

    fn ids(ids: &[u32]) -> Vec<WinId> {
        ids.iter().map(|&id| WinId(id)).collect()
    }

    // The stack below is the result of inserting windows 1, 2 and 3 in that
    // order: stack order holds the arrival order and the most recent window
    // is focused.
    fn three_windows() -> Stack<WinId> {
        let mut s = stack!(WinId(1));
        s.insert(WinId(2));
        s.insert(WinId(3));

        s
    }

    #[test]
    fn master_takes_the_left_pane_and_the_rest_stack_right() {
        let mut l = MainAndStack::new(1, 0.5, 0.1);

        let (_, positions) = l.layout(&three_windows(), Rect::new(0, 0, 1000, 600));

        assert_eq!(
            positions,
            vec![
                (WinId(1), Rect::new(0, 0, 500, 600)),
                (WinId(2), Rect::new(500, 0, 500, 300)),
                (WinId(3), Rect::new(500, 300, 500, 300)),
            ]
        );
    }

    #[test]
    fn inc_main_pulls_the_next_window_into_the_main_pane() {
        let mut l = MainAndStack::new(1, 0.5, 0.1);

        l.handle_message(&Message::IncMain(1));
        let (_, positions) = l.layout(&three_windows(), Rect::new(0, 0, 1000, 600));

        assert_eq!(
            positions,
            vec![
                (WinId(1), Rect::new(0, 0, 500, 300)),
                (WinId(2), Rect::new(0, 300, 500, 300)),
                (WinId(3), Rect::new(500, 0, 500, 600)),
            ]
        );
    }

    #[test_case(Message::IncMain(2), 3; "increase")]
    #[test_case(Message::IncMain(-2), 1; "decrease is floored at one")]
    #[test]
    fn inc_main_clamps(m: Message, expected: u32) {
        let mut l = MainAndStack::new(1, 0.6, 0.1);

        l.handle_message(&m);

        assert_eq!(l.max_main, expected);
    }

    #[test_case(Message::ExpandMain, 0.7; "expand")]
    #[test_case(Message::ShrinkMain, 0.5; "shrink")]
    #[test]
    fn ratio_messages_step_the_split(m: Message, expected: f32) {
        let mut l = MainAndStack::new(1, 0.6, 0.1);

        l.handle_message(&m);

        assert!((l.ratio - expected).abs() < 0.0001);
    }

    #[test]
    fn ratio_is_clamped() {
        let mut l = MainAndStack::new(1, 0.9, 0.5);

        l.handle_message(&Message::ExpandMain);
        assert_eq!(l.ratio, 1.0);

        l.handle_message(&Message::ShrinkMain);
        l.handle_message(&Message::ShrinkMain);
        l.handle_message(&Message::ShrinkMain);
        assert_eq!(l.ratio, 0.0);
    }

    #[test]
    fn monocle_positions_only_the_focused_client() {
        let r = Rect::new(0, 0, 800, 600);
        let (_, positions) = Monocle.layout(&three_windows(), r);

        assert_eq!(positions, vec![(WinId(3), r)]);
    }

    #[test_case(1, &[(0, 0, 100, 90)]; "single window")]
    #[test_case(2, &[(0, 0, 50, 90), (50, 0, 50, 90)]; "two columns")]
    #[test_case(3, &[(0, 0, 50, 45), (0, 45, 50, 45), (50, 0, 50, 90)]; "first column takes the extra window")]
    #[test]
    fn grid_layout(n: u32, expected: &[(u32, u32, u32, u32)]) {
        let s = Stack::try_from_iter((1..=n).map(WinId)).unwrap();
        let (_, positions) = Grid.layout(&s, Rect::new(0, 0, 100, 90));

        let expected: Vec<(WinId, Rect)> = ids(&(1..=n).collect::<Vec<_>>())
            .into_iter()
            .zip(expected.iter().map(|&(x, y, w, h)| Rect::new(x, y, w, h)))
            .collect();

        assert_eq!(positions, expected);
    }
}
