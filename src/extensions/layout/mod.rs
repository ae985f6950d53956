//! Higher order combinators for Layouts that allow for composing their behaviour.
use crate::{
    core::layout::{Layout, Message},
    pure::{geometry::Rect, Stack},
    WinId,
};
use std::fmt;

/// Message tag for [expand_split]
pub const EXPAND_SPLIT: &str = "trellis::expand-split";
/// Message tag for [shrink_split]
pub const SHRINK_SPLIT: &str = "trellis::shrink-split";

/// A [Message] asking a [SplitPair] to grow its first pane.
pub fn expand_split() -> Message {
    Message::custom(EXPAND_SPLIT, ())
}

/// A [Message] asking a [SplitPair] to shrink its first pane.
pub fn shrink_split() -> Message {
    Message::custom(SHRINK_SPLIT, ())
}

fn stack_focused_at(clients: &[WinId], idx: usize) -> Option<Stack<WinId>> {
    if clients.is_empty() {
        return None;
    }

    Some(Stack::new(
        clients[..idx].iter().copied(),
        clients[idx],
        clients[idx + 1..].iter().copied(),
    ))
}

/// The axis along which a [SplitPair] divides the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Side by side panes: the first pane is on the left
    Vertical,
    /// Stacked panes: the first pane is on top
    Horizontal,
}

/// Combine two layouts into one by splitting the screen between them.
///
/// The first `n_first` clients in stack order are laid out by the first
/// layout within its pane and the remaining clients by the second layout
/// within its pane. When either group is empty the other layout receives
/// the full screen. Each sub-layout positions its own clients independently,
/// knowing nothing of the other pane.
///
/// Messages are routed to the pane currently holding the focused client,
/// which is tracked each time the combined layout runs. [Message::IncMain]
/// is consumed to move clients between the panes and, for a draggable
/// split, [expand_split] and [shrink_split] are consumed to move the split
/// point. [Message::Hide] and [Message::ShutDown] are always delivered to
/// both layouts so that each side can release its resources.
pub struct SplitPair {
    split: Split,
    ratio: f32,
    ratio_step: f32,
    n_first: u32,
    first: Box<dyn Layout>,
    second: Box<dyn Layout>,
    focus_in_first: bool,
}

impl fmt::Debug for SplitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitPair")
            .field("split", &self.split)
            .field("ratio", &self.ratio)
            .field("n_first", &self.n_first)
            .field("first", &self.first.name())
            .field("second", &self.second.name())
            .finish()
    }
}

impl SplitPair {
    /// Combine two layouts with a fixed ratio split: messages can move
    /// clients between the panes but not the split point itself.
    pub fn fixed(
        split: Split,
        ratio: f32,
        n_first: u32,
        first: Box<dyn Layout>,
        second: Box<dyn Layout>,
    ) -> Box<dyn Layout> {
        Self::new(split, ratio, 0.0, n_first, first, second)
    }

    /// Combine two layouts with a draggable split: [expand_split] and
    /// [shrink_split] move the split point by `ratio_step`.
    pub fn draggable(
        split: Split,
        ratio: f32,
        ratio_step: f32,
        n_first: u32,
        first: Box<dyn Layout>,
        second: Box<dyn Layout>,
    ) -> Box<dyn Layout> {
        Self::new(split, ratio, ratio_step, n_first, first, second)
    }

    fn new(
        split: Split,
        ratio: f32,
        ratio_step: f32,
        n_first: u32,
        first: Box<dyn Layout>,
        second: Box<dyn Layout>,
    ) -> Box<dyn Layout> {
        Box::new(Self {
            split,
            ratio: ratio.clamp(0.05, 0.95),
            ratio_step,
            n_first: n_first.max(1),
            first,
            second,
            focus_in_first: true,
        })
    }

    fn pane_rects(&self, r: Rect) -> (Rect, Rect) {
        let split = match self.split {
            Split::Vertical => r.split_at_width_fraction(self.ratio),
            Split::Horizontal => r.split_at_height_fraction(self.ratio),
        };

        // the ratio clamp keeps the fraction strictly inside (0, 1) so a
        // failed split can only come from a degenerate input rect
        split.unwrap_or((r, r))
    }
}

impl Layout for SplitPair {
    fn name(&self) -> String {
        format!("{}|{}", self.first.name(), self.second.name())
    }

    fn boxed_clone(&self) -> Box<dyn Layout> {
        Box::new(Self {
            split: self.split,
            ratio: self.ratio,
            ratio_step: self.ratio_step,
            n_first: self.n_first,
            first: self.first.boxed_clone(),
            second: self.second.boxed_clone(),
            focus_in_first: self.focus_in_first,
        })
    }

    fn layout(&mut self, s: &Stack<WinId>, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let clients: Vec<WinId> = s.iter().copied().collect();
        let k = (self.n_first as usize).min(clients.len());
        let focused_idx = clients
            .iter()
            .position(|c| c == s.focused())
            .expect("the focused client is in the stack");
        self.focus_in_first = focused_idx < k;

        // The pane holding the true focus keeps it focused; the other pane
        // defaults focus to its first client.
        let in_first = if self.focus_in_first {
            stack_focused_at(&clients[..k], focused_idx)
        } else {
            Stack::try_from_iter(clients[..k].iter().copied())
        };
        let in_second = if self.focus_in_first {
            Stack::try_from_iter(clients[k..].iter().copied())
        } else {
            stack_focused_at(&clients[k..], focused_idx - k)
        };

        let (positions, new_first, new_second) = match (in_first, in_second) {
            (Some(a), None) => {
                let (new, ps) = self.first.layout(&a, r);
                (ps, new, None)
            }
            (None, Some(b)) => {
                let (new, ps) = self.second.layout(&b, r);
                (ps, None, new)
            }
            (Some(a), Some(b)) => {
                let (ra, rb) = self.pane_rects(r);
                let (new_a, mut ps) = self.first.layout(&a, ra);
                let (new_b, mut ps_b) = self.second.layout(&b, rb);
                ps.append(&mut ps_b);
                (ps, new_a, new_b)
            }
            (None, None) => unreachable!("layout is never called with an empty stack"),
        };

        if let Some(l) = new_first {
            self.first = l;
        }
        if let Some(l) = new_second {
            self.second = l;
        }

        (None, positions)
    }

    fn handle_message(&mut self, m: &Message) -> Option<Box<dyn Layout>> {
        match m {
            &Message::IncMain(n) => {
                let new = self.n_first as i64 + n as i64;
                self.n_first = new.max(1) as u32;
                return None;
            }

            Message::Hide | Message::ShutDown => {
                if let Some(new) = self.first.handle_message(m) {
                    self.first = new;
                }
                if let Some(new) = self.second.handle_message(m) {
                    self.second = new;
                }
                return None;
            }

            Message::Custom(c) if self.ratio_step > 0.0 => match c.tag() {
                EXPAND_SPLIT => {
                    self.ratio = (self.ratio + self.ratio_step).clamp(0.05, 0.95);
                    return None;
                }
                SHRINK_SPLIT => {
                    self.ratio = (self.ratio - self.ratio_step).clamp(0.05, 0.95);
                    return None;
                }
                _ => (),
            },

            _ => (),
        }

        // everything else belongs to the pane holding the focused client
        let target = if self.focus_in_first {
            &mut self.first
        } else {
            &mut self.second
        };

        if let Some(new) = target.handle_message(m) {
            *target = new;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::layout::{Grid, MainAndStack, Monocle};
    use simple_test_case::test_case;

    fn five_windows() -> Stack<WinId> {
        let mut s = Stack::from_iter_unchecked((1..=5).map(WinId));
        s.focus_down(); // focus 2, keeping order 1..5

        s
    }

    fn pair(n_first: u32) -> Box<dyn Layout> {
        SplitPair::fixed(
            Split::Vertical,
            0.5,
            n_first,
            Monocle::boxed(),
            Grid::boxed(),
        )
    }

    #[test]
    fn name_combines_both_sides() {
        assert_eq!(pair(2).name(), "Mono|Grid");
    }

    #[test]
    fn clients_are_partitioned_between_the_panes() {
        let mut l = pair(2);

        let (_, positions) = l.layout(&five_windows(), Rect::new(0, 0, 1000, 600));

        // Monocle shows only the focused client of its pane; the grid tiles
        // the remaining three in the right pane.
        assert_eq!(
            positions,
            vec![
                (WinId(2), Rect::new(0, 0, 500, 600)),
                (WinId(3), Rect::new(500, 0, 250, 300)),
                (WinId(4), Rect::new(500, 300, 250, 300)),
                (WinId(5), Rect::new(750, 0, 250, 600)),
            ]
        );
    }

    #[test]
    fn an_empty_side_cedes_the_whole_screen() {
        let mut l = pair(5);
        let r = Rect::new(0, 0, 1000, 600);

        let (_, positions) = l.layout(&five_windows(), r);

        // all five clients are in the first pane: Monocle gets the full rect
        assert_eq!(positions, vec![(WinId(2), r)]);
    }

    #[test_case(1, true; "first pane holds focus")]
    #[test_case(4, false; "second pane holds focus")]
    #[test]
    fn messages_follow_the_focused_client(focus_steps: usize, first_should_change: bool) {
        let mut l = SplitPair::fixed(
            Split::Vertical,
            0.5,
            3,
            MainAndStack::boxed(1, 0.5, 0.1),
            MainAndStack::boxed(1, 0.5, 0.1),
        );

        let mut s = Stack::from_iter_unchecked((1..=5).map(WinId));
        for _ in 0..focus_steps {
            s.focus_down();
        }

        l.layout(&s, Rect::new(0, 0, 1000, 600));
        l.handle_message(&Message::ExpandMain); // forwarded to the focused pane

        // Lay out again and check which pane changed shape: expanding the
        // main area of a MainAndStack widens its main client. With three
        // clients in the 500px first pane, the untouched main width is 250.
        let (_, positions) = l.layout(&s, Rect::new(0, 0, 1000, 600));
        let first_changed = positions[0].1.w != 250;

        assert_eq!(first_changed, first_should_change);
    }

    #[test]
    fn inc_main_moves_the_partition_point() {
        let mut l = pair(1);
        let r = Rect::new(0, 0, 1000, 600);

        let (_, before) = l.layout(&five_windows(), r);
        assert_eq!(before.len(), 5, "one window left of the split, four tiled");

        l.handle_message(&Message::IncMain(1));
        let (_, after) = l.layout(&five_windows(), r);
        assert_eq!(after.len(), 4, "two monocled windows show one position");
    }

    #[test]
    fn draggable_split_consumes_resize_messages() {
        let mut l = SplitPair::draggable(
            Split::Vertical,
            0.5,
            0.1,
            1,
            Monocle::boxed(),
            Monocle::boxed(),
        );
        let r = Rect::new(0, 0, 1000, 600);

        l.handle_message(&expand_split());
        let (_, positions) = l.layout(&five_windows(), r);

        assert_eq!(positions[0].1.w, 600, "first pane grew by one step");
    }

    #[test]
    fn fixed_split_ignores_resize_messages() {
        let mut l = pair(1);
        let r = Rect::new(0, 0, 1000, 600);

        l.handle_message(&expand_split());
        let (_, positions) = l.layout(&five_windows(), r);

        assert_eq!(positions[0].1.w, 500);
    }
}
