//! Layouts for positioning client windows on the screen within a given workspace.
use crate::{
    builtin::layout::MainAndStack,
    pure::{geometry::Rect, Stack},
    WinId,
};
use std::fmt;

pub mod messages;
pub mod transformers;

#[doc(inline)]
pub use messages::Message;
#[doc(inline)]
pub use transformers::LayoutTransformer;

/// A [Layout] is responsible for positioning a [Stack] of clients in a given
/// coordinate space denoting the dimensions of the screen that the clients
/// are displayed on.
///
/// Mutating the state of a Layout is possible by sending it a [Message] which
/// can then either modify the existing layout (e.g. increase the number of
/// clients positioned in a "main" area) or replace the existing Layout with a
/// new one. There is no requirement to be able to handle all message types.
pub trait Layout {
    /// A short display name for this Layout, appropriate for rendering in a
    /// status bar as an indicator of which layout is currently being used.
    ///
    /// Names also identify layouts for [Message::JumpToLayout], so they
    /// should be stable and unique within any one [LayoutStack].
    fn name(&self) -> String;

    /// Create a clone of this layout as a trait object.
    ///
    /// Layouts are stored and passed around as `Box<dyn Layout>` so this
    /// stands in for the [Clone] implementation they can not have directly.
    fn boxed_clone(&self) -> Box<dyn Layout>;

    /// Generate screen positions for clients on a given workspace.
    ///
    /// If you do not need to know the tag of the workspace being laid out
    /// you should use the default implementation of this method which calls
    /// [Layout::layout] if there are any clients present and
    /// [Layout::layout_empty] if not.
    ///
    /// # Positioning clients
    /// For each client that should be shown on the screen a pair of its
    /// [WinId] and a [Rect] should be provided, indicating the screen
    /// position the client should be placed at. To hide a client that is
    /// present in the [Stack], simply do not provide a position for it.
    ///
    /// The order in which the pairs are returned determines the stacking
    /// order on the screen: later positions stack above earlier ones.
    ///
    /// # Returning a new layout
    /// Returning `Some(layout)` from any of the layout methods replaces this
    /// layout for subsequent calls. `None` means the layout is unchanged.
    fn layout_workspace(
        &mut self,
        tag: &str,
        stack: &Option<Stack<WinId>>,
        r: Rect,
    ) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let _ = tag;
        match stack {
            Some(s) => self.layout(s, r),
            None => self.layout_empty(r),
        }
    }

    /// Generate screen positions for clients from a given [Stack].
    ///
    /// See [Layout::layout_workspace] for details of how positions should be
    /// returned.
    fn layout(&mut self, s: &Stack<WinId>, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>);

    /// Generate screen positions for an empty [Stack].
    ///
    /// See [Layout::layout_workspace] for details of how positions should be
    /// returned.
    fn layout_empty(&mut self, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let _ = r;
        (None, vec![])
    }

    /// Process a dynamic [Message].
    ///
    /// See the trait level docs for details on what is possible with
    /// messages. Unrecognised messages must be ignored, leaving the layout
    /// state unchanged and returning `None`.
    fn handle_message(&mut self, m: &Message) -> Option<Box<dyn Layout>>;
}

impl fmt::Debug for dyn Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout").field("name", &self.name()).finish()
    }
}

impl Clone for Box<dyn Layout> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

impl Default for Box<dyn Layout> {
    fn default() -> Self {
        MainAndStack::boxed_default()
    }
}

/// A stack of [Layout] alternatives for use on a particular workspace.
///
/// The focused layout is the active one; the rest are dormant alternatives.
/// The stack itself acts as a [Layout], deferring operations to the focus,
/// and doubles as the switchable alternation combinator:
/// [Message::NextLayout] advances through the alternatives with wraparound
/// (the zipper wraps, so two alternatives return to the start after two
/// advances) and [Message::JumpToLayout] selects an alternative by name. In
/// both cases the layout being deactivated is sent [Message::Hide] first so
/// that it can release any resources it holds; layouts that are passed over
/// receive nothing.
pub type LayoutStack = Stack<Box<dyn Layout>>;

impl LayoutStack {
    /// Send the given [Message] to every [Layout] in this stack rather than
    /// just the currently focused one.
    pub fn broadcast_message(&mut self, m: &Message) {
        for l in self.iter_mut() {
            if let Some(new) = l.handle_message(m) {
                *l = new;
            }
        }
    }

    fn hide_focused(&mut self) {
        if let Some(new) = self.focus.handle_message(&Message::Hide) {
            self.focus = new;
        }
    }

    pub(crate) fn advance_layout(&mut self, forward: bool) {
        if self.len() == 1 {
            return;
        }

        self.hide_focused();
        if forward {
            self.focus_down();
        } else {
            self.focus_up();
        }
    }

    pub(crate) fn jump_to_layout(&mut self, name: &str) {
        if self.focus.name() == name || !self.iter().any(|l| l.name() == name) {
            return;
        }

        self.hide_focused();
        while self.focus.name() != name {
            self.focus_down();
        }
    }
}

impl Layout for LayoutStack {
    fn name(&self) -> String {
        self.focus.name()
    }

    fn boxed_clone(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }

    // NOTE: We allow for swapping out the current layout for a new one when
    // layout operations run, so we can't just defer to the focus directly.
    fn layout_workspace(
        &mut self,
        tag: &str,
        stack: &Option<Stack<WinId>>,
        r: Rect,
    ) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let (new, positions) = self.focus.layout_workspace(tag, stack, r);
        if let Some(l) = new {
            self.focus = l;
        }

        (None, positions)
    }

    fn layout(&mut self, s: &Stack<WinId>, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let (new, positions) = self.focus.layout(s, r);
        if let Some(l) = new {
            self.focus = l;
        }

        (None, positions)
    }

    fn layout_empty(&mut self, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let (new, positions) = self.focus.layout_empty(r);
        if let Some(l) = new {
            self.focus = l;
        }

        (None, positions)
    }

    fn handle_message(&mut self, m: &Message) -> Option<Box<dyn Layout>> {
        match m {
            Message::NextLayout => self.advance_layout(true),
            Message::JumpToLayout(name) => self.jump_to_layout(name),
            m => {
                if let Some(new) = self.focus.handle_message(m) {
                    self.focus = new;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack;
    use std::{cell::Cell, rc::Rc};

    // A layout that records how many times it has been hidden so the tests
    // can observe the Hide protocol of LayoutStack.
    #[derive(Clone)]
    pub(crate) struct HideTracker {
        name: String,
        pub hides: Rc<Cell<usize>>,
    }

    impl HideTracker {
        pub fn boxed(name: &str) -> (Box<dyn Layout>, Rc<Cell<usize>>) {
            let hides = Rc::new(Cell::new(0));
            let l = Self {
                name: name.to_owned(),
                hides: Rc::clone(&hides),
            };

            (Box::new(l), hides)
        }
    }

    impl Layout for HideTracker {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn boxed_clone(&self) -> Box<dyn Layout> {
            Box::new(self.clone())
        }

        fn layout(
            &mut self,
            _: &Stack<WinId>,
            _: Rect,
        ) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
            (None, vec![])
        }

        fn handle_message(&mut self, m: &Message) -> Option<Box<dyn Layout>> {
            if let Message::Hide = m {
                self.hides.set(self.hides.get() + 1);
            }

            None
        }
    }

    #[test]
    fn next_layout_twice_returns_to_the_start_with_two_alternatives() {
        let (a, _) = HideTracker::boxed("a");
        let (b, _) = HideTracker::boxed("b");
        let mut ls: LayoutStack = stack!(a, [b]);

        assert_eq!(ls.name(), "a");

        ls.handle_message(&Message::NextLayout);
        assert_eq!(ls.name(), "b");

        ls.handle_message(&Message::NextLayout);
        assert_eq!(ls.name(), "a");
    }

    #[test]
    fn next_layout_hides_the_deactivated_alternative() {
        let (a, hides_a) = HideTracker::boxed("a");
        let (b, hides_b) = HideTracker::boxed("b");
        let mut ls: LayoutStack = stack!(a, [b]);

        ls.handle_message(&Message::NextLayout);

        assert_eq!(hides_a.get(), 1);
        assert_eq!(hides_b.get(), 0);
    }

    #[test]
    fn jump_to_layout_hides_only_the_active_alternative() {
        let (a, hides_a) = HideTracker::boxed("a");
        let (b, hides_b) = HideTracker::boxed("b");
        let (c, hides_c) = HideTracker::boxed("c");
        let mut ls: LayoutStack = stack!(a, [b, c]);

        ls.handle_message(&Message::JumpToLayout("c".to_owned()));

        assert_eq!(ls.name(), "c");
        assert_eq!(hides_a.get(), 1);
        assert_eq!(hides_b.get(), 0, "passed over layouts get no messages");
        assert_eq!(hides_c.get(), 0);
    }

    #[test]
    fn jump_to_unknown_layout_is_a_no_op() {
        let (a, hides_a) = HideTracker::boxed("a");
        let (b, _) = HideTracker::boxed("b");
        let mut ls: LayoutStack = stack!(a, [b]);

        ls.handle_message(&Message::JumpToLayout("nope".to_owned()));

        assert_eq!(ls.name(), "a");
        assert_eq!(hides_a.get(), 0);
    }

    #[test]
    fn next_layout_with_a_single_alternative_is_a_no_op() {
        let (a, hides_a) = HideTracker::boxed("a");
        let mut ls: LayoutStack = stack!(a);

        ls.handle_message(&Message::NextLayout);

        assert_eq!(ls.name(), "a");
        assert_eq!(hides_a.get(), 0);
    }

    #[test]
    fn broadcast_message_reaches_every_alternative() {
        let (a, hides_a) = HideTracker::boxed("a");
        let (b, hides_b) = HideTracker::boxed("b");
        let mut ls: LayoutStack = stack!(a, [b]);

        ls.broadcast_message(&Message::Hide);

        assert_eq!(hides_a.get(), 1);
        assert_eq!(hides_b.get(), 1);
    }
}
