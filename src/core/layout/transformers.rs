//! Composable wrappers around the behaviour of an inner [Layout].
use crate::{
    core::layout::{Layout, Message},
    pure::{geometry::Rect, Stack},
    WinId,
};
use std::mem::swap;

/// A wrapper around another [Layout] that is able to intercept and modify
/// the rectangle and window list the inner layout sees, the positions it
/// returns and the messages that are sent to it.
///
/// Any type implementing this trait is usable anywhere a [Layout] is
/// expected via the blanket `impl Layout`. Transformers nest: wrapping an
/// already wrapped layout composes the transformations with the outermost
/// wrapper running first on the way in and last on the way out.
pub trait LayoutTransformer: Sized + 'static {
    /// The same as [Layout::name] but for [LayoutTransformer] itself.
    ///
    /// The name of a composed layout should include the inner layout's name
    /// so that [Message::JumpToLayout] matching and status bar rendering see
    /// the full composition.
    fn transformed_name(&self) -> String;

    /// Provide a mutable reference to the [Layout] wrapped by this
    /// transformer.
    fn inner_mut(&mut self) -> &mut Box<dyn Layout>;

    /// Construct a clone of this transformer as a trait object.
    fn clone_transformer(&self) -> Box<dyn Layout>;

    /// Replace the currently wrapped [Layout] with a new one.
    fn swap_inner(&mut self, mut new: Box<dyn Layout>) -> Box<dyn Layout> {
        swap(self.inner_mut(), &mut new);

        new
    }

    /// Optionally modify the screen rectangle before it is passed to the
    /// wrapped [Layout]. The default leaves it unchanged.
    fn transform_initial(&self, r: Rect) -> Rect {
        r
    }

    /// Optionally replace the window list the wrapped [Layout] will see.
    /// Returning `None` (the default) lays out the stack unchanged.
    fn transform_stack(&self, s: &Stack<WinId>) -> Option<Stack<WinId>> {
        let _ = s;
        None
    }

    /// Optionally modify any of the positions returned by the wrapped
    /// [Layout] before they are applied by the window manager. The
    /// dimensions of the screen being laid out are available as `r`.
    fn transform_positions(&mut self, r: Rect, positions: Vec<(WinId, Rect)>) -> Vec<(WinId, Rect)> {
        let _ = r;
        positions
    }

    /// Apply this transformer around a layout operation on the wrapped
    /// [Layout], handling replacement of the inner layout if it requests it.
    fn run_transform<F>(&mut self, f: F, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>)
    where
        F: FnOnce(&mut Box<dyn Layout>) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>),
    {
        let (new, positions) = (f)(self.inner_mut());
        let transformed = self.transform_positions(r, positions);

        if let Some(l) = new {
            self.swap_inner(l);
        }

        (None, transformed)
    }

    /// Pass a message on to the wrapped inner [Layout].
    ///
    /// The default implementation forwards every message, including
    /// [Message::Hide] and [Message::ShutDown]. A transformer holding
    /// external resources must override this to release them when either of
    /// those messages arrives, before forwarding to the inner layout.
    fn passthrough_message(&mut self, m: &Message) -> Option<Box<dyn Layout>> {
        if let Some(new) = self.inner_mut().handle_message(m) {
            self.swap_inner(new);
        }

        None
    }
}

impl<LT> Layout for LT
where
    LT: LayoutTransformer,
{
    fn name(&self) -> String {
        self.transformed_name()
    }

    fn boxed_clone(&self) -> Box<dyn Layout> {
        self.clone_transformer()
    }

    fn layout_workspace(
        &mut self,
        tag: &str,
        stack: &Option<Stack<WinId>>,
        r: Rect,
    ) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let r_inner = self.transform_initial(r);
        let stack = match stack {
            Some(s) => Some(self.transform_stack(s).unwrap_or_else(|| s.clone())),
            None => None,
        };

        self.run_transform(|inner| inner.layout_workspace(tag, &stack, r_inner), r)
    }

    fn layout(&mut self, s: &Stack<WinId>, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let r_inner = self.transform_initial(r);

        match self.transform_stack(s) {
            Some(new_stack) => self.run_transform(|inner| inner.layout(&new_stack, r_inner), r),
            None => self.run_transform(|inner| inner.layout(s, r_inner), r),
        }
    }

    fn layout_empty(&mut self, r: Rect) -> (Option<Box<dyn Layout>>, Vec<(WinId, Rect)>) {
        let r_inner = self.transform_initial(r);

        self.run_transform(|inner| inner.layout_empty(r_inner), r)
    }

    fn handle_message(&mut self, m: &Message) -> Option<Box<dyn Layout>> {
        self.passthrough_message(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builtin::layout::MainAndStack, stack};

    #[derive(Clone)]
    struct Offset {
        inner: Box<dyn Layout>,
        dx: i32,
    }

    impl LayoutTransformer for Offset {
        fn transformed_name(&self) -> String {
            format!("Offset<{}>", self.inner.name())
        }

        fn inner_mut(&mut self) -> &mut Box<dyn Layout> {
            &mut self.inner
        }

        fn clone_transformer(&self) -> Box<dyn Layout> {
            Box::new(self.clone())
        }

        fn transform_positions(
            &mut self,
            _: Rect,
            positions: Vec<(WinId, Rect)>,
        ) -> Vec<(WinId, Rect)> {
            positions
                .into_iter()
                .map(|(id, mut r)| {
                    r.reposition(self.dx, 0);
                    (id, r)
                })
                .collect()
        }
    }

    #[test]
    fn composed_names_include_the_inner_layout() {
        let l = Offset {
            inner: Box::new(Offset {
                inner: MainAndStack::boxed_default(),
                dx: 1,
            }),
            dx: 2,
        };

        assert_eq!(l.name(), "Offset<Offset<Side>>");
    }

    #[test]
    fn transformed_positions_apply_outermost_last() {
        let mut l = Offset {
            inner: Box::new(Offset {
                inner: MainAndStack::boxed_default(),
                dx: 10,
            }),
            dx: 100,
        };

        let s = stack!(WinId(1));
        let (_, positions) = l.layout(&s, Rect::new(0, 0, 500, 500));

        assert_eq!(positions, vec![(WinId(1), Rect::new(110, 0, 500, 500))]);
    }
}
