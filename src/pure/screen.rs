use crate::pure::{geometry::Rect, Workspace};

/// A physical display region with fixed geometry, showing exactly one
/// [Workspace] at a time.
///
/// Screen geometry is taken from the display connection at startup and is
/// immutable for the lifetime of the process.
#[derive(Default, Debug, Clone)]
pub struct Screen<C> {
    pub(crate) index: usize,
    /// The workspace currently displayed on this screen
    pub workspace: Workspace<C>,
    pub(crate) r: Rect,
}

impl<C> Screen<C> {
    /// The index of this screen in the order reported by the display
    /// connection.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The geometry of this screen.
    pub fn geometry(&self) -> Rect {
        self.r
    }
}
