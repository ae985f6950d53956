//! Events delivered by the display connection to the window manager.
use crate::{core::urgency::TimerToken, WinId};

/// The subset of display server activity the window manager core reacts to.
///
/// Implementations of [DisplayConn][super::DisplayConn] are responsible for
/// translating their native event types into these variants. Each event maps
/// to at most one core operation and events are handled strictly one at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// A client window is asking to be displayed
    MapRequest(WinId),
    /// A client window has been unmapped from the screen
    Unmap(WinId),
    /// A client window has been destroyed
    Destroy(WinId),
    /// The pointer has entered a client window
    Enter(WinId),
    /// The attention / urgency related properties of a client changed
    PropertyHints(WinId),
    /// A reminder timer armed through
    /// [arm_timer][super::DisplayConn::arm_timer] has fired
    Timer(TimerToken),
    /// The window manager should shut down cleanly
    Shutdown,
}
