//! Hook points for user code to run inside the window manager lifecycle.
use crate::{
    core::State,
    display::DisplayConn,
    Result, WinId,
};

/// An arbitrary action to run when window manager state changes, after each
/// refresh.
pub trait StateHook<X: DisplayConn> {
    /// Run this hook.
    fn call(&mut self, state: &mut State<X>, x: &X) -> Result<()>;
}

impl<F, X> StateHook<X> for F
where
    F: FnMut(&mut State<X>, &X) -> Result<()>,
    X: DisplayConn,
{
    fn call(&mut self, state: &mut State<X>, x: &X) -> Result<()> {
        (self)(state, x)
    }
}

/// An action to run when a new client window is accepted for management,
/// before the first refresh that displays it. Typically used to set floating
/// state or move the client to a particular workspace.
pub trait ManageHook<X: DisplayConn> {
    /// Run this hook.
    fn call(&mut self, client: WinId, state: &mut State<X>, x: &X) -> Result<()>;
}

impl<F, X> ManageHook<X> for F
where
    F: FnMut(WinId, &mut State<X>, &X) -> Result<()>,
    X: DisplayConn,
{
    fn call(&mut self, client: WinId, state: &mut State<X>, x: &X) -> Result<()> {
        (self)(client, state, x)
    }
}

/// The urgency notifications delivered to an [UrgencyHook].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyEvent {
    /// The window has newly requested attention
    Urgent(WinId),
    /// A reminder interval elapsed while the window was still urgent
    Reminder(WinId),
}

/// An action to run when a window requests attention or when a reminder
/// interval elapses for a window that is still urgent.
pub trait UrgencyHook<X: DisplayConn> {
    /// Run this hook.
    fn call(&mut self, event: UrgencyEvent, state: &mut State<X>, x: &X) -> Result<()>;
}

impl<F, X> UrgencyHook<X> for F
where
    F: FnMut(UrgencyEvent, &mut State<X>, &X) -> Result<()>,
    X: DisplayConn,
{
    fn call(&mut self, event: UrgencyEvent, state: &mut State<X>, x: &X) -> Result<()> {
        (self)(event, state, x)
    }
}
