//! The boundary between the pure window manager core and the display server.
//!
//! [DisplayConn] is the narrow interface the core consumes: reading screen
//! and client information, issuing positioning / focus / border requests and
//! delivering [DisplayEvent]s. [DisplayConnExt] builds the refresh pipeline
//! on top of it: every mutation of the pure state is followed by a diff
//! against the previous state which is then replayed against the display
//! server as reveal / hide / position / focus / border calls.
use crate::{
    core::{
        hooks::{ManageHook as _, StateHook as _},
        layout::Message,
        urgency::TimerToken,
        ClientSet, State,
    },
    pure::geometry::Rect,
    Color, Result, WinId,
};
use std::collections::{HashMap, HashSet};
use tracing::{error, trace};

pub mod event;
pub mod hints;
pub mod mock;

#[doc(inline)]
pub use event::DisplayEvent;
#[doc(inline)]
pub use hints::{SizeHints, SizeHintsFlags};

/// A handle on a running display server connection.
///
/// This is the complete surface the window manager core needs from the
/// display protocol: everything else (event translation, property caching,
/// error tolerance for windows that vanish mid-operation) is the
/// implementer's concern. A request against a window that no longer exists
/// should be reported as success or as a benign [Error::Display][crate::Error]
/// by the implementation, not bubbled into the pure core.
pub trait DisplayConn {
    /// The id of the root window of the display.
    fn root(&self) -> WinId;

    /// The dimensions of each currently connected screen.
    ///
    /// This is read once at startup: screen geometry is fixed for the
    /// lifetime of the process.
    fn screen_details(&self) -> Result<Vec<Rect>>;

    /// Block until the next event is available and return it.
    fn next_event(&self) -> Result<DisplayEvent>;

    /// Flush any buffered requests to the display server.
    fn flush(&self);

    /// The ids of all client windows known to the display server, used to
    /// adopt windows that already exist when the window manager starts.
    fn existing_clients(&self) -> Result<Vec<WinId>>;

    /// The current geometry of the given client window.
    fn client_geometry(&self, client: WinId) -> Result<Rect>;

    /// The size hints requested by the given client, if it set any.
    fn client_size_hints(&self, client: WinId) -> Result<Option<SizeHints>>;

    /// Whether the given client currently has its urgency hint set.
    fn client_urgency_hint(&self, client: WinId) -> Result<bool>;

    /// Map the given client to the screen, making it visible.
    fn map(&self, client: WinId) -> Result<()>;

    /// Unmap the given client from the screen, hiding it.
    fn unmap(&self, client: WinId) -> Result<()>;

    /// Close the given client.
    fn kill(&self, client: WinId) -> Result<()>;

    /// Give input focus to the given client.
    fn focus(&self, client: WinId) -> Result<()>;

    /// Move and resize the given client.
    fn position_client(&self, client: WinId, r: Rect) -> Result<()>;

    /// Raise `client` so that it stacks directly above `other`.
    fn stack_above(&self, client: WinId, other: WinId) -> Result<()>;

    /// Set the border width of the given client in pixels.
    fn set_border_width(&self, client: WinId, px: u32) -> Result<()>;

    /// Set the border color of the given client.
    fn set_border_color(&self, client: WinId, color: Color) -> Result<()>;

    /// Intercept pointer input on the given client so that clicking it can
    /// be translated into a focus change.
    fn grab_input(&self, client: WinId) -> Result<()>;

    /// Stop intercepting pointer input on the given client.
    fn ungrab_input(&self, client: WinId) -> Result<()>;

    /// Schedule a reminder timer. When the interval elapses the connection
    /// delivers [DisplayEvent::Timer] carrying the same token.
    fn arm_timer(&self, token: TimerToken) -> Result<()>;

    /// Deschedule a reminder timer. A timer that fires anyway (the cancel
    /// raced with the event) is discarded by the core.
    fn cancel_timer(&self, token: TimerToken) -> Result<()>;
}

/// Extended functionality for [DisplayConn] impls in order to run the window
/// manager: the refresh pipeline and its helpers.
pub trait DisplayConnExt: DisplayConn + Sized {
    /// Establish window manager state for a new client window and refresh
    /// the display.
    fn manage(&self, id: WinId, state: &mut State<Self>) -> Result<()> {
        trace!(%id, "managing new client");
        manage_without_refresh(id, None, state, self)?;
        self.refresh(state)
    }

    /// Remove the window manager state for a client window and refresh the
    /// display.
    fn unmanage(&self, client: WinId, state: &mut State<Self>) -> Result<()> {
        trace!(%client, "removing client");
        self.modify_and_refresh(state, |cs| {
            cs.remove_client(&client);
        })
    }

    /// Ask the display server to close the currently focused client.
    fn kill_focused(&self, state: &mut State<Self>) -> Result<()> {
        self.modify_and_refresh(state, |cs| cs.kill_focused())
    }

    /// Focus the given client along with its enclosing workspace and
    /// refresh the display.
    fn set_active_client(&self, client: WinId, state: &mut State<Self>) -> Result<()> {
        self.modify_and_refresh(state, |cs| cs.focus_client(&client))
    }

    /// Apply a pure function that modifies the [ClientSet] and then handle
    /// refreshing the display.
    ///
    /// This is the main logic that drives what the user sees on the screen
    /// in terms of window placement, focus and borders. Everything is driven
    /// from a diff of the pure state before and after the mutation carried
    /// out by `f`.
    fn modify_and_refresh<F>(&self, state: &mut State<Self>, mut f: F) -> Result<()>
    where
        F: FnMut(&mut ClientSet),
    {
        f(&mut state.client_set); // NOTE: mutating the existing state

        let snapshot = state.client_set.position_and_snapshot();
        state.diff.update(snapshot);

        notify_killed(self, state)?;
        clear_urgency_of_focused(self, state)?;
        set_window_props(self, state)?;
        notify_hidden_workspaces(state);
        self.position_clients(state.config.border_width, &state.diff.after.positions)?;
        set_window_visibility(self, state)?;
        set_focus(self, state)?;
        update_input_grabs(self, state)?;

        let mut hook = state.config.refresh_hook.take();
        if let Some(ref mut h) = hook {
            trace!("running user refresh hook");
            if let Err(e) = h.call(state, self) {
                error!(%e, "error returned from user refresh hook");
            }
        }
        state.config.refresh_hook = hook;

        Ok(())
    }

    /// Refresh the display based on a diff of the current state against the
    /// state when we last refreshed.
    fn refresh(&self, state: &mut State<Self>) -> Result<()> {
        self.modify_and_refresh(state, |_| ())
    }

    /// Display a client on the screen by mapping it.
    /// This is idempotent if the client is already visible.
    fn reveal(&self, client: WinId, cs: &ClientSet, mapped: &mut HashSet<WinId>) -> Result<()> {
        self.map(client)?;
        if cs.contains(&client) {
            mapped.insert(client);
        }

        Ok(())
    }

    /// Hide a client by unmapping it, recording the unmap so that the
    /// resulting event is not mistaken for the client withdrawing itself.
    fn hide(
        &self,
        client: WinId,
        mapped: &mut HashSet<WinId>,
        pending_unmap: &mut HashMap<WinId, usize>,
    ) -> Result<()> {
        if !mapped.contains(&client) {
            return Ok(());
        }

        self.unmap(client)?;

        mapped.remove(&client);
        pending_unmap
            .entry(client)
            .and_modify(|count| *count += 1)
            .or_insert(1);

        Ok(())
    }

    /// Restack and set the geometry for an ordered list of client windows
    /// and their target positions.
    ///
    /// Each position is shrunk by the border width to give the client
    /// content area, adjusted to the client's size hints and then applied,
    /// so that the final on-screen extent is the hint-rounded content size
    /// plus the border.
    fn position_clients(&self, border: u32, positions: &[(WinId, Rect)]) -> Result<()> {
        self.restack(positions.iter().map(|(id, _)| id))?;

        for &(c, r) in positions.iter() {
            let mut r = r.shrink_in(border);
            if let Some(hints) = self.client_size_hints(c)? {
                trace!(%c, ?hints, "client has size hints, applying");
                r = hints.apply_to(r);
            }

            trace!(%c, ?r, "positioning client");
            self.position_client(c, r)?;
        }

        Ok(())
    }

    /// Restack the given windows, each one above the last.
    fn restack<'a, I>(&self, mut ids: I) -> Result<()>
    where
        I: Iterator<Item = &'a WinId>,
    {
        let mut previous = match ids.next() {
            Some(id) => *id,
            None => return Ok(()), // nothing to stack
        };

        for &id in ids {
            self.stack_above(id, previous)?;
            previous = id;
        }

        Ok(())
    }
}

// Auto impl DisplayConnExt for all DisplayConn impls
impl<T> DisplayConnExt for T where T: DisplayConn {}

// The main logic for inserting a new client into the StackSet without any
// refresh of the display state. In normal operation the `manage` method on
// DisplayConnExt is always used: this is provided independently to support
// adopting existing clients on startup.
pub(crate) fn manage_without_refresh<X: DisplayConn>(
    id: WinId,
    tag: Option<&str>,
    state: &mut State<X>,
    x: &X,
) -> Result<()> {
    match tag {
        Some(tag) => state.client_set.insert_as_focus_for(tag, id),
        None => state.client_set.insert(id),
    }

    x.set_border_width(id, state.config.border_width)?;
    x.set_border_color(id, state.config.normal_border)?;

    let mut hook = state.config.manage_hook.take();
    if let Some(ref mut h) = hook {
        trace!("running user manage hook");
        if let Err(e) = h.call(id, state, x) {
            error!(%e, "error returned from user manage hook");
        }
    }
    state.config.manage_hook = hook;

    Ok(())
}

fn notify_killed<X: DisplayConn>(x: &X, state: &mut State<X>) -> Result<()> {
    for &c in state.diff.killed_clients() {
        x.kill(c)?;
    }

    Ok(())
}

// Focusing a window is taken as the user responding to its request for
// attention.
fn clear_urgency_of_focused<X: DisplayConn>(x: &X, state: &mut State<X>) -> Result<()> {
    if let Some(&focused) = state.client_set.current_client() {
        if let Some(token) = state.urgency.clear_urgent(&focused) {
            x.cancel_timer(token)?;
        }
    }

    Ok(())
}

fn set_window_props<X: DisplayConn>(x: &X, state: &mut State<X>) -> Result<()> {
    for &c in state.diff.new_clients() {
        x.set_border_width(c, state.config.border_width)?;
        x.set_border_color(c, state.config.normal_border)?;
    }

    if let Some(prev) = state.diff.before.focused_client {
        x.set_border_color(prev, state.config.normal_border)?;
    }

    for &c in state.urgency.urgent() {
        x.set_border_color(c, state.config.urgent_border)?;
    }

    if let Some(&focused) = state.client_set.current_client() {
        trace!(%focused, "setting border for focused client");
        x.set_border_color(focused, state.config.focused_border)?;
    }

    Ok(())
}

// Layouts holding resources for a workspace that is no longer on screen get
// the chance to release them.
fn notify_hidden_workspaces<X: DisplayConn>(state: &mut State<X>) {
    let previous_visible_tags = state.diff.previous_visible_tags();

    state
        .client_set
        .hidden_workspaces_mut()
        .filter(|w| previous_visible_tags.contains(&w.tag()))
        .for_each(|ws| ws.broadcast_message(&Message::Hide));
}

fn set_window_visibility<X: DisplayConn>(x: &X, state: &mut State<X>) -> Result<()> {
    let visible: Vec<WinId> = state.diff.visible_clients().copied().collect();
    let hidden: Vec<WinId> = state.diff.hidden_clients().copied().collect();
    let withdrawn: Vec<WinId> = state.diff.withdrawn_clients().copied().collect();

    for c in visible {
        trace!(%c, "revealing client");
        x.reveal(c, &state.client_set, &mut state.mapped)?;
    }

    for c in hidden {
        trace!(%c, "hiding client");
        x.hide(c, &mut state.mapped, &mut state.pending_unmap)?;
    }

    for c in withdrawn {
        trace!(%c, "clearing state for withdrawn client");
        state.mapped.remove(&c);
        state.pending_unmap.remove(&c);
    }

    Ok(())
}

fn set_focus<X: DisplayConn>(x: &X, state: &mut State<X>) -> Result<()> {
    match state.client_set.current_client() {
        Some(&id) => x.focus(id),
        None => x.focus(state.root),
    }
}

// Pointer input is grabbed on unfocused windows only, so that a click on one
// of them can be turned into a focus change while the focused window sees
// its input untouched.
fn update_input_grabs<X: DisplayConn>(x: &X, state: &mut State<X>) -> Result<()> {
    let focused = state.client_set.current_client().copied();

    for &(c, _) in state.diff.after.positions.iter() {
        if Some(c) == focused {
            x.ungrab_input(c)?;
        } else {
            x.grab_input(c)?;
        }
    }

    Ok(())
}
