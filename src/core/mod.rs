//! Core data structures and logic for running the window manager.
use crate::{
    core::{
        hooks::{ManageHook, StateHook, UrgencyEvent, UrgencyHook},
        layout::{LayoutStack, Message},
        urgency::{TimerToken, UrgencyState},
    },
    display::{manage_without_refresh, DisplayConn, DisplayConnExt, DisplayEvent},
    pure::{Diff, StackSet},
    Color, Result, WinId,
};
use anymap::AnyMap;
use std::{
    collections::{HashMap, HashSet},
    fmt,
    mem::take,
};
use tracing::{error, trace};

pub mod hooks;
pub mod layout;
pub mod urgency;

/// The pure client state of the window manager.
pub type ClientSet = StackSet<WinId>;

/// User facing configuration: workspaces, layouts, borders and hooks.
pub struct Config<X>
where
    X: DisplayConn,
{
    /// The workspace tags to create at startup
    pub tags: Vec<String>,
    /// The layout alternatives given to each workspace
    pub default_layouts: LayoutStack,
    /// Border color for unfocused windows
    pub normal_border: Color,
    /// Border color for the focused window
    pub focused_border: Color,
    /// Border color for windows requesting attention
    pub urgent_border: Color,
    /// Window border width in pixels
    pub border_width: u32,
    /// An optional hook to run when a new client is accepted for management
    pub manage_hook: Option<Box<dyn ManageHook<X>>>,
    /// An optional hook to run at the end of every refresh
    pub refresh_hook: Option<Box<dyn StateHook<X>>>,
    /// Hooks to run when a window requests attention or a reminder fires
    pub urgency_hooks: Vec<Box<dyn UrgencyHook<X>>>,
}

impl<X: DisplayConn> fmt::Debug for Config<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("tags", &self.tags)
            .field("normal_border", &self.normal_border)
            .field("focused_border", &self.focused_border)
            .field("urgent_border", &self.urgent_border)
            .field("border_width", &self.border_width)
            .finish()
    }
}

impl<X: DisplayConn> Default for Config<X> {
    fn default() -> Self {
        Self {
            tags: (1..=9).map(|n| n.to_string()).collect(),
            default_layouts: LayoutStack::default(),
            normal_border: Color::new_from_hex(0x3c3836ff),
            focused_border: Color::new_from_hex(0xcc241dff),
            urgent_border: Color::new_from_hex(0xfb4934ff),
            border_width: 2,
            manage_hook: None,
            refresh_hook: None,
            urgency_hooks: vec![],
        }
    }
}

/// Mutable internal state of the running window manager.
///
/// This is an explicit context value threaded through the event loop and
/// the hooks: all bookkeeping that outlives a single event lives here,
/// including the urgency registry. There is no global state.
pub struct State<X>
where
    X: DisplayConn,
{
    /// The pure window manager state
    pub client_set: ClientSet,
    /// The user provided configuration
    pub config: Config<X>,
    /// The set of windows that have requested attention
    pub urgency: UrgencyState,
    /// The event currently being processed, if any
    pub current_event: Option<DisplayEvent>,
    pub(crate) extensions: AnyMap,
    pub(crate) root: WinId,
    pub(crate) mapped: HashSet<WinId>,
    pub(crate) pending_unmap: HashMap<WinId, usize>,
    pub(crate) diff: Diff<WinId>,
}

impl<X: DisplayConn> fmt::Debug for State<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("client_set", &self.client_set)
            .field("root", &self.root)
            .field("mapped", &self.mapped)
            .field("pending_unmap", &self.pending_unmap)
            .field("current_event", &self.current_event)
            .finish()
    }
}

impl<X: DisplayConn> State<X> {
    /// The id of the root window of the display.
    pub fn root(&self) -> WinId {
        self.root
    }

    /// Store an arbitrary typed value in this state for later retrieval,
    /// replacing any previous value of the same type.
    pub fn add_extension<T: 'static>(&mut self, extension: T) {
        self.extensions.insert(extension);
    }

    /// A reference to a previously stored extension value.
    pub fn extension<T: 'static>(&self) -> Option<&T> {
        self.extensions.get()
    }

    /// A mutable reference to a previously stored extension value.
    pub fn extension_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.extensions.get_mut()
    }

    /// Remove and return a previously stored extension value.
    pub fn remove_extension<T: 'static>(&mut self) -> Option<T> {
        self.extensions.remove()
    }
}

/// The top level window manager: the event loop around a [State] and its
/// [DisplayConn].
///
/// Events are pulled and handled strictly one at a time: each event maps to
/// at most one mutation of the pure state followed by a refresh, and the
/// refresh's display calls are issued before the next event is pulled.
/// The core performs no internal parallelism.
pub struct WindowManager<X>
where
    X: DisplayConn,
{
    /// The mutable state of the window manager
    pub state: State<X>,
    x: X,
}

impl<X: DisplayConn> fmt::Debug for WindowManager<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowManager")
            .field("state", &self.state)
            .finish()
    }
}

impl<X: DisplayConn> WindowManager<X> {
    /// Construct a new [WindowManager] with the given configuration and
    /// display connection.
    ///
    /// # Errors
    /// Errors if the connection reports no screens or if there are not
    /// enough configured tags to cover the connected screens.
    pub fn new(config: Config<X>, x: X) -> Result<Self> {
        let root = x.root();
        let screen_details = x.screen_details()?;
        let client_set = StackSet::try_new(
            config.default_layouts.clone(),
            config.tags.clone(),
            screen_details,
        )?;

        Ok(Self {
            state: State {
                client_set,
                config,
                urgency: UrgencyState::default(),
                current_event: None,
                extensions: AnyMap::new(),
                root,
                mapped: HashSet::new(),
                pending_unmap: HashMap::new(),
                diff: Diff::default(),
            },
            x,
        })
    }

    /// A reference to the underlying display connection.
    pub fn connection(&self) -> &X {
        &self.x
    }

    /// Apply a pure mutation to the [ClientSet] and refresh the display.
    pub fn modify_and_refresh<F>(&mut self, f: F) -> Result<()>
    where
        F: FnMut(&mut ClientSet),
    {
        self.x.modify_and_refresh(&mut self.state, f)
    }

    /// Send a [Message] to the active layout of the current workspace and
    /// refresh the display.
    pub fn send_layout_message(&mut self, m: Message) -> Result<()> {
        self.x.modify_and_refresh(&mut self.state, |cs| {
            cs.current_workspace_mut().handle_message(&m)
        })
    }

    /// Adopt any pre-existing clients and then run the event loop until a
    /// [DisplayEvent::Shutdown] is received.
    pub fn run(&mut self) -> Result<()> {
        trace!("adopting existing clients");
        for id in self.x.existing_clients()? {
            if !self.state.client_set.contains(&id) {
                manage_without_refresh(id, None, &mut self.state, &self.x)?;
            }
        }
        self.x.refresh(&mut self.state)?;

        loop {
            let event = self.x.next_event()?;
            trace!(?event, "got event from display connection");

            self.state.current_event = Some(event);
            let running = self.handle_event(event)?;
            self.x.flush();
            self.state.current_event = None;

            if !running {
                trace!("shutdown requested, leaving the event loop");
                return Ok(());
            }
        }
    }

    /// Handle a single [DisplayEvent], returning `false` once the window
    /// manager should shut down.
    ///
    /// This is public to allow the event loop to be driven by external
    /// runtimes and tests.
    pub fn handle_event(&mut self, event: DisplayEvent) -> Result<bool> {
        use DisplayEvent::*;

        match event {
            MapRequest(id) => {
                if !self.state.client_set.contains(&id) {
                    self.x.manage(id, &mut self.state)?;
                }
            }

            Destroy(id) => {
                self.x.unmanage(id, &mut self.state)?;
                if let Some(token) = self.state.urgency.clear_urgent(&id) {
                    self.x.cancel_timer(token)?;
                }
            }

            // Unmaps we requested ourselves (hiding a client) are tracked in
            // pending_unmap; any other unmap is the client withdrawing.
            Unmap(id) => match self.state.pending_unmap.get(&id).copied() {
                None | Some(0) => self.x.unmanage(id, &mut self.state)?,
                Some(1) => {
                    self.state.pending_unmap.remove(&id);
                }
                Some(n) => {
                    self.state.pending_unmap.insert(id, n - 1);
                }
            },

            Enter(id) => {
                if self.state.client_set.contains(&id) {
                    self.x.set_active_client(id, &mut self.state)?;
                }
            }

            PropertyHints(id) => self.handle_urgency_hint(id)?,

            Timer(token) => self.handle_timer(token)?,

            Shutdown => {
                // every layout gets the chance to release its resources
                for ws in self.state.client_set.workspaces_mut() {
                    ws.broadcast_message(&Message::ShutDown);
                }

                return Ok(false);
            }
        }

        Ok(true)
    }

    fn handle_urgency_hint(&mut self, id: WinId) -> Result<()> {
        if !self.state.client_set.contains(&id) {
            return Ok(());
        }

        let urgent = self.x.client_urgency_hint(id)?;
        let focused = self.state.client_set.current_client() == Some(&id);

        if urgent && !focused {
            if let Some(token) = self.state.urgency.set_urgent(id) {
                trace!(%id, "client is newly urgent");
                self.x.arm_timer(token)?;
                self.run_urgency_hooks(UrgencyEvent::Urgent(id))?;
            }
        } else if !urgent {
            if let Some(token) = self.state.urgency.clear_urgent(&id) {
                self.x.cancel_timer(token)?;
            }
        }

        self.x.refresh(&mut self.state)
    }

    fn handle_timer(&mut self, token: TimerToken) -> Result<()> {
        match self.state.urgency.fire(token) {
            Some(id) => {
                self.x.arm_timer(token)?; // reminders repeat until cleared
                self.run_urgency_hooks(UrgencyEvent::Reminder(id))
            }

            // the reminder was cancelled while this event was in flight
            None => Ok(()),
        }
    }

    fn run_urgency_hooks(&mut self, event: UrgencyEvent) -> Result<()> {
        let mut hooks = take(&mut self.state.config.urgency_hooks);
        for h in hooks.iter_mut() {
            if let Err(e) = h.call(event, &mut self.state, &self.x) {
                error!(%e, "error returned from user urgency hook");
            }
        }
        self.state.config.urgency_hooks = hooks;

        Ok(())
    }
}
