use crate::{
    core::layout::LayoutStack,
    pop_where,
    pure::{
        diff::{ScreenState, Snapshot},
        geometry::Rect,
        workspace::check_workspace_invariants,
        Position, Screen, Stack, Workspace,
    },
    stack, Error, Result, WinId,
};
use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
    mem::{swap, take},
};

/// The side-effect free state of a window manager: which windows are managed,
/// how they are grouped into workspaces, which workspace each screen shows
/// and which window holds focus.
///
/// Structural invariants maintained by every operation:
///   - each workspace tag appears exactly once across screens and hidden
///     workspaces
///   - a window is a member of at most one workspace
///   - the floating map only references windows that are members of some
///     workspace
#[derive(Default, Debug, Clone)]
pub struct StackSet<C>
where
    C: Clone + PartialEq + Eq + Hash,
{
    pub(crate) screens: Stack<Screen<C>>, // Workspaces visible on screens
    pub(crate) hidden: VecDeque<Workspace<C>>, // Workspaces not currently on any screen
    pub(crate) floating: HashMap<C, Rect>, // Floating windows and their preferred positions
    pub(crate) previous_tag: String,      // The last tag to be focused before the current one
    pub(crate) killed_clients: Vec<C>, // Clients that have been removed and need closing on refresh
}

impl<C> StackSet<C>
where
    C: Clone + PartialEq + Eq + Hash,
{
    /// Create a new [StackSet] of empty workspaces with the given names,
    /// displayed on screens with the given geometry.
    ///
    /// # Errors
    /// This method will error if there are not enough workspaces to cover the
    /// attached screens or if no screens are attached.
    pub fn try_new<I, J, T>(layouts: LayoutStack, ws_tags: I, screen_details: J) -> Result<Self>
    where
        T: Into<String>,
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = Rect>,
    {
        let workspaces: Vec<Workspace<C>> = ws_tags
            .into_iter()
            .enumerate()
            .map(|(i, tag)| Workspace::new(i, tag, layouts.clone(), None))
            .collect();

        let screen_details: Vec<Rect> = screen_details.into_iter().collect();

        Self::try_new_concrete(workspaces, screen_details, HashMap::new())
    }

    pub(crate) fn try_new_concrete(
        mut workspaces: Vec<Workspace<C>>,
        screen_details: Vec<Rect>,
        floating: HashMap<C, Rect>,
    ) -> Result<Self> {
        check_workspace_invariants(&workspaces)?;

        match (workspaces.len(), screen_details.len()) {
            (_, 0) => return Err(Error::NoScreens),
            (n_ws, n_screens) if n_ws < n_screens => {
                return Err(Error::InsufficientWorkspaces { n_ws, n_screens })
            }
            _ => (),
        }

        let hidden: VecDeque<Workspace<C>> = workspaces
            .split_off(screen_details.len())
            .into_iter()
            .collect();

        let screens =
            Stack::from_iter_unchecked(workspaces.into_iter().zip(screen_details).enumerate().map(
                |(index, (workspace, r))| Screen {
                    workspace,
                    index,
                    r,
                },
            ));

        let previous_tag = screens.focus.workspace.tag.clone();

        Ok(Self {
            screens,
            hidden,
            floating,
            previous_tag,
            killed_clients: vec![],
        })
    }

    /// Set focus to the [Screen] with the specified index.
    ///
    /// If there is no matching screen then the [StackSet] is unmodified.
    pub fn focus_screen(&mut self, screen_index: usize) {
        let current = self.screens.focus.index;
        if current == screen_index {
            return;
        }

        loop {
            self.screens.focus_down();
            if [current, screen_index].contains(&self.screens.focus.index) {
                break;
            }
        }
    }

    /// Set focus to the [Workspace] with the specified tag.
    ///
    /// If there is no matching workspace then the [StackSet] is unmodified.
    /// If the workspace is currently visible on another screen then focus
    /// moves to that screen rather than pulling the workspace over, otherwise
    /// the workspace replaces whatever was on the active screen.
    ///
    /// If you always want to focus the given tag on the active screen, see
    /// [StackSet::pull_tag_to_screen] instead.
    pub fn focus_tag(&mut self, tag: impl AsRef<str>) {
        let tag = tag.as_ref();

        if self.screens.focus.workspace.tag == tag {
            return; // already focused
        }

        // If the tag is visible on another screen, focus moves to that screen
        if !self.try_cycle_screen_to_tag(tag) {
            // If the tag is hidden then it gets moved to the current screen
            self.try_swap_on_screen_workspace_with_hidden(tag);
        }

        // If nothing matched by this point then the requested tag is unknown
        // so there is nothing for us to do
    }

    fn try_cycle_screen_to_tag(&mut self, tag: &str) -> bool {
        let current_tag = self.screens.focus.workspace.tag.clone();

        loop {
            self.screens.focus_down();
            match &self.screens.focus.workspace.tag {
                // we've found and focused the tag
                t if t == tag => {
                    self.previous_tag = current_tag;
                    return true;
                }

                // we've looped so this tag isn't visible
                t if t == &current_tag => return false,

                // try the next tag
                _ => (),
            }
        }
    }

    fn try_swap_on_screen_workspace_with_hidden(&mut self, tag: &str) {
        if let Some(mut w) = pop_where!(self, hidden, |w: &Workspace<C>| w.tag == tag) {
            self.previous_tag = self.screens.focus.workspace.tag.clone();
            swap(&mut w, &mut self.screens.focus.workspace);
            self.hidden.push_back(w);
        }
    }

    // true if we swapped otherwise false
    fn try_swap_focused_workspace_with_tag(&mut self, tag: &str) -> bool {
        if self.screens.focus.workspace.tag == tag {
            return false;
        }

        let p = |s: &&mut Screen<C>| s.workspace.tag == tag;

        let in_up = self.screens.up.iter_mut().find(p);
        let in_down = self.screens.down.iter_mut().find(p);

        if let Some(s) = in_up.or(in_down) {
            swap(&mut self.screens.focus.workspace, &mut s.workspace);
            return true;
        }

        false
    }

    /// Focus the requested tag on the active screen, swapping the current
    /// workspace with it even when the tag is already visible elsewhere.
    ///
    /// This is the plain view variant of [StackSet::focus_tag].
    pub fn pull_tag_to_screen(&mut self, tag: impl AsRef<str>) {
        let tag = tag.as_ref();

        if self.screens.focus.workspace.tag == tag {
            return;
        }

        if !self.try_swap_focused_workspace_with_tag(tag) {
            self.try_swap_on_screen_workspace_with_hidden(tag);
        }
    }

    /// Toggle focus back to the previously focused [Workspace] based on its
    /// tag.
    pub fn toggle_tag(&mut self) {
        self.focus_tag(self.previous_tag.clone());
    }

    /// Focus the given client and set its [Workspace] as current (see
    /// [StackSet::focus_tag]).
    ///
    /// If the client is unknown then this is a no-op.
    pub fn focus_client(&mut self, client: &C) {
        if self.current_client() == Some(client) {
            return; // already focused
        }

        let tag = match self.tag_for_client(client) {
            Some(tag) => tag.to_string(),
            None => return, // unknown client
        };

        self.focus_tag(&tag);

        while self.current_client() != Some(client) {
            self.focus_up()
        }
    }

    /// Insert the given client into the current [Stack] in the default
    /// [Position].
    pub fn insert(&mut self, client: C) {
        self.insert_at(Position::default(), client)
    }

    /// Insert the given client into the current [Stack] at the requested
    /// [Position]. If the client is already present anywhere in the
    /// [StackSet] this is a no-op.
    pub fn insert_at(&mut self, pos: Position, client: C) {
        if self.contains(&client) {
            return;
        }

        self.modify(|current_stack| match current_stack {
            Some(mut s) => {
                s.insert_at(pos, client);
                Some(s)
            }
            None => Some(stack!(client)),
        })
    }

    /// Clear the floating status of a client, returning its previous
    /// preferred screen position if the client was floating.
    pub fn sink(&mut self, client: &C) -> Option<Rect> {
        self.floating.remove(client)
    }

    /// Check whether a given tag currently has any floating windows present.
    ///
    /// Returns false if the tag given is unknown to this StackSet.
    pub fn has_floating_windows(&self, tag: impl AsRef<str>) -> bool {
        self.workspace(tag.as_ref())
            .map(|w| w.clients().any(|id| self.floating.contains_key(id)))
            .unwrap_or(false)
    }

    /// Delete a client from this [StackSet].
    ///
    /// The client is removed from whichever workspace holds it and from the
    /// floating map. If it held focus, focus passes to the next client in
    /// the same stack.
    pub fn remove_client(&mut self, client: &C) -> Option<C> {
        self.sink(client); // Clear any floating information we might have

        self.workspaces_mut()
            .map(|w| w.remove(client))
            .find(|opt| opt.is_some())
            .flatten()
    }

    /// Remove the currently focused client from this [StackSet] if there is
    /// one, returning it to the caller.
    pub fn remove_focused(&mut self) -> Option<C> {
        let client = self.current_client()?.clone();
        self.remove_client(&client)
    }

    /// Delete the currently focused client from this stack if there is one.
    ///
    /// The resulting refresh will ask the display server to close this
    /// client.
    pub fn kill_focused(&mut self) {
        if let Some(client) = self.remove_focused() {
            self.killed_clients.push(client);
        }
    }

    /// Move the focused client of the current [Workspace] to the focused
    /// position of the workspace matching the provided `tag`.
    ///
    /// The moved client becomes the focus of the target workspace but the
    /// target does not become the current workspace. Focus on the source
    /// workspace passes to the next client in its stack.
    pub fn move_focused_to_tag(&mut self, tag: impl AsRef<str>) {
        let tag = tag.as_ref();
        if self.current_tag() == tag || !self.contains_tag(tag) {
            return;
        }

        let c = match self.screens.focus.workspace.remove_focused() {
            None => return,
            Some(c) => c,
        };

        self.insert_as_focus_for(tag, c)
    }

    /// Move the given client to the focused position of the [Workspace]
    /// matching the provided `tag`. If the client is already on the target
    /// workspace it is moved to the focused position.
    pub fn move_client_to_tag(&mut self, client: &C, tag: impl AsRef<str>) {
        let tag = tag.as_ref();

        if !self.contains_tag(tag) {
            return;
        }

        // Not calling self.remove_client as that will also sink the client if
        // it was floating
        let maybe_removed = self
            .workspaces_mut()
            .map(|w| w.remove(client))
            .find(|opt| opt.is_some())
            .flatten();

        let c = match maybe_removed {
            None => return,
            Some(c) => c,
        };

        self.insert_as_focus_for(tag, c)
    }

    /// Move the given client to the focused position of the current
    /// [Workspace]. If the client is already on the current workspace it is
    /// moved to the focused position.
    pub fn move_client_to_current_tag(&mut self, client: &C) {
        self.move_client_to_tag(client, self.screens.focus.workspace.tag.clone());
    }

    // Insert a client as the current focus for the given tag.
    //
    // NOTE: This will silently fail if the tag is not in the StackSet which
    //       is why the method is not in the public API
    pub(crate) fn insert_as_focus_for(&mut self, tag: &str, c: C) {
        self.modify_workspace(tag, |w| {
            w.stack = Some(match take(&mut w.stack) {
                None => stack!(c),
                Some(mut s) => {
                    s.insert_at(Position::Focus, c);
                    s
                }
            });
        });
    }

    /// Is the given tag present in the [StackSet]?
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.workspaces().any(|w| w.tag == tag)
    }

    /// All [Workspace] tags in this [StackSet] ordered by their id.
    pub fn ordered_tags(&self) -> Vec<String> {
        let mut indexed: Vec<_> = self.workspaces().map(|w| (w.id, w.tag.clone())).collect();

        indexed.sort_by_key(|(id, _)| *id);

        indexed.into_iter().map(|(_, tag)| tag).collect()
    }

    /// All Workspaces in this [StackSet] ordered by their id.
    pub fn ordered_workspaces(&self) -> impl Iterator<Item = &Workspace<C>> {
        let mut wss: Vec<_> = self.workspaces().collect();

        wss.sort_by_key(|w| w.id());

        wss.into_iter()
    }

    /// Find the tag of the [Workspace] currently displayed on [Screen]
    /// `index`.
    ///
    /// Returns [None] if the index is out of bounds
    pub fn tag_for_screen(&self, index: usize) -> Option<&str> {
        self.screens()
            .find(|s| s.index == index)
            .map(|s| s.workspace.tag.as_str())
    }

    /// Find the tag of the [Workspace] containing a given client.
    /// Returns Some(tag) if the client is known otherwise None.
    pub fn tag_for_client(&self, client: &C) -> Option<&str> {
        self.workspaces()
            .find(|w| w.contains(client))
            .map(|w| w.tag.as_str())
    }

    /// If the given client is currently visible on a screen return a
    /// reference to that screen, otherwise None.
    pub fn screen_for_client(&self, client: &C) -> Option<&Screen<C>> {
        self.screens.iter().find(|s| s.workspace.contains(client))
    }

    /// Returns `true` if the [StackSet] manages the given client.
    pub fn contains(&self, client: &C) -> bool {
        self.clients().any(|c| c == client)
    }

    /// Extract a reference to the focused element of the current [Stack]
    pub fn current_client(&self) -> Option<&C> {
        self.screens
            .focus
            .workspace
            .stack
            .as_ref()
            .map(|s| &s.focus)
    }

    /// An immutable reference to the currently focused [Screen]
    pub fn current_screen(&self) -> &Screen<C> {
        &self.screens.focus
    }

    /// An immutable reference to the current [Workspace]
    pub fn current_workspace(&self) -> &Workspace<C> {
        &self.screens.focus.workspace
    }

    /// A mutable reference to the current [Workspace]
    pub fn current_workspace_mut(&mut self) -> &mut Workspace<C> {
        &mut self.screens.focus.workspace
    }

    /// An immutable reference to the current [Stack] if there is one
    pub fn current_stack(&self) -> Option<&Stack<C>> {
        self.screens.focus.workspace.stack.as_ref()
    }

    /// The `tag` of the current [Workspace]
    pub fn current_tag(&self) -> &str {
        &self.screens.focus.workspace.tag
    }

    /// Add a new hidden [Workspace] to this [StackSet].
    ///
    /// The id assigned to this workspace will be max(workspace ids) + 1.
    ///
    /// # Errors
    /// This function will error with `NonUniqueTags` if the given tag is
    /// already present.
    pub fn add_workspace<T>(&mut self, tag: T, layouts: LayoutStack) -> Result<()>
    where
        T: Into<String>,
    {
        let tag = tag.into();
        if self.contains_tag(&tag) {
            return Err(Error::NonUniqueTags { tags: vec![tag] });
        }

        let id = self
            .workspaces()
            .map(|w| w.id)
            .max()
            .expect("at least one workspace")
            + 1;
        let ws = Workspace::new(id, tag, layouts, None);
        self.hidden.push_front(ws);

        Ok(())
    }

    /// A reference to the [Workspace] with a tag of `tag` if there is one
    pub fn workspace(&self, tag: &str) -> Option<&Workspace<C>> {
        self.workspaces().find(|w| w.tag == tag)
    }

    /// A mutable reference to the [Workspace] with a tag of `tag` if there
    /// is one
    pub fn workspace_mut(&mut self, tag: &str) -> Option<&mut Workspace<C>> {
        self.workspaces_mut().find(|w| w.tag == tag)
    }

    /// Switch to the next available layout on the focused [Workspace]
    pub fn next_layout(&mut self) {
        self.screens.focus.workspace.next_layout()
    }

    /// Switch to the previous available layout on the focused [Workspace]
    pub fn previous_layout(&mut self) {
        self.screens.focus.workspace.previous_layout()
    }

    /// Switch the focused [Workspace] directly to the layout with the given
    /// name, if it is known.
    pub fn set_layout_by_name(&mut self, name: impl AsRef<str>) {
        self.screens.focus.workspace.set_layout_by_name(name)
    }

    /// Move focus to the next [Screen]
    pub fn next_screen(&mut self) {
        if self.screens.len() == 1 {
            return;
        }

        self.previous_tag = self.screens.focus.workspace.tag.clone();
        self.screens.focus_down();
    }

    /// Move focus to the previous [Screen]
    pub fn previous_screen(&mut self) {
        if self.screens.len() == 1 {
            return;
        }

        self.previous_tag = self.screens.focus.workspace.tag.clone();
        self.screens.focus_up();
    }

    /// Drag the focused workspace onto the next [Screen], holding focus
    pub fn drag_workspace_forward(&mut self) {
        if self.screens.len() == 1 {
            return;
        }

        // We stash the previous tag so that we can restore it after we've
        // cycled the screens and pulled over the tag we were on before.
        let true_previous_tag = self.previous_tag.clone();
        self.next_screen();
        self.try_swap_focused_workspace_with_tag(&self.previous_tag.clone());
        self.previous_tag = true_previous_tag;
    }

    /// Drag the focused workspace onto the previous [Screen], holding focus
    pub fn drag_workspace_backward(&mut self) {
        if self.screens.len() == 1 {
            return;
        }

        // We stash the previous tag so that we can restore it after we've
        // cycled the screens and pulled over the tag we were on before.
        let true_previous_tag = self.previous_tag.clone();
        self.previous_screen();
        self.try_swap_focused_workspace_with_tag(&self.previous_tag.clone());
        self.previous_tag = true_previous_tag;
    }

    /// If the current [Stack] is [None], return `default` otherwise
    /// apply the function to it to generate a value
    pub fn with<T, F>(&self, default: T, f: F) -> T
    where
        F: Fn(&Stack<C>) -> T,
    {
        self.current_stack().map(f).unwrap_or(default)
    }

    /// Apply a function to modify the current [Stack] if there is one
    /// or compute and inject a default value if it is currently [None]
    pub fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(Option<Stack<C>>) -> Option<Stack<C>>,
    {
        self.screens.focus.workspace.stack = f(take(&mut self.screens.focus.workspace.stack));
    }

    /// Apply a function to modify the current [Stack] if it is non-empty
    /// without allowing for emptying it entirely.
    pub fn modify_occupied<F>(&mut self, f: F)
    where
        F: FnOnce(Stack<C>) -> Stack<C>,
    {
        self.modify(|s| s.map(f))
    }

    fn modify_workspace<F>(&mut self, tag: &str, f: F)
    where
        F: FnOnce(&mut Workspace<C>),
    {
        self.workspaces_mut().find(|w| w.tag == tag).map(f);
    }

    /// Iterate over each [Screen] in this [StackSet] in an arbitrary order.
    pub fn screens(&self) -> impl Iterator<Item = &Screen<C>> {
        self.screens.iter()
    }

    /// Mutably iterate over each [Screen] in this [StackSet] in an arbitrary
    /// order.
    pub fn screens_mut(&mut self) -> impl Iterator<Item = &mut Screen<C>> {
        self.screens.iter_mut()
    }

    /// Iterate over each [Workspace] in this [StackSet] in an arbitrary
    /// order.
    pub fn workspaces(&self) -> impl Iterator<Item = &Workspace<C>> {
        self.screens
            .iter()
            .map(|s| &s.workspace)
            .chain(self.hidden.iter())
    }

    /// Mutably iterate over each [Workspace] in this [StackSet] in an
    /// arbitrary order.
    pub fn workspaces_mut(&mut self) -> impl Iterator<Item = &mut Workspace<C>> {
        self.screens
            .iter_mut()
            .map(|s| &mut s.workspace)
            .chain(self.hidden.iter_mut())
    }

    /// Iterate over the [Workspace] currently displayed on a screen in an
    /// arbitrary order.
    pub fn on_screen_workspaces(&self) -> impl Iterator<Item = &Workspace<C>> {
        self.screens.iter().map(|s| &s.workspace)
    }

    /// Iterate over the currently hidden [Workspace] in this [StackSet] in
    /// an arbitrary order.
    pub fn hidden_workspaces(&self) -> impl Iterator<Item = &Workspace<C>> {
        self.hidden.iter()
    }

    /// Mutably iterate over the currently hidden [Workspace] in this
    /// [StackSet] in an arbitrary order.
    pub fn hidden_workspaces_mut(&mut self) -> impl Iterator<Item = &mut Workspace<C>> {
        self.hidden.iter_mut()
    }

    /// Iterate over each client in this [StackSet] in an arbitrary order.
    pub fn clients(&self) -> impl Iterator<Item = &C> {
        self.workspaces().flat_map(|w| w.clients())
    }

    /// Iterate over clients present in on-screen Workspaces.
    ///
    /// *NOTE*: this does _not_ mean that every client returned by this
    /// iterator is visible on the screen: only that it is currently assigned
    /// to a workspace that is displayed on a screen.
    pub fn on_screen_workspace_clients(&self) -> impl Iterator<Item = &C> {
        self.on_screen_workspaces().flat_map(|w| w.clients())
    }

    /// Iterate over clients from workspaces not currently mapped to a screen.
    pub fn hidden_workspace_clients(&self) -> impl Iterator<Item = &C> {
        self.hidden_workspaces().flat_map(|w| w.clients())
    }

    /// Serialise the active layout selection of each workspace as text, one
    /// `tag<TAB>layout-name` line per workspace in id order.
    ///
    /// The output round-trips through
    /// [restore_layout_snapshot][StackSet::restore_layout_snapshot], allowing
    /// a restarting window manager to resume the layouts that were active in
    /// the previous process.
    pub fn layout_snapshot(&self) -> String {
        self.ordered_workspaces()
            .map(|w| format!("{}\t{}\n", w.tag, w.layout_name()))
            .collect()
    }

    /// Re-select workspace layouts from a snapshot produced by
    /// [layout_snapshot][StackSet::layout_snapshot].
    ///
    /// Lines that name an unknown workspace or a layout that no longer
    /// exists are skipped, leaving that workspace on its configured default.
    pub fn restore_layout_snapshot(&mut self, snapshot: &str) {
        for line in snapshot.lines() {
            if let Some((tag, layout_name)) = line.split_once('\t') {
                self.modify_workspace(tag, |w| w.set_layout_by_name(layout_name));
            }
        }
    }
}

impl StackSet<WinId> {
    /// Record a known client as floating, giving its preferred screen
    /// position.
    ///
    /// The stored [Rect] is an owned copy: it is applied as given on every
    /// refresh until the client is [sunk][StackSet::sink] or removed.
    ///
    /// # Errors
    /// This method will return [Error::UnknownClient] if the given client is
    /// not already managed in this [StackSet].
    pub fn float(&mut self, client: WinId, r: Rect) -> Result<()> {
        if !self.contains(&client) {
            return Err(Error::UnknownClient(client));
        }

        self.floating.insert(client, r);

        Ok(())
    }

    /// Compute screen positions for all visible clients.
    ///
    /// Each workspace is laid out against the geometry of the screen that is
    /// displaying it, which is not necessarily the focused screen. Floating
    /// clients are excluded from tiling and stacked above the tiled clients
    /// of their screen using their stored positions.
    pub(crate) fn visible_client_positions(&mut self) -> Vec<(WinId, Rect)> {
        let mut positions = Vec::new();
        let floating = &self.floating;

        for s in self.screens.iter_mut() {
            let r = s.r;
            let tag = s.workspace.tag.clone();
            let tiled = s
                .workspace
                .stack
                .as_ref()
                .and_then(|st| st.from_filtered(|c| !floating.contains_key(c)));

            let (_, mut tiled_positions) =
                crate::core::layout::Layout::layout_workspace(&mut s.workspace.layouts, &tag, &tiled, r);
            positions.append(&mut tiled_positions);

            if let Some(st) = s.workspace.stack.as_ref() {
                for c in st.iter() {
                    if let Some(&fr) = floating.get(c) {
                        positions.push((*c, fr));
                    }
                }
            }
        }

        positions
    }

    pub(crate) fn position_and_snapshot(&mut self) -> Snapshot<WinId> {
        let positions = self.visible_client_positions();
        self.snapshot(positions)
    }
}

impl<C> StackSet<C>
where
    C: Copy + Clone + PartialEq + Eq + Hash,
{
    pub(crate) fn snapshot(&mut self, positions: Vec<(C, Rect)>) -> Snapshot<C> {
        let visible = self
            .screens
            .iter()
            .filter(|s| s.index != self.screens.focus.index)
            .map(ScreenState::from)
            .collect();

        Snapshot {
            focused_client: self.current_client().copied(),
            focused: ScreenState::from(&self.screens.focus),
            visible,
            positions,
            hidden_clients: self.hidden_workspace_clients().copied().collect(),
            killed_clients: take(&mut self.killed_clients),
        }
    }
}

macro_rules! defer_to_current_stack {
    ($(
        $(#[$doc_str:meta])*
        $method:ident
    ),+) => {
        impl<C> StackSet<C>
        where
            C: Clone + PartialEq + Eq + Hash
        {
            $(
                $(#[$doc_str])*
                pub fn $method(&mut self) {
                    if let Some(ref mut stack) = self.screens.focus.workspace.stack {
                        stack.$method();
                    }
                }
            )+
        }
    }
}

defer_to_current_stack!(
    /// Move focus from the current element up the [Stack], wrapping to
    /// the bottom if focus is already at the top.
    /// This is a no-op if the current stack is empty.
    focus_up,
    /// Move focus from the current element down the [Stack], wrapping to
    /// the top if focus is already at the bottom.
    /// This is a no-op if the current stack is empty.
    focus_down,
    /// Swap the position of the focused element with one above it.
    /// The currently focused element is maintained by this operation.
    /// This is a no-op if the current stack is empty.
    swap_up,
    /// Swap the position of the focused element with one below it.
    /// The currently focused element is maintained by this operation.
    /// This is a no-op if the current stack is empty.
    swap_down,
    /// Rotate all elements of the stack forward, wrapping from top to bottom.
    /// The currently focused position in the stack is maintained by this
    /// operation.
    /// This is a no-op if the current stack is empty.
    rotate_up,
    /// Rotate all elements of the stack back, wrapping from bottom to top.
    /// The currently focused position in the stack is maintained by this
    /// operation.
    /// This is a no-op if the current stack is empty.
    rotate_down,
    /// Rotate the Stack until the current focused element is in the head
    /// position.
    /// This is a no-op if the current stack is empty.
    rotate_focus_to_head,
    /// Move focus to the element in the head position.
    /// This is a no-op if the current stack is empty.
    focus_head,
    /// Swap the current head element with the focused element in the
    /// stack order. Focus stays with the original focused element.
    /// This is a no-op if the current stack is empty.
    swap_focus_and_head
);
