//! A diff of changes to the pure window manager state.
//!
//! The refresh pipeline is driven entirely by comparing a snapshot of the
//! [StackSet][crate::pure::StackSet] taken before a mutating operation with
//! one taken after it: newly visible clients are revealed, newly invisible
//! ones are hidden and focus or position changes are applied.
use crate::pure::{geometry::Rect, screen::Screen};
use std::{collections::HashSet, hash::Hash, iter::once, mem::swap};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ScreenState<C>
where
    C: Copy + Clone + PartialEq + Eq + Hash,
{
    pub screen: usize,
    pub tag: String,
    pub clients: Vec<C>,
}

impl<C> From<&Screen<C>> for ScreenState<C>
where
    C: Copy + Clone + PartialEq + Eq + Hash,
{
    fn from(s: &Screen<C>) -> Self {
        Self {
            screen: s.index,
            tag: s.workspace.tag.clone(),
            clients: s.workspace.clients().copied().collect(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot<C>
where
    C: Copy + Clone + PartialEq + Eq + Hash,
{
    pub focused_client: Option<C>,
    pub focused: ScreenState<C>,
    pub visible: Vec<ScreenState<C>>,
    pub positions: Vec<(C, Rect)>,
    pub hidden_clients: Vec<C>,
    pub killed_clients: Vec<C>,
}

impl<C> Snapshot<C>
where
    C: Copy + Clone + PartialEq + Eq + Hash,
{
    pub(crate) fn visible_clients(&self) -> impl Iterator<Item = &C> {
        self.positions.iter().map(|(c, _)| c)
    }

    pub(crate) fn all_clients(&self) -> impl Iterator<Item = &C> {
        self.focused
            .clients
            .iter()
            .chain(self.visible.iter().flat_map(|s| s.clients.iter()))
            .chain(self.hidden_clients.iter())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Diff<C>
where
    C: Copy + Clone + PartialEq + Eq + Hash,
{
    pub before: Snapshot<C>,
    pub after: Snapshot<C>,
}

impl<C> Diff<C>
where
    C: Copy + Clone + PartialEq + Eq + Hash,
{
    pub fn update(&mut self, after: Snapshot<C>) {
        swap(&mut self.before, &mut self.after);
        self.after = after;
    }

    pub fn focused_client(&self) -> Option<&C> {
        self.after.focused_client.as_ref()
    }

    pub fn focused_client_changed(&self) -> bool {
        self.before.focused_client != self.after.focused_client
    }

    pub fn newly_focused_screen(&self) -> Option<usize> {
        if self.before.focused.screen != self.after.focused.screen {
            Some(self.after.focused.screen)
        } else {
            None
        }
    }

    pub fn killed_clients(&self) -> impl Iterator<Item = &C> {
        self.after.killed_clients.iter()
    }

    pub fn new_clients(&self) -> impl Iterator<Item = &C> {
        let before: HashSet<_> = self.before.all_clients().collect();

        self.after
            .all_clients()
            .filter(move |c| !before.contains(c))
    }

    pub fn hidden_clients(&self) -> impl Iterator<Item = &C> {
        let after: HashSet<_> = self.after.visible_clients().collect();

        self.before
            .visible_clients()
            .filter(move |c| !after.contains(c))
    }

    pub fn visible_clients(&self) -> impl Iterator<Item = &C> {
        self.after.visible_clients()
    }

    pub fn withdrawn_clients(&self) -> impl Iterator<Item = &C> {
        let after: HashSet<_> = self.after.all_clients().collect();

        self.before
            .all_clients()
            .filter(move |c| !after.contains(c))
    }

    pub fn previous_visible_tags(&self) -> HashSet<&str> {
        once(self.before.focused.tag.as_ref())
            .chain(self.before.visible.iter().map(|s| s.tag.as_ref()))
            .collect()
    }

    #[cfg(test)]
    pub fn new(before: Snapshot<C>, after: Snapshot<C>) -> Self {
        Self { before, after }
    }

    #[cfg(test)]
    pub fn current_visible_tags(&self) -> HashSet<&str> {
        once(self.after.focused.tag.as_ref())
            .chain(self.after.visible.iter().map(|s| s.tag.as_ref()))
            .collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        !(self.focused_client_changed()
            || self.newly_focused_screen().is_some()
            || self.new_clients().count() > 0
            || self.withdrawn_clients().count() > 0
            || self.previous_visible_tags() != self.current_visible_tags()
            || self.before.positions != self.after.positions)
    }
}
