//! Test oriented [DisplayConn] implementations.
//!
//! These are used by the crate's own test suite and are public so that
//! downstream crates can test their hooks and layouts against a scripted
//! display connection without a running display server.
use crate::{
    core::urgency::TimerToken,
    display::{DisplayConn, DisplayEvent, SizeHints},
    pure::geometry::Rect,
    Color, Result, WinId,
};
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

/// A [DisplayConn] whose methods all succeed without doing anything.
///
/// The stub reports a single 1920x1080 screen and immediately requests
/// shutdown when asked for an event.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubConn;

impl DisplayConn for StubConn {
    fn root(&self) -> WinId {
        WinId(0)
    }

    fn screen_details(&self) -> Result<Vec<Rect>> {
        Ok(vec![Rect::new(0, 0, 1920, 1080)])
    }

    fn next_event(&self) -> Result<DisplayEvent> {
        Ok(DisplayEvent::Shutdown)
    }

    fn flush(&self) {}

    fn existing_clients(&self) -> Result<Vec<WinId>> {
        Ok(vec![])
    }

    fn client_geometry(&self, _: WinId) -> Result<Rect> {
        Ok(Rect::default())
    }

    fn client_size_hints(&self, _: WinId) -> Result<Option<SizeHints>> {
        Ok(None)
    }

    fn client_urgency_hint(&self, _: WinId) -> Result<bool> {
        Ok(false)
    }

    fn map(&self, _: WinId) -> Result<()> {
        Ok(())
    }

    fn unmap(&self, _: WinId) -> Result<()> {
        Ok(())
    }

    fn kill(&self, _: WinId) -> Result<()> {
        Ok(())
    }

    fn focus(&self, _: WinId) -> Result<()> {
        Ok(())
    }

    fn position_client(&self, _: WinId, _: Rect) -> Result<()> {
        Ok(())
    }

    fn stack_above(&self, _: WinId, _: WinId) -> Result<()> {
        Ok(())
    }

    fn set_border_width(&self, _: WinId, _: u32) -> Result<()> {
        Ok(())
    }

    fn set_border_color(&self, _: WinId, _: Color) -> Result<()> {
        Ok(())
    }

    fn grab_input(&self, _: WinId) -> Result<()> {
        Ok(())
    }

    fn ungrab_input(&self, _: WinId) -> Result<()> {
        Ok(())
    }

    fn arm_timer(&self, _: TimerToken) -> Result<()> {
        Ok(())
    }

    fn cancel_timer(&self, _: TimerToken) -> Result<()> {
        Ok(())
    }
}

/// Every request a [RecordingConn] has been asked to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedCall {
    /// map was called
    Map(WinId),
    /// unmap was called
    Unmap(WinId),
    /// kill was called
    Kill(WinId),
    /// focus was called
    Focus(WinId),
    /// position_client was called
    Position(WinId, Rect),
    /// stack_above was called
    StackAbove(WinId, WinId),
    /// set_border_width was called
    BorderWidth(WinId, u32),
    /// set_border_color was called
    BorderColor(WinId, Color),
    /// grab_input was called
    GrabInput(WinId),
    /// ungrab_input was called
    UngrabInput(WinId),
    /// arm_timer was called
    ArmTimer(TimerToken),
    /// cancel_timer was called
    CancelTimer(TimerToken),
}

/// A [DisplayConn] that records every call made against it and replays a
/// scripted list of events, requesting shutdown once they are exhausted.
#[derive(Debug, Default)]
pub struct RecordingConn {
    screens: Vec<Rect>,
    events: RefCell<VecDeque<DisplayEvent>>,
    urgency_hints: RefCell<HashMap<WinId, bool>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingConn {
    /// Create a connection reporting the given screens that will hand out
    /// the given events in order.
    pub fn new<I>(screens: Vec<Rect>, events: I) -> Self
    where
        I: IntoIterator<Item = DisplayEvent>,
    {
        Self {
            screens,
            events: RefCell::new(events.into_iter().collect()),
            urgency_hints: RefCell::new(HashMap::new()),
            calls: RefCell::new(vec![]),
        }
    }

    /// Set the urgency hint that will be reported for the given client.
    pub fn set_urgency_hint(&self, client: WinId, urgent: bool) {
        self.urgency_hints.borrow_mut().insert(client, urgent);
    }

    /// The calls made against this connection so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Drop all recorded calls, simplifying assertions about what a single
    /// operation did.
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: RecordedCall) -> Result<()> {
        self.calls.borrow_mut().push(call);

        Ok(())
    }
}

impl DisplayConn for RecordingConn {
    fn root(&self) -> WinId {
        WinId(0)
    }

    fn screen_details(&self) -> Result<Vec<Rect>> {
        Ok(self.screens.clone())
    }

    fn next_event(&self) -> Result<DisplayEvent> {
        Ok(self
            .events
            .borrow_mut()
            .pop_front()
            .unwrap_or(DisplayEvent::Shutdown))
    }

    fn flush(&self) {}

    fn existing_clients(&self) -> Result<Vec<WinId>> {
        Ok(vec![])
    }

    fn client_geometry(&self, _: WinId) -> Result<Rect> {
        Ok(Rect::default())
    }

    fn client_size_hints(&self, _: WinId) -> Result<Option<SizeHints>> {
        Ok(None)
    }

    fn client_urgency_hint(&self, client: WinId) -> Result<bool> {
        Ok(self
            .urgency_hints
            .borrow()
            .get(&client)
            .copied()
            .unwrap_or(false))
    }

    fn map(&self, client: WinId) -> Result<()> {
        self.record(RecordedCall::Map(client))
    }

    fn unmap(&self, client: WinId) -> Result<()> {
        self.record(RecordedCall::Unmap(client))
    }

    fn kill(&self, client: WinId) -> Result<()> {
        self.record(RecordedCall::Kill(client))
    }

    fn focus(&self, client: WinId) -> Result<()> {
        self.record(RecordedCall::Focus(client))
    }

    fn position_client(&self, client: WinId, r: Rect) -> Result<()> {
        self.record(RecordedCall::Position(client, r))
    }

    fn stack_above(&self, client: WinId, other: WinId) -> Result<()> {
        self.record(RecordedCall::StackAbove(client, other))
    }

    fn set_border_width(&self, client: WinId, px: u32) -> Result<()> {
        self.record(RecordedCall::BorderWidth(client, px))
    }

    fn set_border_color(&self, client: WinId, color: Color) -> Result<()> {
        self.record(RecordedCall::BorderColor(client, color))
    }

    fn grab_input(&self, client: WinId) -> Result<()> {
        self.record(RecordedCall::GrabInput(client))
    }

    fn ungrab_input(&self, client: WinId) -> Result<()> {
        self.record(RecordedCall::UngrabInput(client))
    }

    fn arm_timer(&self, token: TimerToken) -> Result<()> {
        self.record(RecordedCall::ArmTimer(token))
    }

    fn cancel_timer(&self, token: TimerToken) -> Result<()> {
        self.record(RecordedCall::CancelTimer(token))
    }
}
