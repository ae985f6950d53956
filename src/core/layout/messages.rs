//! Messages for reconfiguring layouts at runtime.
use std::any::Any;
use std::fmt;

/// A typed message sent to a [Layout][super::Layout] to trigger
/// reconfiguration.
///
/// The built-in message set is a closed enum and layouts dispatch by matching
/// on the variant: a layout handles the messages it recognises and ignores
/// the rest, leaving its state unchanged. Extension layouts that need their
/// own message vocabulary use the [Custom][Message::Custom] variant, matching
/// on its tag before looking at the payload.
#[derive(Debug)]
#[non_exhaustive]
pub enum Message {
    /// Shrink the main area of the layout
    ShrinkMain,
    /// Expand the main area of the layout
    ExpandMain,
    /// Alter the number of clients contained in the main area of the layout
    IncMain(i8),
    /// Advance to the next layout alternative, wrapping at the end
    NextLayout,
    /// Jump directly to the layout alternative with the given name
    JumpToLayout(String),
    /// The layout is no longer being displayed. Layouts and transformers
    /// holding external resources must release them on receipt.
    Hide,
    /// The window manager is shutting down or restarting
    ShutDown,
    /// An extension message carrying a tagged opaque payload
    Custom(CustomMessage),
}

impl Message {
    /// Wrap a payload as a [Message::Custom] with the given tag.
    ///
    /// Receivers match on the tag before downcasting the payload, so tags
    /// should be unique per payload type.
    pub fn custom<T: Any>(tag: &'static str, payload: T) -> Self {
        Self::Custom(CustomMessage {
            tag,
            payload: Box::new(payload),
        })
    }
}

/// The payload of a [Message::Custom]: a tag identifying the message type
/// and an opaque boxed value.
pub struct CustomMessage {
    tag: &'static str,
    payload: Box<dyn Any>,
}

impl fmt::Debug for CustomMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomMessage")
            .field("tag", &self.tag)
            .finish()
    }
}

impl CustomMessage {
    /// The tag this message was constructed with.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Attempt to view the payload as a particular type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }
}
