//! The bridge between the display side and the window-owning side.
//!
//! The display side holds a [`BridgeClient`] and nothing else that can reach
//! the native window. Every capability it has is a variant of
//! [`BridgeRequest`]; there is no generic escape hatch.
//!
//! Messages flow in both directions over one FIFO channel per direction:
//! - **display -> window**: [`Envelope`]s carrying a request and its id.
//! - **window -> display**: [`Inbound`] replies (matched by id) and pushed
//!   [`BridgeEvent`]s.

pub mod channel;
pub mod protocol;

pub use channel::{channel, BridgeClient, BridgeHost, Envelope, Inbound, RequestId};
pub use protocol::{
    is_external_url_allowed, BridgeEvent, BridgeReply, BridgeRequest, DebugPayload, ThemeUpdate,
    ALLOWED_EXTERNAL_PREFIXES,
};
