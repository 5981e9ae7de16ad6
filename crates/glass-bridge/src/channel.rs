//! In-process channel pair carrying the bridge protocol.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

use glass_common::BridgeError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::protocol::{BridgeEvent, BridgeReply, BridgeRequest, DebugPayload};

/// Correlates a reply with the request that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// A request travelling from the display side to the window side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: RequestId,
    pub request: BridgeRequest,
}

/// Anything travelling from the window side to the display side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Inbound {
    Reply { id: RequestId, reply: BridgeReply },
    Event { event: BridgeEvent },
}

/// Create a connected client/host pair.
pub fn channel() -> (BridgeClient, BridgeHost) {
    let (request_tx, request_rx) = mpsc::channel();
    let (inbound_tx, inbound_rx) = mpsc::channel();
    (
        BridgeClient {
            next_id: 1,
            requests: request_tx,
            inbound: inbound_rx,
        },
        BridgeHost {
            requests: request_rx,
            outbound: inbound_tx,
        },
    )
}

// =============================================================================
// CLIENT (display side)
// =============================================================================

/// The display side's only handle on the window.
pub struct BridgeClient {
    next_id: u64,
    requests: Sender<Envelope>,
    inbound: Receiver<Inbound>,
}

impl BridgeClient {
    /// Send a request. The reply arrives later through [`Self::drain`].
    pub fn invoke(&mut self, request: BridgeRequest) -> Result<RequestId, BridgeError> {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        let channel = request.channel();
        self.requests
            .send(Envelope { id, request })
            .map_err(|_| BridgeError::Disconnected)?;
        debug!(%id, channel, "bridge request sent");
        Ok(id)
    }

    pub fn minimize(&mut self) -> Result<RequestId, BridgeError> {
        self.invoke(BridgeRequest::Minimize)
    }

    pub fn toggle_maximize(&mut self) -> Result<RequestId, BridgeError> {
        self.invoke(BridgeRequest::ToggleMaximize)
    }

    pub fn close(&mut self) -> Result<RequestId, BridgeError> {
        self.invoke(BridgeRequest::Close)
    }

    pub fn get_theme(&mut self) -> Result<RequestId, BridgeError> {
        self.invoke(BridgeRequest::GetTheme)
    }

    pub fn open_external(&mut self, url: impl Into<String>) -> Result<RequestId, BridgeError> {
        self.invoke(BridgeRequest::OpenExternal { url: url.into() })
    }

    pub fn start_drag(&mut self) -> Result<RequestId, BridgeError> {
        self.invoke(BridgeRequest::StartDrag)
    }

    /// Fire-and-forget. Never fails from the caller's point of view.
    pub fn debug_log(&mut self, payload: impl Into<DebugPayload>) {
        let values = payload.into().into_values();
        if let Err(e) = self.invoke(BridgeRequest::DebugLog { values }) {
            trace!(error = %e, "debug log dropped");
        }
    }

    /// Take every pending reply and event, in arrival order.
    pub fn drain(&self) -> Vec<Inbound> {
        self.inbound.try_iter().collect()
    }
}

// =============================================================================
// HOST (window side)
// =============================================================================

/// The window side's end: receives requests, sends replies and events.
pub struct BridgeHost {
    requests: Receiver<Envelope>,
    outbound: Sender<Inbound>,
}

impl BridgeHost {
    /// Take every pending request, in the order it was sent.
    pub fn drain_requests(&self) -> Vec<Envelope> {
        self.requests.try_iter().collect()
    }

    pub fn reply(&self, id: RequestId, reply: BridgeReply) -> Result<(), BridgeError> {
        self.outbound
            .send(Inbound::Reply { id, reply })
            .map_err(|_| BridgeError::Disconnected)
    }

    /// Push an event to the display side.
    pub fn emit(&self, event: BridgeEvent) -> Result<(), BridgeError> {
        trace!(channel = event.channel(), "bridge event");
        self.outbound
            .send(Inbound::Event { event })
            .map_err(|_| BridgeError::Disconnected)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ThemeUpdate;
    use glass_common::ThemeMode;
    use serde_json::json;

    #[test]
    fn requests_arrive_in_order_with_increasing_ids() {
        let (mut client, host) = channel();
        let a = client.minimize().unwrap();
        let b = client.toggle_maximize().unwrap();
        let c = client.open_external("https://example.com").unwrap();

        let received = host.drain_requests();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0].id, a);
        assert_eq!(received[0].request, BridgeRequest::Minimize);
        assert_eq!(received[1].id, b);
        assert_eq!(received[2].id, c);
        assert!(a < b && b < c);
        assert!(host.drain_requests().is_empty());
    }

    #[test]
    fn replies_and_events_keep_send_order() {
        let (client, host) = channel();
        host.emit(BridgeEvent::WindowFocus(true)).unwrap();
        host.reply(RequestId(7), BridgeReply::Maximized(true)).unwrap();
        host.emit(BridgeEvent::ThemeUpdated(ThemeUpdate::Mode(ThemeMode::Dark)))
            .unwrap();

        let inbound = client.drain();
        assert_eq!(
            inbound,
            vec![
                Inbound::Event {
                    event: BridgeEvent::WindowFocus(true)
                },
                Inbound::Reply {
                    id: RequestId(7),
                    reply: BridgeReply::Maximized(true)
                },
                Inbound::Event {
                    event: BridgeEvent::ThemeUpdated(ThemeUpdate::Mode(ThemeMode::Dark))
                },
            ]
        );
        assert!(client.drain().is_empty());
    }

    #[test]
    fn invoke_after_host_dropped_is_disconnected() {
        let (mut client, host) = channel();
        drop(host);
        assert_eq!(client.get_theme(), Err(BridgeError::Disconnected));
        // must not panic
        client.debug_log("still fine");
        assert!(client.drain().is_empty());
    }

    #[test]
    fn host_send_after_client_dropped_is_disconnected() {
        let (client, host) = channel();
        drop(client);
        assert_eq!(
            host.emit(BridgeEvent::WindowMaximized(false)),
            Err(BridgeError::Disconnected)
        );
        assert_eq!(
            host.reply(RequestId(1), BridgeReply::Done),
            Err(BridgeError::Disconnected)
        );
    }

    #[test]
    fn debug_log_sends_normalized_values() {
        let (mut client, host) = channel();
        client.debug_log(json!({"width": 10}));
        client.debug_log(vec![json!("a"), json!(1)]);

        let received = host.drain_requests();
        assert_eq!(
            received[0].request,
            BridgeRequest::DebugLog {
                values: vec![json!({"width": 10})]
            }
        );
        assert_eq!(
            received[1].request,
            BridgeRequest::DebugLog {
                values: vec![json!("a"), json!(1)]
            }
        );
    }

    #[test]
    fn request_id_display() {
        assert_eq!(RequestId(42).to_string(), "req-42");
    }
}
