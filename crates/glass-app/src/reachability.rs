//! Main-frame reachability probe.
//!
//! wry reports when a guest load starts and stops but not whether it failed.
//! Each main-frame load start fires a `HEAD` request at the same URL on a
//! background runtime; any HTTP response counts as reachable, a transport
//! error counts as a main-frame load failure, unless the guest already
//! finished rendering that load.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use glass_common::GlassError;

use crate::display::GuestEvent;

/// Upper bound on a single probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub generation: u64,
    pub url: String,
    /// HTTP status on success, transport error text otherwise.
    pub result: Result<u16, String>,
}

impl ProbeOutcome {
    pub fn to_guest_event(&self) -> GuestEvent {
        match self.result {
            Ok(_) => GuestEvent::LoadFinished,
            Err(_) => GuestEvent::LoadFailed { main_frame: true },
        }
    }
}

/// Send a `HEAD` request and report the status code.
pub async fn check(client: &reqwest::Client, url: &str) -> Result<u16, reqwest::Error> {
    let response = client.head(url).send().await?;
    Ok(response.status().as_u16())
}

pub struct ReachabilityProbe {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
    tx: Sender<ProbeOutcome>,
    rx: Receiver<ProbeOutcome>,
    generation: u64,
}

impl ReachabilityProbe {
    /// Start the background runtime used for probes.
    pub fn start() -> Result<Self, GlassError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let client = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .map_err(|e| GlassError::Other(format!("probe client: {e}")))?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            client,
            tx,
            rx,
            generation: 0,
        })
    }

    /// Probe `url`. Outcomes of earlier probes become stale.
    pub fn probe(&mut self, url: &str) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let result = check(&client, &url).await.map_err(|e| e.to_string());
            match &result {
                Ok(status) => tracing::debug!(url = %url, status, "guest reachable"),
                Err(e) => tracing::warn!(url = %url, error = %e, "guest unreachable"),
            }
            let _ = tx.send(ProbeOutcome {
                generation,
                url,
                result,
            });
        });
        generation
    }

    /// Take every outcome that belongs to the latest probe.
    pub fn drain(&self) -> Vec<ProbeOutcome> {
        self.rx
            .try_iter()
            .filter(|o| self.is_current(o))
            .collect()
    }

    fn is_current(&self, outcome: &ProbeOutcome) -> bool {
        outcome.generation == self.generation
    }

    pub fn shutdown(self) {
        self.runtime.shutdown_timeout(Duration::from_secs(1));
    }
}

// =============================================================================
// TESTS
// =============================================================================
