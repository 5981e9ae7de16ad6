//! Keeps the guest surface pixel-aligned with the chrome's content container.
//!
//! Every report is applied immediately and in full: the snapshot is recomputed
//! from the reported rect, never patched from the previous one.

use glass_common::{GeometrySnapshot, RawRect};
use glass_webview::DomCommand;

use super::surface::{DomSink, GuestSurface};

#[derive(Debug, Default)]
pub struct ResizeSynchronizer {
    last: Option<GeometrySnapshot>,
}

impl ResizeSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one layout report.
    ///
    /// `observed` is the layout observer's rect, if it supplied one; otherwise
    /// the container's bounding box is used. The outer step (placeholder style
    /// size) always runs. The inner step runs only when a guest is attached,
    /// and its failures are logged and swallowed.
    pub fn apply<D, G>(
        &mut self,
        observed: Option<RawRect>,
        bounding: RawRect,
        dom: &mut D,
        guest: Option<&mut G>,
    ) -> GeometrySnapshot
    where
        D: DomSink + ?Sized,
        G: GuestSurface + ?Sized,
    {
        let rect = observed.unwrap_or(bounding);
        let snapshot = GeometrySnapshot::from_rect(&rect);
        tracing::debug!(
            x = snapshot.x,
            y = snapshot.y,
            width = snapshot.width,
            height = snapshot.height,
            "resize surface"
        );

        dom.apply(DomCommand::SetSurfaceSize {
            width: snapshot.width,
            height: snapshot.height,
        });

        match guest {
            Some(guest) => apply_inner(guest, &snapshot),
            None => tracing::trace!("inner resize skipped: guest not attached"),
        }

        self.last = Some(snapshot);
        snapshot
    }

    /// Push the last known geometry into a freshly attached guest.
    pub fn sync_attached<G: GuestSurface + ?Sized>(&self, guest: &mut G) {
        if let Some(snapshot) = &self.last {
            apply_inner(guest, snapshot);
        }
    }

    /// Most recent snapshot, if any report has arrived yet.
    pub fn last(&self) -> Option<GeometrySnapshot> {
        self.last
    }
}

fn apply_inner<G: GuestSurface + ?Sized>(guest: &mut G, snapshot: &GeometrySnapshot) {
    if let Err(e) = guest.set_geometry(snapshot) {
        tracing::warn!(error = %e, "guest resize failed");
    }
}

// =============================================================================
// TESTS
// =============================================================================
