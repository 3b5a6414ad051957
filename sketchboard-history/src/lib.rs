//! sketchboard-history: snapshot-based undo/redo for a drawing surface.
//!
//! The controller keeps an ordered list of full-surface snapshots and a cursor
//! counting how many of them are applied (`0 <= cursor <= len`). The surface
//! state at cursor `c` is `snapshots[c - 1]`, or the baseline captured at
//! attach time when `c == 0`.

use serde::{Deserialize, Serialize};
use sketchboard_core::{ChangeQueue, DrawingSurface, Snapshot, SurfaceError};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Retention settings for [`HistoryController`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Oldest snapshots are folded into the baseline beyond this many.
    /// `None` keeps everything.
    #[serde(default)]
    pub max_snapshots: Option<usize>,
}

impl HistoryConfig {
    pub fn unbounded() -> Self {
        Self {
            max_snapshots: None,
        }
    }

    pub fn bounded(max_snapshots: usize) -> Self {
        Self {
            max_snapshots: Some(max_snapshots),
        }
    }

    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.max_snapshots == Some(0) {
            tracing::error!("max_snapshots of zero would disable history");
            return Err(HistoryError::InvalidRetention);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct HistoryController {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    baseline: Snapshot,
    max_snapshots: Option<usize>,
    inbox: ChangeQueue,
}

impl HistoryController {
    /// Attach to `surface`: its current state becomes the baseline and a change
    /// handler is registered on it once.
    pub fn attach<S: DrawingSurface>(
        surface: &mut S,
        config: &HistoryConfig,
    ) -> Result<Self, HistoryError> {
        config.validate()?;

        let baseline = surface.serialize().map_err(HistoryError::Capture)?;
        let inbox = ChangeQueue::new();
        surface.on_change(inbox.handler());

        info!(
            max_snapshots = ?config.max_snapshots,
            baseline_bytes = baseline.len(),
            "history attached to surface"
        );

        Ok(Self {
            snapshots: Vec::new(),
            cursor: 0,
            baseline,
            max_snapshots: config.max_snapshots,
            inbox,
        })
    }

    /// Process queued change notifications: one snapshot per user mutation,
    /// restore notifications are dropped. Returns how many were recorded.
    ///
    /// If a capture fails, the failing notification and everything behind it
    /// stay queued for the next pump.
    pub fn pump<S: DrawingSurface>(&mut self, surface: &S) -> Result<usize, HistoryError> {
        let mut recorded = 0;
        while let Some(event) = self.inbox.peek() {
            if event.is_user_mutation() {
                trace!(kind = ?event.kind, object = ?event.object, "recording user change");
                if let Err(err) = self.record_snapshot(surface) {
                    warn!(pending = self.inbox.len(), "capture failed, notifications kept");
                    return Err(err);
                }
                recorded += 1;
            } else {
                trace!(kind = ?event.kind, "ignoring restore notification");
            }
            self.inbox.pop();
        }
        Ok(recorded)
    }

    /// Notifications waiting for the next pump.
    pub fn pending(&self) -> usize {
        self.inbox.len()
    }

    /// Append the surface's current state, abandoning any redo branch.
    pub fn record_snapshot<S: DrawingSurface>(&mut self, surface: &S) -> Result<(), HistoryError> {
        let snapshot = surface.serialize().map_err(HistoryError::Capture)?;

        if self.cursor < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - self.cursor,
                "new edit discards redo branch"
            );
            self.snapshots.truncate(self.cursor);
        }

        self.snapshots.push(snapshot);
        self.cursor += 1;

        if let Some(max) = self.max_snapshots {
            if self.snapshots.len() > max {
                let overflow = self.snapshots.len() - max;
                // The newest dropped snapshot is what cursor 0 now stands for
                if let Some(oldest_kept) = self.snapshots.drain(..overflow).last() {
                    self.baseline = oldest_kept;
                }
                self.cursor -= overflow;
                debug!(dropped = overflow, max, "history trimmed to retention cap");
            }
        }

        debug!(
            cursor = self.cursor,
            len = self.snapshots.len(),
            "snapshot recorded"
        );
        Ok(())
    }

    /// Step back one snapshot. Returns `false` when there is nothing to undo.
    pub fn undo<S: DrawingSurface>(&mut self, surface: &mut S) -> Result<bool, HistoryError> {
        self.pump(&*surface)?;

        if self.cursor == 0 {
            debug!("undo ignored, at start of history");
            return Ok(false);
        }

        let target = self.cursor - 1;
        let snapshot = if target > 0 {
            &self.snapshots[target - 1]
        } else {
            &self.baseline
        };
        surface
            .restore(snapshot)
            .map_err(|source| Self::restore_failed(target, source))?;

        self.cursor = target;
        self.discard_restore_notifications();
        info!(cursor = self.cursor, len = self.snapshots.len(), "undo");
        Ok(true)
    }

    /// Step forward one snapshot. Returns `false` when there is nothing to redo.
    pub fn redo<S: DrawingSurface>(&mut self, surface: &mut S) -> Result<bool, HistoryError> {
        self.pump(&*surface)?;

        if self.cursor == self.snapshots.len() {
            debug!("redo ignored, at end of history");
            return Ok(false);
        }

        let target = self.cursor + 1;
        surface
            .restore(&self.snapshots[self.cursor])
            .map_err(|source| Self::restore_failed(target, source))?;

        self.cursor = target;
        self.discard_restore_notifications();
        info!(cursor = self.cursor, len = self.snapshots.len(), "redo");
        Ok(true)
    }

    fn restore_failed(position: usize, source: SurfaceError) -> HistoryError {
        tracing::error!(position, error = %source, "snapshot restore failed");
        HistoryError::Restore { position, source }
    }

    fn discard_restore_notifications(&mut self) {
        let events = self.inbox.drain();
        let stray = events.iter().filter(|e| e.is_user_mutation()).count();
        if stray > 0 {
            warn!(stray, "user changes reported during restore were dropped");
        }
        trace!(discarded = events.len(), "restore notifications discarded");
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    /// The snapshot the surface should currently match.
    pub fn current(&self) -> &Snapshot {
        match self.cursor {
            0 => &self.baseline,
            c => &self.snapshots[c - 1],
        }
    }

    pub fn max_snapshots(&self) -> Option<usize> {
        self.max_snapshots
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("max_snapshots must be at least 1")]
    InvalidRetention,

    #[error("capture surface state: {0}")]
    Capture(#[source] SurfaceError),

    #[error("restore to history position {position}: {source}")]
    Restore {
        position: usize,
        #[source]
        source: SurfaceError,
    },
}
