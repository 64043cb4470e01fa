// ============================================================================
// Event Handler Interface
// Defines the contract for reporting notable conversions
// ============================================================================

use crate::numeric::RoundingMode;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by [`BahtConverter`](crate::engine::BahtConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Satang rounded to 100 and was held at 99 instead of carrying
    SatangClamped {
        /// Fractional digits as given, e.g. "995"
        fraction: String,
        rounding_mode: RoundingMode,
        timestamp: DateTime<Utc>,
    },

    /// A minus sign was dropped from the input
    SignDiscarded {
        input: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for conversion events
/// Implementations can log, count or collect events
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match event {
            ConversionEvent::SatangClamped {
                fraction,
                rounding_mode,
                ..
            } => {
                tracing::warn!(
                    fraction = %fraction,
                    ?rounding_mode,
                    "0.{fraction} rounds to 100 satang, held at 99 to keep the currency format; \
                     consider an overflow preset"
                );
            }
            ConversionEvent::SignDiscarded { input, .. } => {
                tracing::warn!(input = %input, "negative sign discarded, converting the magnitude");
            }
        }
    }
}

/// Event handler that keeps every event in memory
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events seen so far
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the events seen so far
    pub fn drain(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }
}
