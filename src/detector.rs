//! Motion edge detector.
//!
//! ## Hardware
//!
//! HC-SR501 PIR sensor on a plain GPIO input. The GPIO interrupt fires on
//! any level change and records the edge in a pair of atomic counters
//! (all edges, rising edges); `tick()` (called from the main loop) samples
//! the level through [`SensorPort`] only when a notification is pending,
//! so the sensor is never busy-polled. The rising-edge counter covers
//! pulses shorter than one loop interval, which would otherwise sample
//! Low after the fact and be missed.
//!
//! ## Edge semantics
//!
//! | Transition   | Emits                                   |
//! |--------------|-----------------------------------------|
//! | Low → High   | exactly one [`MotionEvent`]             |
//! | High → Low   | nothing (no "motion ended" signal)      |
//! | High → High  | nothing — one presence, one event       |
//!
//! A failed level read drops the sample, reports
//! [`AppEvent::SensorReadFailed`] through the sink, and leaves the detector
//! running.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, SensorLevel, SensorPort};

/// Edge counters bumped by the GPIO interrupt callback.
/// Written by the ISR context, read by the main loop. Rising edges are
/// counted separately so a pulse shorter than one loop interval (risen
/// and fallen again between ticks) is still seen as a visitor even
/// though the level samples Low by the time the loop looks.
static SENSOR_EDGE_SEQ: AtomicU32 = AtomicU32::new(0);
static SENSOR_RISING_SEQ: AtomicU32 = AtomicU32::new(0);

/// Interrupt hook — register this on the motion sensor GPIO (both edges),
/// passing the level the edge settled at.
/// Safe to call from interrupt callback context (lock-free atomics).
pub fn sensor_isr_notify(level: SensorLevel) {
    if level == SensorLevel::High {
        SENSOR_RISING_SEQ.fetch_add(1, Ordering::Release);
    }
    SENSOR_EDGE_SEQ.fetch_add(1, Ordering::Release);
}

/// Immutable marker for one logical motion trigger.
/// Produced on a Low→High transition, consumed once by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvent {
    /// Monotonic timestamp of the transition, milliseconds since start.
    pub at_ms: u64,
}

/// Edge-triggered detector over the sensor level.
pub struct MotionDetector {
    state: SensorLevel,
    last_edge_seq: u32,
    last_rising_seq: u32,
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionDetector {
    pub fn new() -> Self {
        Self {
            state: SensorLevel::Low,
            last_edge_seq: SENSOR_EDGE_SEQ.load(Ordering::Acquire),
            last_rising_seq: SENSOR_RISING_SEQ.load(Ordering::Acquire),
        }
    }

    /// Last observed level.
    pub fn state(&self) -> SensorLevel {
        self.state
    }

    /// Call from the main loop. Samples the sensor only when the interrupt
    /// counters moved since the last call, then runs the edge state machine.
    ///
    /// A recorded rising edge fires even when the sampled level has already
    /// fallen back Low — the visitor was there, the loop just looked late.
    /// Multiple rises within one tick coalesce into a single event.
    pub fn tick(
        &mut self,
        hw: &mut impl SensorPort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Option<MotionEvent> {
        let edge_seq = SENSOR_EDGE_SEQ.load(Ordering::Acquire);
        let rising_seq = SENSOR_RISING_SEQ.load(Ordering::Acquire);
        if edge_seq == self.last_edge_seq {
            return None;
        }
        self.last_edge_seq = edge_seq;
        let rose = rising_seq != self.last_rising_seq;
        self.last_rising_seq = rising_seq;

        match hw.read_level() {
            Ok(level) => {
                let sampled = self.on_level(level, now_ms);
                if sampled.is_some() {
                    sampled
                } else if rose {
                    Some(MotionEvent { at_ms: now_ms })
                } else {
                    None
                }
            }
            Err(e) => {
                log::warn!("Motion sensor read failed: {e} — sample dropped");
                sink.emit(&AppEvent::SensorReadFailed(e));
                None
            }
        }
    }

    /// Pure transition step: feed one sampled level, get at most one event.
    pub fn on_level(&mut self, level: SensorLevel, now_ms: u64) -> Option<MotionEvent> {
        let prev = self.state;
        self.state = level;

        match (prev, level) {
            (SensorLevel::Low, SensorLevel::High) => Some(MotionEvent { at_ms: now_ms }),
            _ => None,
        }
    }
}
