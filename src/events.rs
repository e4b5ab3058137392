//! Interrupt-driven loop event queue.
//!
//! Events are produced by:
//! - the GPIO interrupt callback (motion sensor level change)
//! - the loop's own timers (control tick, heartbeat)
//! - the console watcher (shutdown request)
//!
//! Events are consumed by the main control loop, one at a time in FIFO
//! order.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ GPIO ISR     │────▶│              │     │              │
//! │ Timer        │────▶│  Event Queue │────▶│  Main Loop   │
//! │ Console      │────▶│  (lock-free) │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

/// Maximum number of pending events.
/// Power of 2 for efficient ring buffer modulo.
const EVENT_QUEUE_CAP: usize = 16;

/// Loop event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    /// Graceful shutdown requested (console or signal).
    ShutdownRequested = 0,
    /// The motion sensor GPIO reported a level change.
    MotionSensorChanged = 1,
    /// Control loop tick (drives detector sampling and animation steps).
    ControlTick = 10,
    /// Heartbeat report timer fired.
    HeartbeatTick = 20,
}

// ── Lock-free MPSC ring buffer ────────────────────────────────
//
// Multiple producer threads (GPIO interrupt callback, console watcher,
// the loop's own timers) write; only the main loop reads. Producers
// claim a slot index with a compare-exchange on the head, then publish
// the payload into the slot. A slot holds 0 while unclaimed/unpublished
// and `code + 1` once its event is visible, so the consumer can tell a
// claimed-but-not-yet-written slot apart from a ready one.

const SLOT_EMPTY: u8 = 0;

static EVENT_HEAD: AtomicU8 = AtomicU8::new(0);
static EVENT_TAIL: AtomicU8 = AtomicU8::new(0);
static EVENT_BUFFER: [AtomicU8; EVENT_QUEUE_CAP] =
    [const { AtomicU8::new(SLOT_EMPTY) }; EVENT_QUEUE_CAP];

/// Push an event into the queue.
/// Safe to call concurrently from interrupt callback and thread context.
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: Event) -> bool {
    let mut head = EVENT_HEAD.load(Ordering::Relaxed);
    loop {
        let tail = EVENT_TAIL.load(Ordering::Acquire);
        let next_head = (head + 1) % EVENT_QUEUE_CAP as u8;

        if next_head == tail {
            return false; // Queue full — drop event.
        }

        match EVENT_HEAD.compare_exchange_weak(
            head,
            next_head,
            Ordering::AcqRel,
            Ordering::Relaxed,
        ) {
            Ok(_) => {
                EVENT_BUFFER[head as usize].store(event as u8 + 1, Ordering::Release);
                return true;
            }
            Err(actual) => head = actual, // Lost the race; retry on the new head.
        }
    }
}

/// Pop the next event from the queue.
/// Called from the main loop (single consumer).
/// Returns `None` if the queue is empty.
pub fn pop_event() -> Option<Event> {
    let tail = EVENT_TAIL.load(Ordering::Relaxed);
    let head = EVENT_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    // The head has advanced past this slot, but its producer may still be
    // between claiming the index and publishing the payload.
    let raw = loop {
        let raw = EVENT_BUFFER[tail as usize].load(Ordering::Acquire);
        if raw != SLOT_EMPTY {
            break raw;
        }
        core::hint::spin_loop();
    };

    EVENT_BUFFER[tail as usize].store(SLOT_EMPTY, Ordering::Relaxed);
    EVENT_TAIL.store((tail + 1) % EVENT_QUEUE_CAP as u8, Ordering::Release);

    event_from_u8(raw - 1)
}

/// Drain all pending events into a callback, in FIFO order.
pub fn drain_events(mut handler: impl FnMut(Event)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

/// Number of pending events.
pub fn queue_len() -> usize {
    let head = EVENT_HEAD.load(Ordering::Relaxed) as usize;
    let tail = EVENT_TAIL.load(Ordering::Relaxed) as usize;
    (head + EVENT_QUEUE_CAP - tail) % EVENT_QUEUE_CAP
}

// ── Internal ──────────────────────────────────────────────────

fn event_from_u8(raw: u8) -> Option<Event> {
    match raw {
        0 => Some(Event::ShutdownRequested),
        1 => Some(Event::MotionSensorChanged),
        10 => Some(Event::ControlTick),
        20 => Some(Event::HeartbeatTick),
        _ => None,
    }
}
