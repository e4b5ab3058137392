//! Mouth animator — bounded, cancellable servo oscillation.
//!
//! Each trigger runs one [`AnimationTask`]: a fixed number of servo writes
//! alternating between the configured maximum and minimum angle, one write
//! per step interval. At most one task exists at a time; `trigger` flags the
//! old task cancelled **before** installing its replacement, so two runs can
//! never interleave writes on the same servo.
//!
//! Steps are deadline-driven: the main loop calls `tick()` each iteration
//! and a step only executes once its deadline has passed. The inter-step
//! delay is therefore a suspension of the loop, not a spin.
//!
//! A servo write failure terminates the current run silently — animation
//! completeness is sacrificed for liveness of the rest of the system.

use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, EventSink};

/// One in-flight oscillation run.
#[derive(Debug)]
struct AnimationTask {
    /// Servo writes left in this run. Never incremented.
    remaining: u8,
    /// Whether the last write went to the maximum angle.
    at_max: bool,
    /// Set by `cancel`; checked at the top of every step, before any write.
    cancelled: bool,
    /// Deadline for the next step (monotonic milliseconds).
    next_due_ms: u64,
}

/// Owns the animation lifecycle for the jaw servo.
pub struct MouthAnimator {
    task: Option<AnimationTask>,
    step_count: u8,
    step_interval_ms: u64,
    min_angle_deg: f32,
    max_angle_deg: f32,
}

impl MouthAnimator {
    pub fn new(
        step_count: u8,
        step_interval_ms: u64,
        min_angle_deg: f32,
        max_angle_deg: f32,
    ) -> Self {
        Self {
            task: None,
            step_count,
            step_interval_ms,
            min_angle_deg,
            max_angle_deg,
        }
    }

    /// Start a fresh run, superseding any active one.
    ///
    /// Cancel-then-replace: the prior task's cancelled flag is raised before
    /// the new task is installed, so a step belonging to the old run can
    /// never write once its successor exists. The first step of the new run
    /// is due immediately.
    pub fn trigger(&mut self, now_ms: u64, sink: &mut impl EventSink) {
        self.cancel();
        self.task = Some(AnimationTask {
            remaining: self.step_count,
            at_max: false,
            cancelled: false,
            next_due_ms: now_ms,
        });
        sink.emit(&AppEvent::AnimationStarted {
            steps: self.step_count,
        });
    }

    /// Cancel the active run, if any. Visible to any step that has not yet
    /// executed; no further servo writes will occur from that run.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.as_mut() {
            task.cancelled = true;
        }
    }

    /// Whether a live (non-cancelled, non-exhausted) run exists.
    pub fn is_active(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|t| !t.cancelled && t.remaining > 0)
    }

    /// Execute the due step, if any. Call once per main-loop iteration.
    pub fn tick(&mut self, now_ms: u64, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let Some(task) = self.task.as_mut() else {
            return;
        };

        // Cancellation and exhaustion both terminate silently, before any
        // write is attempted.
        if task.cancelled || task.remaining == 0 {
            self.task = None;
            return;
        }

        if now_ms < task.next_due_ms {
            return;
        }

        // Alternate between the end stops, starting with the maximum.
        let angle = if task.at_max {
            self.min_angle_deg
        } else {
            self.max_angle_deg
        };

        match hw.set_angle(angle) {
            Ok(()) => {
                task.at_max = !task.at_max;
                task.remaining -= 1;
                if task.remaining > 0 && !task.cancelled {
                    task.next_due_ms = now_ms + self.step_interval_ms;
                } else {
                    self.task = None;
                    sink.emit(&AppEvent::AnimationFinished);
                }
            }
            Err(e) => {
                // No retry, no propagation: drop the run and move on.
                log::debug!("Servo write failed mid-animation: {e}");
                self.task = None;
                sink.emit(&AppEvent::AnimationFault(e));
            }
        }
    }
}
