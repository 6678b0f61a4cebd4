use std::f64::consts::PI;

/// Circumference of the progress ring (radius 45).
pub const CIRCUMFERENCE: f64 = 2.0 * PI * 45.0;

/// Lifecycle of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Phase {
    /// Reset and not started.
    #[default]
    Idle,
    /// Counting down; exactly one [`TickHandle`] is live.
    Running,
    /// Stopped part-way, can resume.
    Paused,
    /// Reached zero. Only [`Countdown::reset`] and [`Countdown::extend`] leave
    /// this phase.
    Expired,
}

/// Token identifying one run of the countdown.
///
/// A handle goes stale when the countdown is paused, reset or expires; ticks
/// carrying a stale handle are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The handle was stale or the countdown was not running.
    Ignored,
    /// One second elapsed, time remains.
    Ticked,
    /// The countdown reached zero with this tick.
    Expired,
}

/// Countdown state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    phase: Phase,
    generation: u64,
    live: Option<TickHandle>,
}

impl Countdown {
    /// Creates an idle countdown of `minutes`.
    #[must_use]
    pub fn new(minutes: u32) -> Self {
        let seconds = minutes.saturating_mul(60);
        Self {
            total: seconds,
            remaining: seconds,
            phase: Phase::Idle,
            generation: 0,
            live: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Length of the current run in seconds. An extension starts a new run.
    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.total
    }

    /// Seconds left before expiry.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    fn issue_handle(&mut self) -> TickHandle {
        self.generation += 1;
        let handle = TickHandle(self.generation);
        self.live = Some(handle);
        handle
    }

    /// Stops any run and refills to `minutes`.
    pub fn reset(&mut self, minutes: u32) {
        let seconds = minutes.saturating_mul(60);
        self.live = None;
        self.total = seconds;
        self.remaining = seconds;
        self.phase = Phase::Idle;
    }

    /// Starts or resumes counting.
    ///
    /// Returns the handle to tick with, or `None` if the countdown is already
    /// running, has expired, or has no time left.
    pub fn start(&mut self) -> Option<TickHandle> {
        match self.phase {
            Phase::Idle | Phase::Paused if self.remaining > 0 => {
                self.phase = Phase::Running;
                Some(self.issue_handle())
            }
            _ => None,
        }
    }

    /// Pauses a running countdown. Does nothing in any other phase.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.live = None;
            self.phase = Phase::Paused;
        }
    }

    /// Pauses if running, starts otherwise.
    pub fn toggle(&mut self) -> Option<TickHandle> {
        if self.phase == Phase::Running {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// Label of the start/pause button.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.phase == Phase::Running {
            "⏸"
        } else {
            "▶"
        }
    }

    /// Handle of the current run, if running.
    #[must_use]
    pub fn live_handle(&self) -> Option<TickHandle> {
        self.live
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self, handle: TickHandle) -> TickOutcome {
        if self.phase != Phase::Running || self.live != Some(handle) {
            return TickOutcome::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.live = None;
            self.phase = Phase::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked
        }
    }

    /// Restarts an expired countdown with `minutes` more.
    ///
    /// Non-positive `minutes`, or a countdown that has not expired, leave the
    /// state unchanged.
    pub fn extend(&mut self, minutes: i64) -> Option<TickHandle> {
        if self.phase != Phase::Expired {
            return None;
        }
        let minutes = u32::try_from(minutes).ok().filter(|&minutes| minutes > 0)?;
        let seconds = minutes.saturating_mul(60);
        self.total = seconds;
        self.remaining = seconds;
        self.phase = Phase::Running;
        Some(self.issue_handle())
    }

    /// Remaining share of the total, in `0.0..=1.0`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.remaining) / f64::from(self.total)
        }
    }

    /// Stroke offset of the progress ring: 0 when full, [`CIRCUMFERENCE`]
    /// when empty.
    #[must_use]
    pub fn dash_offset(&self) -> f64 {
        CIRCUMFERENCE - self.progress_fraction() * CIRCUMFERENCE
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        crate::format_mm_ss(self.remaining)
    }
}
