//! Countdown timer for the Dayboard schedule board.
//!
//! [`Countdown`] is a headless state machine. It does not own a clock: the
//! host calls [`Countdown::tick`] once per elapsed second with the
//! [`TickHandle`] it got from [`Countdown::start`]. Pausing, resetting and
//! expiring invalidate the handle, so a tick that was already scheduled when
//! the user pressed pause is ignored instead of decrementing twice.
//!
//! # Examples
//!
//! ```
//! use dayboard_timer::{Countdown, Phase, TickOutcome};
//!
//! let mut countdown = Countdown::new(1);
//! let handle = countdown.start().unwrap();
//! for _ in 0..59 {
//!     assert_eq!(countdown.tick(handle), TickOutcome::Ticked);
//! }
//! assert_eq!(countdown.tick(handle), TickOutcome::Expired);
//! assert_eq!(countdown.phase(), Phase::Expired);
//! assert_eq!(countdown.tick(handle), TickOutcome::Ignored);
//! ```

mod countdown;
mod format;

pub use self::{
    countdown::{CIRCUMFERENCE, Countdown, Phase, TickHandle, TickOutcome},
    format::{DEFAULT_MINUTES, format_mm_ss, parse_minutes},
};
