use std::time::Duration;

use dayboard_timer::TickHandle;

/// Converts frame timestamps into whole-second countdown ticks.
///
/// Deadlines advance by exactly one second per tick, so a slow frame delivers
/// the missed ticks late instead of dropping them.
#[derive(Debug, Default)]
pub(crate) struct Ticker {
    run: Option<(TickHandle, f64)>,
}

impl Ticker {
    /// Returns the number of ticks due at `now` (seconds) for the live handle.
    pub(crate) fn poll(&mut self, now: f64, live: Option<TickHandle>) -> u32 {
        let Some(handle) = live else {
            self.run = None;
            return 0;
        };
        let deadline = match self.run {
            Some((current, deadline)) if current == handle => deadline,
            _ => now + 1.0,
        };
        let mut deadline = deadline;
        let mut due = 0;
        while now >= deadline {
            due += 1;
            deadline += 1.0;
        }
        self.run = Some((handle, deadline));
        due
    }

    /// Time until the next tick is due, if a run is in progress.
    #[must_use]
    pub(crate) fn wait(&self, now: f64) -> Option<Duration> {
        self.run
            .map(|(_, deadline)| Duration::from_secs_f64((deadline - now).max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use dayboard_timer::Countdown;

    use super::Ticker;

    #[test]
    fn first_tick_is_one_second_after_start() {
        let mut countdown = Countdown::new(1);
        let handle = countdown.start();
        let mut ticker = Ticker::default();

        assert_eq!(ticker.poll(10.0, handle), 0);
        assert_eq!(ticker.poll(10.5, handle), 0);
        assert_eq!(ticker.poll(11.0, handle), 1);
        assert_eq!(ticker.poll(11.2, handle), 0);
        assert!(ticker.wait(11.2).is_some());
    }

    #[test]
    fn late_frame_delivers_missed_ticks() {
        let mut countdown = Countdown::new(1);
        let handle = countdown.start();
        let mut ticker = Ticker::default();

        ticker.poll(0.0, handle);
        assert_eq!(ticker.poll(3.5, handle), 3);
        assert_eq!(ticker.poll(4.0, handle), 1);
    }

    #[test]
    fn new_handle_restarts_the_second() {
        let mut countdown = Countdown::new(1);
        let first = countdown.start();
        let mut ticker = Ticker::default();
        ticker.poll(0.0, first);

        countdown.pause();
        assert_eq!(ticker.poll(0.8, countdown.live_handle()), 0);
        assert!(ticker.wait(0.8).is_none());

        let second = countdown.start();
        assert_eq!(ticker.poll(0.9, second), 0);
        assert_eq!(ticker.poll(1.5, second), 0);
        assert_eq!(ticker.poll(1.9, second), 1);
    }
}
