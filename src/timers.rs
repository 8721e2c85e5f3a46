//! The terminal's timer facility: a table of repeating deadlines that the
//! event loop waits on
use crate::engine::{Scheduler, Timer};
use enum_map::EnumMap;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Deadlines(EnumMap<Timer, Option<Repeating>>);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Repeating {
    period: Duration,
    due: Instant,
}

impl Deadlines {
    /// Return the timer that is due to fire soonest, along with when it is
    /// due.  Returns `None` if no timers are running.
    pub(crate) fn next_due(&self) -> Option<(Timer, Instant)> {
        self.0
            .iter()
            .filter_map(|(timer, rep)| rep.map(|r| (timer, r.due)))
            .min_by_key(|&(_, due)| due)
    }

    /// Mark `timer` as having fired at `now` and set its next deadline one
    /// period later.  If the loop has fallen more than a period behind, the
    /// missed firings are skipped rather than delivered in a burst.
    pub(crate) fn rearm(&mut self, timer: Timer, now: Instant) {
        if let Some(rep) = self.0[timer].as_mut() {
            rep.due += rep.period;
            if rep.due <= now {
                rep.due = now + rep.period;
            }
        }
    }

    fn schedule_from(&mut self, timer: Timer, period: Duration, now: Instant) {
        self.0[timer] = Some(Repeating {
            period,
            due: now + period,
        });
    }
}

impl Scheduler for Deadlines {
    fn schedule(&mut self, timer: Timer, period: Duration) {
        self.schedule_from(timer, period, Instant::now());
    }

    fn cancel(&mut self, timer: Timer) {
        self.0[timer] = None;
    }
}
