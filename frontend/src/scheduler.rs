use std::time::Duration;

use gloo_timers::callback::Interval;
use hangman_shared::poller::{Poller, Scheduler};

/// Browser timers. Dropping the `Interval` clears it.
#[derive(Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period.as_millis() as u32, move || tick())
    }
}

pub type GamePoller = Poller<IntervalScheduler>;
