use std::cell::RefCell;
use std::time::Duration;

use crate::constants::POLL_INTERVAL;

/// Something that can run a callback repeatedly. Dropping the returned handle
/// must cancel the timer (as `gloo_timers::callback::Interval` does).
pub trait Scheduler {
    type Handle;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

struct ArmedPoll<H> {
    game_id: String,
    _handle: H,
}

/// Re-fetches state on a fixed period while a game screen is shown. Holds at
/// most one live timer.
pub struct Poller<S: Scheduler> {
    scheduler: S,
    period: Duration,
    active: RefCell<Option<ArmedPoll<S::Handle>>>,
}

impl<S: Scheduler> Poller<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_period(scheduler, POLL_INTERVAL)
    }

    pub fn with_period(scheduler: S, period: Duration) -> Self {
        Self { scheduler, period, active: RefCell::new(None) }
    }

    /// Arms polling for `game_id`, cancelling whatever was armed before.
    pub fn start(&self, game_id: &str, tick: impl FnMut() + 'static) {
        self.stop();
        let handle = self.scheduler.every(self.period, Box::new(tick));
        *self.active.borrow_mut() = Some(ArmedPoll { game_id: game_id.to_string(), _handle: handle });
        log::info!("polling game {} every {}ms", game_id, self.period.as_millis());
    }

    pub fn stop(&self) {
        let previous = self.active.borrow_mut().take();
        if let Some(armed) = previous {
            log::info!("stopped polling game {}", armed.game_id);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.active.borrow().is_some()
    }

    pub fn active_game(&self) -> Option<String> {
        self.active.borrow().as_ref().map(|a| a.game_id.clone())
    }
}

impl<S: Scheduler> Drop for Poller<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
