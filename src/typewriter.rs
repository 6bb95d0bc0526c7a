use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use thiserror::Error;

pub const CARET: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(80),
            delete_delay: Duration::from_millis(40),
            pause: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

/// Cycles through a fixed list of phrases, typing each one out a character
/// at a time, holding it, then deleting it again.
///
/// The state only moves when [`Typewriter::tick`] is called. Whoever owns it
/// is responsible for calling `tick` after the delay it returns, and for
/// keeping exactly one such call pending.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Arc<[String]>,
    timing: Timing,
    index: usize,
    // characters of the current phrase shown, not bytes
    shown: usize,
    mode: Mode,
    epoch: u64,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, timing: Timing) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect::<Arc<[String]>>();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            index: 0,
            shown: 0,
            mode: Mode::Typing,
            epoch: 0,
        })
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn displayed_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    pub fn next_delay(&self) -> Duration {
        match self.mode {
            Mode::Typing => self.timing.type_delay,
            Mode::Pausing => self.timing.pause,
            Mode::Deleting => self.timing.delete_delay,
        }
    }

    /// Advance one step and return how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        match self.mode {
            Mode::Typing => {
                let full = self.phrase_len();
                if self.shown < full {
                    self.shown += 1;
                }
                if self.shown == full {
                    self.mode = Mode::Pausing;
                }
            }
            Mode::Pausing => self.mode = Mode::Deleting,
            Mode::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                }
            }
        }
        self.next_delay()
    }

    /// Like [`Typewriter::tick`], but ignored when the timer that fired was
    /// scheduled before the last [`Typewriter::reset`].
    pub fn tick_if_current(&mut self, epoch: u64) -> Option<Duration> {
        if epoch != self.epoch {
            return None;
        }
        Some(self.tick())
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.mode = Mode::Typing;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

/// One-shot timers, as provided by whatever event loop hosts the animation.
pub trait Timer {
    type Handle;

    /// Run `f` once after `delay`. `None` if the timer couldn't be set.
    fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Shared access to a [`Typewriter`] that may go away, e.g. a reactive
/// signal whose owner has been disposed.
pub trait TypewriterCell {
    fn update_typewriter<R>(&self, f: impl FnOnce(&mut Typewriter) -> R) -> Option<R>;
}

/// Drives a [`Typewriter`] off a [`Timer`]: each tick schedules the next one
/// with the delay it returns.
///
/// At most one tick is pending at a time. Scheduling while one is pending
/// cancels the old one, and [`TickLoop::stop`] cancels whatever is left.
pub struct TickLoop<C, T: Timer> {
    state: C,
    timer: T,
    pending: Arc<Mutex<Option<T::Handle>>>,
}

impl<C: Clone, T: Timer + Clone> Clone for TickLoop<C, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            timer: self.timer.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<C, T> TickLoop<C, T>
where
    C: TypewriterCell + Clone + 'static,
    T: Timer + Clone + 'static,
{
    pub fn new(state: C, timer: T) -> Self {
        Self {
            state,
            timer,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn start(&self) {
        if let Some((epoch, delay)) = self
            .state
            .update_typewriter(|tw| (tw.epoch(), tw.next_delay()))
        {
            self.schedule(epoch, delay);
        }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.take_pending() {
            self.timer.cancel(handle);
        }
    }

    /// Cancel the pending tick, rewind to the first phrase and start over.
    /// A tick from before the restart that still fires is dropped by the
    /// epoch check.
    pub fn restart(&self) {
        self.stop();
        if self.state.update_typewriter(Typewriter::reset).is_some() {
            self.start();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn take_pending(&self) -> Option<T::Handle> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn schedule(&self, epoch: u64, delay: Duration) {
        self.stop();
        let this = self.clone();
        let handle = self.timer.schedule(delay, move || {
            this.take_pending();
            // None once the owner is gone or the state was reset under us
            if let Some(Some(next)) = this.state.update_typewriter(|tw| tw.tick_if_current(epoch))
            {
                this.schedule(epoch, next);
            }
        });
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = handle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> Timing {
        Timing {
            type_delay: Duration::from_millis(1),
            delete_delay: Duration::from_millis(1),
            pause: Duration::from_millis(5),
        }
    }

    fn assert_prefix(tw: &Typewriter) {
        assert!(
            tw.current_phrase().starts_with(tw.displayed_text()),
            "{:?} is not a prefix of {:?}",
            tw.displayed_text(),
            tw.current_phrase()
        );
    }

    #[test]
    fn test_empty_list_rejected() {
        let res = Typewriter::new(Vec::<String>::new(), Timing::default());
        assert_eq!(res.unwrap_err(), TypewriterError::NoPhrases);
    }

    #[test]
    fn test_initial_state() {
        let tw = Typewriter::new(["Web3 Developer"], Timing::default()).unwrap();
        assert_eq!(tw.current_index(), 0);
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.next_delay(), Duration::from_millis(80));
    }

    #[test]
    fn test_two_phrase_cycle() {
        let mut tw = Typewriter::new(["A", "BB"], instant()).unwrap();

        let delay = tw.tick();
        assert_eq!(tw.displayed_text(), "A");
        assert_eq!(tw.mode(), Mode::Pausing);
        assert_eq!(delay, Duration::from_millis(5));

        tw.tick();
        assert_eq!(tw.mode(), Mode::Deleting);
        assert_eq!(tw.displayed_text(), "A");

        tw.tick();
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.current_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);

        tw.tick();
        assert_eq!(tw.displayed_text(), "B");
        tw.tick();
        assert_eq!(tw.displayed_text(), "BB");
        assert_eq!(tw.mode(), Mode::Pausing);
    }

    #[test]
    fn test_lengths_move_by_one() {
        let mut tw = Typewriter::new(["Cryptographer", "Go", "DeFi Builder"], instant()).unwrap();
        for _ in 0..200 {
            let before_len = tw.displayed_text().chars().count();
            let before_mode = tw.mode();
            let before_index = tw.current_index();
            tw.tick();
            assert_prefix(&tw);
            let after_len = tw.displayed_text().chars().count();
            match before_mode {
                Mode::Typing => {
                    assert_eq!(after_len, before_len + 1);
                    assert_eq!(tw.current_index(), before_index);
                }
                Mode::Pausing => assert_eq!(after_len, before_len),
                Mode::Deleting => {
                    assert_eq!(after_len + 1, before_len);
                    if after_len == 0 {
                        assert_eq!(tw.current_index(), (before_index + 1) % 3);
                    }
                }
            }
        }
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(["ab", "c"], instant()).unwrap();
        // "ab": 2 typing, 1 pause, 2 deleting; "c": 1 typing, 1 pause, 1 deleting
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.current_index(), 1);
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.current_index(), 0);
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut tw = Typewriter::new(["héllo→"], instant()).unwrap();
        tw.tick();
        tw.tick();
        assert_eq!(tw.displayed_text(), "hé");
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.displayed_text(), "héllo→");
        assert_eq!(tw.mode(), Mode::Pausing);
    }

    #[test]
    fn test_empty_phrase_skips_ahead() {
        let mut tw = Typewriter::new(["", "x"], instant()).unwrap();
        tw.tick();
        assert_eq!(tw.mode(), Mode::Pausing);
        tw.tick();
        assert_eq!(tw.mode(), Mode::Deleting);
        tw.tick();
        assert_eq!(tw.current_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn test_delay_follows_mode() {
        let timing = Timing::default();
        let mut tw = Typewriter::new(["ab"], timing).unwrap();
        assert_eq!(tw.tick(), timing.type_delay);
        assert_eq!(tw.tick(), timing.pause);
        assert_eq!(tw.tick(), timing.delete_delay);
        assert_eq!(tw.tick(), timing.delete_delay);
        assert_eq!(tw.displayed_text(), "a");
        assert_eq!(tw.tick(), timing.type_delay);
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_stale_tick_ignored_after_reset() {
        let mut tw = Typewriter::new(["abc"], instant()).unwrap();
        let stale = tw.epoch();
        tw.tick();
        tw.tick();
        tw.reset();
        assert_eq!(tw.displayed_text(), "");

        assert_eq!(tw.tick_if_current(stale), None);
        assert_eq!(tw.displayed_text(), "");

        let fresh = tw.epoch();
        assert!(tw.tick_if_current(fresh).is_some());
        assert_eq!(tw.displayed_text(), "a");
    }

    mod tick_loop {
        use std::{cell::Cell, rc::Rc};

        use tokio::{
            task::{spawn_local, JoinHandle, LocalSet},
            time::sleep,
        };

        use super::super::*;

        /// Tokio sleeps standing in for browser timeouts. Counts the timers
        /// that are scheduled and have neither fired nor been cancelled.
        #[derive(Clone, Default)]
        struct TokioTimer {
            live: Rc<Cell<usize>>,
            peak: Rc<Cell<usize>>,
        }

        impl Timer for TokioTimer {
            type Handle = JoinHandle<()>;

            fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) -> Option<Self::Handle> {
                self.live.set(self.live.get() + 1);
                self.peak.set(self.peak.get().max(self.live.get()));
                let live = Rc::clone(&self.live);
                Some(spawn_local(async move {
                    sleep(delay).await;
                    live.set(live.get() - 1);
                    f();
                }))
            }

            fn cancel(&self, handle: Self::Handle) {
                if !handle.is_finished() {
                    handle.abort();
                    self.live.set(self.live.get() - 1);
                }
            }
        }

        /// A typewriter whose owner can be torn down.
        #[derive(Clone)]
        struct Owned(Rc<Cell<Option<Typewriter>>>);

        impl Owned {
            fn new(tw: Typewriter) -> Self {
                Self(Rc::new(Cell::new(Some(tw))))
            }

            fn dispose(&self) {
                self.0.set(None);
            }

            fn text(&self) -> Option<String> {
                self.update_typewriter(|tw| tw.displayed_text().to_string())
            }
        }

        impl TypewriterCell for Owned {
            fn update_typewriter<R>(&self, f: impl FnOnce(&mut Typewriter) -> R) -> Option<R> {
                let mut tw = self.0.take()?;
                let out = f(&mut tw);
                self.0.set(Some(tw));
                Some(out)
            }
        }

        fn ms(n: u64) -> Duration {
            Duration::from_millis(n)
        }

        fn driven(phrases: &[&str]) -> (Owned, TokioTimer, TickLoop<Owned, TokioTimer>) {
            let tw = Typewriter::new(phrases.iter().copied(), Timing::default()).unwrap();
            let state = Owned::new(tw);
            let timer = TokioTimer::default();
            let ticker = TickLoop::new(state.clone(), timer.clone());
            (state, timer, ticker)
        }

        #[tokio::test(start_paused = true)]
        async fn test_ticks_follow_returned_delays() {
            LocalSet::new()
                .run_until(async {
                    let (state, timer, ticker) = driven(&["ab"]);
                    ticker.start();
                    assert!(ticker.is_pending());

                    sleep(ms(81)).await;
                    assert_eq!(state.text().as_deref(), Some("a"));
                    sleep(ms(80)).await;
                    assert_eq!(state.text().as_deref(), Some("ab"));

                    // holds for the pause before deleting
                    sleep(ms(1900)).await;
                    assert_eq!(state.text().as_deref(), Some("ab"));
                    sleep(ms(100)).await;
                    assert_eq!(state.update_typewriter(|tw| tw.mode()), Some(Mode::Deleting));

                    assert_eq!(timer.peak.get(), 1);
                })
                .await;
        }

        #[tokio::test(start_paused = true)]
        async fn test_disposed_owner_stops_ticks() {
            LocalSet::new()
                .run_until(async {
                    let (state, timer, ticker) = driven(&["abc"]);
                    ticker.start();
                    sleep(ms(100)).await;
                    assert_eq!(state.text().as_deref(), Some("a"));

                    state.dispose();
                    sleep(ms(10_000)).await;

                    assert!(!ticker.is_pending());
                    assert_eq!(timer.live.get(), 0);
                    assert_eq!(timer.peak.get(), 1);
                })
                .await;
        }

        #[tokio::test(start_paused = true)]
        async fn test_stop_cancels_pending_tick() {
            LocalSet::new()
                .run_until(async {
                    let (state, timer, ticker) = driven(&["abc"]);
                    ticker.start();
                    sleep(ms(100)).await;

                    ticker.stop();
                    assert!(!ticker.is_pending());
                    assert_eq!(timer.live.get(), 0);

                    sleep(ms(10_000)).await;
                    assert_eq!(state.text().as_deref(), Some("a"));
                })
                .await;
        }

        #[tokio::test(start_paused = true)]
        async fn test_start_twice_keeps_one_timer() {
            LocalSet::new()
                .run_until(async {
                    let (state, timer, ticker) = driven(&["abc"]);
                    ticker.start();
                    ticker.start();
                    assert_eq!(timer.live.get(), 1);
                    assert_eq!(timer.peak.get(), 1);

                    sleep(ms(81)).await;
                    assert_eq!(state.text().as_deref(), Some("a"));
                    assert_eq!(timer.live.get(), 1);
                })
                .await;
        }

        #[tokio::test(start_paused = true)]
        async fn test_restart_rewinds_and_bumps_epoch() {
            LocalSet::new()
                .run_until(async {
                    let (state, timer, ticker) = driven(&["abc", "de"]);
                    ticker.start();
                    sleep(ms(250)).await;
                    assert_eq!(state.text().as_deref(), Some("abc"));

                    ticker.restart();
                    assert_eq!(state.text().as_deref(), Some(""));
                    assert_eq!(state.update_typewriter(|tw| tw.epoch()), Some(1));
                    assert_eq!(timer.live.get(), 1);

                    sleep(ms(81)).await;
                    assert_eq!(state.text().as_deref(), Some("a"));
                    assert_eq!(timer.peak.get(), 1);
                })
                .await;
        }
    }
}
