//! Carousel state machine.
//!
//! ```text
//!           start()                 pause()
//!   Idle ───────────▶ AutoPlaying ─────────▶ Paused
//!    ▲                    ▲  │                 │
//!    │ shutdown()         │  └── tick: next ───┘ (frozen)
//!    └────────────────────┴──── resume() ◀─────┘
//! ```
//!
//! The controller owns its [`Scheduler`]. The host reports elapsed time via
//! [`CarouselController::advance`]; every timer that comes due is handled
//! before the next one is looked up, so timer handlers observe each other.

use std::fmt;
use std::time::Duration;

use showcase_model::{Slide, SlideChange};

use super::deck::SlideDeck;
use super::input::{CarouselInput, Direction, InputOutcome, Key, SwipeTracker};
use super::markup::{MountPoint, render_slider};
use crate::config::SliderConfig;
use crate::scheduler::{Fired, Scheduler, TimerHandle, TimerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playback {
    /// No autoplay timer armed.
    Idle,
    AutoPlaying,
    /// Autoplay suspended; index frozen until resumed.
    Paused,
}

type Listener = Box<dyn FnMut(&SlideChange)>;

pub struct CarouselController {
    config: SliderConfig,
    slides: Vec<Slide>,
    deck: SlideDeck,
    active: usize,
    playback: Playback,
    scheduler: Scheduler,
    autoplay_timer: Option<TimerHandle>,
    resume_timer: Option<TimerHandle>,
    swipe: SwipeTracker,
    listeners: Vec<Listener>,
    events: Vec<SlideChange>,
    shut_down: bool,
}

impl fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("active", &self.active)
            .field("total", &self.slides.len())
            .field("playback", &self.playback)
            .field("autoplay_timer", &self.autoplay_timer)
            .field("resume_timer", &self.resume_timer)
            .field("listeners", &self.listeners.len())
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

impl CarouselController {
    /// Build a controller showing the first slide, without starting
    /// autoplay. `None` when there is nothing to show.
    pub fn new(config: SliderConfig, slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            tracing::warn!("carousel has no slides; not initialising");
            return None;
        }
        let mut deck = SlideDeck::new(slides.len(), config.show_progress_bar);
        deck.activate(0);
        let swipe = SwipeTracker::new(config.touch_threshold);
        Some(Self {
            config,
            slides,
            deck,
            active: 0,
            playback: Playback::Idle,
            scheduler: Scheduler::new(),
            autoplay_timer: None,
            resume_timer: None,
            swipe,
            listeners: Vec::new(),
            events: Vec::new(),
            shut_down: false,
        })
    }

    /// Page-load initialisation: inject markup into `mount`, show the first
    /// slide and start autoplay when configured. A missing mount point
    /// disables the carousel.
    pub fn mount(
        mount: Option<&mut dyn MountPoint>,
        config: SliderConfig,
        slides: Vec<Slide>,
    ) -> Option<Self> {
        let Some(mount) = mount else {
            tracing::warn!("slider mount point not found; carousel disabled");
            return None;
        };
        let mut controller = Self::new(config, slides)?;
        mount.inject(render_slider(&controller.slides, &controller.config));
        controller.show(0);
        if controller.config.autoplay {
            controller.start();
        }
        tracing::debug!(
            total = controller.slides.len(),
            autoplay = controller.config.autoplay,
            "carousel mounted"
        );
        Some(controller)
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn current_slide(&self) -> usize {
        self.active
    }

    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_paused(&self) -> bool {
        self.playback == Playback::Paused
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Number of timers currently armed (autoplay plus interaction resume).
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Time until the next autoplay advance, when armed.
    pub fn next_advance_in(&self) -> Option<Duration> {
        self.autoplay_timer
            .as_ref()
            .and_then(|h| self.scheduler.remaining(h))
    }

    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Register a listener for slide changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&SlideChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Changes emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<SlideChange> {
        std::mem::take(&mut self.events)
    }

    pub fn next(&mut self) {
        self.navigate(Direction::Next);
    }

    pub fn prev(&mut self) {
        self.navigate(Direction::Previous);
    }

    /// Step one slide. Wraps when `infinite`; otherwise a step past either
    /// end does nothing at all (no event, countdown untouched).
    pub fn navigate(&mut self, direction: Direction) {
        let target = self.active as i64 + direction.offset();
        if !self.config.infinite && self.normalize(target) == self.active {
            tracing::trace!(?direction, index = self.active, "at boundary");
            return;
        }
        self.jump(target);
    }

    /// Show slide `index`, wrapping or clamping out-of-range values. Always
    /// emits a change. Restarts the autoplay countdown when playing.
    pub fn go_to(&mut self, index: usize) {
        self.jump(i64::try_from(index).unwrap_or(i64::MAX));
    }

    /// Idle/Paused → AutoPlaying.
    pub fn start(&mut self) {
        if self.shut_down {
            return;
        }
        self.playback = Playback::AutoPlaying;
        self.arm_autoplay();
        tracing::debug!(interval = ?self.config.interval, "autoplay started");
    }

    /// AutoPlaying → Paused. Cancels the autoplay timer.
    pub fn pause(&mut self) {
        if self.playback != Playback::AutoPlaying {
            return;
        }
        self.cancel_autoplay();
        self.playback = Playback::Paused;
        self.deck.freeze_progress();
        tracing::debug!(index = self.active, "autoplay paused");
    }

    /// Paused → AutoPlaying with a fresh countdown.
    pub fn resume(&mut self) {
        if self.playback != Playback::Paused || self.shut_down {
            return;
        }
        self.playback = Playback::AutoPlaying;
        self.arm_autoplay();
        tracing::debug!(index = self.active, "autoplay resumed");
    }

    pub fn toggle_pause(&mut self) {
        match self.playback {
            Playback::AutoPlaying => self.pause(),
            Playback::Paused => self.resume(),
            Playback::Idle => {}
        }
    }

    /// Page unload. Cancels every outstanding timer; the controller stays
    /// readable but never fires again.
    pub fn shutdown(&mut self) {
        self.cancel_autoplay();
        if let Some(handle) = self.resume_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.scheduler.clear();
        self.playback = Playback::Idle;
        self.shut_down = true;
        tracing::debug!("carousel shut down");
    }

    /// Report that the background image of `index` failed to load.
    pub fn image_failed(&mut self, index: usize) {
        if !self.deck.hide_background(index) {
            tracing::debug!(index, "image failure for unknown slide");
        }
    }

    /// Let `elapsed` pass, firing every timer that comes due in order.
    /// Several autoplay periods passing at once move the deck by that many
    /// slides and emit a single change.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.shut_down {
            return;
        }
        let deadline = self.scheduler.now().saturating_add(elapsed);
        while let Some(fired) = self.scheduler.next_due(deadline) {
            self.on_timer(fired);
        }
        self.scheduler.settle(deadline);
    }

    pub fn handle_input(&mut self, input: CarouselInput) -> InputOutcome {
        if self.shut_down {
            return InputOutcome::default();
        }
        match input {
            CarouselInput::PrevClicked => {
                self.prev();
                self.after_interaction();
                navigated()
            }
            CarouselInput::NextClicked => {
                self.next();
                self.after_interaction();
                navigated()
            }
            CarouselInput::IndicatorClicked(index) => {
                self.go_to(index);
                self.after_interaction();
                navigated()
            }
            CarouselInput::TouchStart { x } => {
                self.swipe.begin(x);
                InputOutcome::default()
            }
            CarouselInput::TouchEnd { x } => match self.swipe.finish(x) {
                Some(direction) => {
                    self.navigate(direction);
                    navigated()
                }
                None => InputOutcome::default(),
            },
            CarouselInput::Key(key) => self.handle_key(key),
            CarouselInput::PointerEnter if self.config.pause_on_hover => {
                self.pause();
                InputOutcome::default()
            }
            CarouselInput::PointerLeave if self.config.pause_on_hover => {
                self.resume();
                InputOutcome::default()
            }
            CarouselInput::PointerEnter | CarouselInput::PointerLeave => {
                InputOutcome::default()
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> InputOutcome {
        if !self.config.keyboard_navigation {
            return InputOutcome::default();
        }
        match key {
            Key::ArrowRight => {
                self.next();
                InputOutcome {
                    prevent_default: true,
                    navigated: true,
                }
            }
            Key::ArrowLeft => {
                self.prev();
                InputOutcome {
                    prevent_default: true,
                    navigated: true,
                }
            }
            Key::Space => {
                self.toggle_pause();
                InputOutcome {
                    prevent_default: true,
                    navigated: false,
                }
            }
            Key::Other => InputOutcome::default(),
        }
    }

    /// Clicks on arrows and indicators pause autoplay and schedule a single
    /// resume two intervals later. A later click replaces the pending resume.
    fn after_interaction(&mut self) {
        if !self.config.pause_on_interaction {
            return;
        }
        self.pause();
        if !self.config.autoplay {
            return;
        }
        if let Some(handle) = self.resume_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.resume_timer = Some(self.scheduler.schedule_once(
            TimerKind::InteractionResume,
            self.config.interaction_resume_delay(),
        ));
    }

    fn on_timer(&mut self, fired: Fired) {
        match fired.kind {
            TimerKind::Autoplay => {
                if self.playback != Playback::AutoPlaying {
                    return;
                }
                let len = self.slides.len() as u128;
                let target = self.active as u128 + u128::from(fired.repeats);
                let index = if self.config.infinite {
                    (target % len) as usize
                } else if self.active + 1 == self.slides.len() {
                    return;
                } else {
                    target.min(len - 1) as usize
                };
                // Repeating timer keeps its cadence; no re-arm here.
                self.show(index);
                self.deck.run_progress(self.config.interval);
            }
            TimerKind::InteractionResume => {
                if self.resume_timer.as_ref().map(|h| h.id()) == Some(fired.id) {
                    self.resume_timer = None;
                }
                self.resume();
            }
        }
    }

    fn jump(&mut self, target: i64) {
        let index = self.normalize(target);
        self.show(index);
        if self.playback == Playback::AutoPlaying {
            self.arm_autoplay();
        }
    }

    fn normalize(&self, target: i64) -> usize {
        let len = self.slides.len() as i64;
        let index = if self.config.infinite {
            target.rem_euclid(len)
        } else {
            target.clamp(0, len - 1)
        };
        index as usize
    }

    fn show(&mut self, index: usize) {
        let previous = self.active;
        self.active = index;
        self.deck.activate(index);

        let change = SlideChange {
            current: index,
            total: self.slides.len(),
        };
        tracing::debug!(from = previous, to = index, "slide changed");
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
        self.events.push(change);
    }

    fn arm_autoplay(&mut self) {
        self.cancel_autoplay();
        self.autoplay_timer = Some(
            self.scheduler
                .schedule_repeating(TimerKind::Autoplay, self.config.interval),
        );
        self.deck.run_progress(self.config.interval);
    }

    fn cancel_autoplay(&mut self) {
        if let Some(handle) = self.autoplay_timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

fn navigated() -> InputOutcome {
    InputOutcome {
        prevent_default: false,
        navigated: true,
    }
}
