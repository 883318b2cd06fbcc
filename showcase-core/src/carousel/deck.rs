//! Presentation flags the carousel keeps in sync with its state.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView {
    pub aria_hidden: bool,
    /// Background image failed to load and is hidden.
    pub background_hidden: bool,
}

impl Default for SlideView {
    fn default() -> Self {
        Self {
            aria_hidden: true,
            background_hidden: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTransition {
    None,
    Linear(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    pub width_percent: u8,
    pub transition: ProgressTransition,
}

impl ProgressBar {
    fn empty() -> Self {
        Self {
            width_percent: 0,
            transition: ProgressTransition::None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<SlideView>,
    indicators: Vec<bool>,
    active: Option<usize>,
    progress: Option<ProgressBar>,
}

impl SlideDeck {
    pub fn new(len: usize, with_progress: bool) -> Self {
        Self {
            slides: vec![SlideView::default(); len],
            indicators: vec![false; len],
            active: None,
            progress: with_progress.then(ProgressBar::empty),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&SlideView> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[SlideView] {
        &self.slides
    }

    pub fn indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    pub fn progress(&self) -> Option<ProgressBar> {
        self.progress
    }

    /// Flip visibility from the previously shown slide to `index` and
    /// restart the progress bar from empty.
    pub(crate) fn activate(&mut self, index: usize) {
        if let Some(prev) = self.active.take() {
            self.slides[prev].aria_hidden = true;
            self.indicators[prev] = false;
        }
        self.slides[index].aria_hidden = false;
        self.indicators[index] = true;
        self.active = Some(index);
        if let Some(bar) = self.progress.as_mut() {
            *bar = ProgressBar::empty();
        }
    }

    pub(crate) fn run_progress(&mut self, interval: Duration) {
        if let Some(bar) = self.progress.as_mut() {
            bar.width_percent = 100;
            bar.transition = ProgressTransition::Linear(interval);
        }
    }

    pub(crate) fn freeze_progress(&mut self) {
        if let Some(bar) = self.progress.as_mut() {
            bar.transition = ProgressTransition::None;
        }
    }

    pub(crate) fn hide_background(&mut self, index: usize) -> bool {
        match self.slides.get_mut(index) {
            Some(view) => {
                view.background_hidden = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_slide_is_exposed() {
        let mut deck = SlideDeck::new(3, false);
        assert!(deck.slides().iter().all(|s| s.aria_hidden));

        deck.activate(1);
        deck.activate(2);
        let hidden: Vec<_> = deck.slides().iter().map(|s| s.aria_hidden).collect();
        assert_eq!(hidden, vec![true, true, false]);
        assert!(deck.indicator_active(2));
        assert!(!deck.indicator_active(1));
        assert_eq!(deck.progress(), None);
    }

    #[test]
    fn progress_restarts_on_every_change() {
        let mut deck = SlideDeck::new(2, true);
        deck.activate(0);
        deck.run_progress(Duration::from_secs(3));
        assert_eq!(
            deck.progress(),
            Some(ProgressBar {
                width_percent: 100,
                transition: ProgressTransition::Linear(Duration::from_secs(3)),
            })
        );
        deck.activate(1);
        assert_eq!(deck.progress().map(|p| p.width_percent), Some(0));
    }
}
