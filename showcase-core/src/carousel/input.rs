//! Raw pointer, touch and keyboard input as the carousel understands it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn offset(self) -> i64 {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            " " | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    PrevClicked,
    NextClicked,
    IndicatorClicked(usize),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    Key(Key),
    PointerEnter,
    PointerLeave,
}

/// What the host should do with the original event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    /// Suppress the browser's default handling (scrolling on arrows/space).
    pub prevent_default: bool,
    /// The input resolved to a navigation request.
    pub navigated: bool,
}

/// Turns a touch-start / touch-end pair into at most one swipe.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Travel must strictly exceed the threshold; a
    /// leftward swipe (finger moving towards smaller x) means "next".
    pub fn finish(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        let travel = start - x;
        if travel.abs() <= self.threshold {
            return None;
        }
        Some(if travel > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        })
    }
}
