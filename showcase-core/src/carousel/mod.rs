//! Hero carousel: autoplay state machine, input decoding and view state.

pub mod controller;
pub mod deck;
pub mod input;
pub mod markup;

pub use controller::{CarouselController, Playback};
pub use deck::{ProgressBar, ProgressTransition, SlideDeck, SlideView};
pub use input::{CarouselInput, Direction, InputOutcome, Key, SwipeTracker};
pub use markup::{MountPoint, render_slider};
