//! Scripted carousel sessions.
//!
//! A script is a list of steps separated by commas or whitespace, run in
//! order against a mounted controller on its virtual clock:
//!
//! ```text
//! wait:3s, click-next, wait:6s, hover, key:space, swipe:300:100, goto:4
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use showcase_core::carousel::{
    CarouselController, CarouselInput, InputOutcome, Key, Playback,
};
use showcase_model::SlideChange;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown step `{0}`")]
    UnknownStep(String),

    #[error("step `{step}` needs an argument")]
    MissingArgument { step: String },

    #[error("step `{step}`: {reason}")]
    InvalidArgument { step: String, reason: String },

    #[error("step `{step}`: {source}")]
    InvalidDuration {
        step: String,
        #[source]
        source: humantime::DurationError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Next,
    Prev,
    GoTo(usize),
    Wait(Duration),
    Start,
    Pause,
    Resume,
    ClickNext,
    ClickPrev,
    Indicator(usize),
    Hover,
    Leave,
    Key(Key),
    Swipe { from: f32, to: f32 },
    ImageFailed(usize),
    Shutdown,
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (raw, None),
        };
        let need = || {
            arg.filter(|a| !a.is_empty())
                .ok_or_else(|| ScriptError::MissingArgument {
                    step: raw.to_string(),
                })
        };
        let index = |value: &str| {
            value.parse::<usize>().map_err(|err| ScriptError::InvalidArgument {
                step: raw.to_string(),
                reason: err.to_string(),
            })
        };
        let coordinate = |value: &str| {
            value
                .parse::<f32>()
                .ok()
                .filter(|x| x.is_finite())
                .ok_or_else(|| ScriptError::InvalidArgument {
                    step: raw.to_string(),
                    reason: format!("`{value}` is not a coordinate"),
                })
        };

        let step = match name.to_ascii_lowercase().as_str() {
            "next" => Step::Next,
            "prev" => Step::Prev,
            "goto" => Step::GoTo(index(need()?)?),
            "wait" => {
                let value = need()?;
                Step::Wait(humantime::parse_duration(value).map_err(|source| {
                    ScriptError::InvalidDuration {
                        step: raw.to_string(),
                        source,
                    }
                })?)
            }
            "start" => Step::Start,
            "pause" => Step::Pause,
            "resume" => Step::Resume,
            "click-next" => Step::ClickNext,
            "click-prev" => Step::ClickPrev,
            "indicator" => Step::Indicator(index(need()?)?),
            "hover" => Step::Hover,
            "leave" => Step::Leave,
            "key" => Step::Key(match need()?.to_ascii_lowercase().as_str() {
                "left" | "arrowleft" => Key::ArrowLeft,
                "right" | "arrowright" => Key::ArrowRight,
                "space" => Key::Space,
                _ => Key::Other,
            }),
            "swipe" => {
                let value = need()?;
                let (from, to) = value.split_once(':').ok_or_else(|| {
                    ScriptError::InvalidArgument {
                        step: raw.to_string(),
                        reason: "expected swipe:FROM:TO".to_string(),
                    }
                })?;
                Step::Swipe {
                    from: coordinate(from)?,
                    to: coordinate(to)?,
                }
            }
            "image-failed" => Step::ImageFailed(index(need()?)?),
            "shutdown" => Step::Shutdown,
            _ => return Err(ScriptError::UnknownStep(raw.to_string())),
        };
        Ok(step)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => f.write_str("next"),
            Step::Prev => f.write_str("prev"),
            Step::GoTo(i) => write!(f, "goto:{i}"),
            Step::Wait(d) => write!(f, "wait:{}", humantime::format_duration(*d)),
            Step::Start => f.write_str("start"),
            Step::Pause => f.write_str("pause"),
            Step::Resume => f.write_str("resume"),
            Step::ClickNext => f.write_str("click-next"),
            Step::ClickPrev => f.write_str("click-prev"),
            Step::Indicator(i) => write!(f, "indicator:{i}"),
            Step::Hover => f.write_str("hover"),
            Step::Leave => f.write_str("leave"),
            Step::Key(key) => {
                let name = match key {
                    Key::ArrowLeft => "left",
                    Key::ArrowRight => "right",
                    Key::Space => "space",
                    Key::Other => "other",
                };
                write!(f, "key:{name}")
            }
            Step::Swipe { from, to } => write!(f, "swipe:{from}:{to}"),
            Step::ImageFailed(i) => write!(f, "image-failed:{i}"),
            Step::Shutdown => f.write_str("shutdown"),
        }
    }
}

pub fn parse_script(raw: &str) -> Result<Vec<Step>, ScriptError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// What one step did to the carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Virtual clock after the step, in milliseconds.
    pub at_ms: u64,
    pub step: String,
    pub changes: Vec<SlideChange>,
    pub current: usize,
    pub playback: &'static str,
    pub prevent_default: bool,
}

pub fn playback_label(playback: Playback) -> &'static str {
    match playback {
        Playback::Idle => "idle",
        Playback::AutoPlaying => "auto-playing",
        Playback::Paused => "paused",
    }
}

pub fn run_script(carousel: &mut CarouselController, steps: &[Step]) -> Vec<StepRecord> {
    steps
        .iter()
        .map(|step| {
            let outcome = apply(carousel, *step);
            tracing::debug!(%step, current = carousel.current_slide(), "step applied");
            StepRecord {
                at_ms: u64::try_from(carousel.elapsed().as_millis())
                    .unwrap_or(u64::MAX),
                step: step.to_string(),
                changes: carousel.drain_events(),
                current: carousel.current_slide(),
                playback: playback_label(carousel.playback()),
                prevent_default: outcome.prevent_default,
            }
        })
        .collect()
}

fn apply(carousel: &mut CarouselController, step: Step) -> InputOutcome {
    let input = match step {
        Step::ClickNext => CarouselInput::NextClicked,
        Step::ClickPrev => CarouselInput::PrevClicked,
        Step::Indicator(index) => CarouselInput::IndicatorClicked(index),
        Step::Hover => CarouselInput::PointerEnter,
        Step::Leave => CarouselInput::PointerLeave,
        Step::Key(key) => CarouselInput::Key(key),
        Step::Swipe { from, to } => {
            carousel.handle_input(CarouselInput::TouchStart { x: from });
            CarouselInput::TouchEnd { x: to }
        }
        Step::Next => return direct(carousel, CarouselController::next),
        Step::Prev => return direct(carousel, CarouselController::prev),
        Step::Start => return direct(carousel, CarouselController::start),
        Step::Pause => return direct(carousel, CarouselController::pause),
        Step::Resume => return direct(carousel, CarouselController::resume),
        Step::Shutdown => return direct(carousel, CarouselController::shutdown),
        Step::GoTo(index) => {
            carousel.go_to(index);
            return InputOutcome::default();
        }
        Step::Wait(duration) => {
            carousel.advance(duration);
            return InputOutcome::default();
        }
        Step::ImageFailed(index) => {
            carousel.image_failed(index);
            return InputOutcome::default();
        }
    };
    carousel.handle_input(input)
}

fn direct(carousel: &mut CarouselController, op: fn(&mut CarouselController)) -> InputOutcome {
    op(carousel);
    InputOutcome::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::config::{SliderConfig, default_slides};

    fn carousel() -> CarouselController {
        let mut mount = String::new();
        let mut c = CarouselController::mount(
            Some(&mut mount),
            SliderConfig::default(),
            default_slides(),
        )
        .unwrap();
        c.drain_events();
        c
    }

    #[test]
    fn parses_every_step_kind() {
        let steps = parse_script(
            "next prev goto:3, wait:1500ms start pause resume click-next \
             click-prev indicator:2 hover leave key:space key:q \
             swipe:300:100 image-failed:1 shutdown",
        )
        .unwrap();
        assert_eq!(steps.len(), 17);
        assert_eq!(steps[3], Step::Wait(Duration::from_millis(1500)));
        assert_eq!(steps[13], Step::Key(Key::Other));
        assert_eq!(steps[14], Step::Swipe { from: 300.0, to: 100.0 });
    }

    #[test]
    fn rejects_bad_steps() {
        assert!(matches!(
            parse_script("jump"),
            Err(ScriptError::UnknownStep(s)) if s == "jump"
        ));
        assert!(matches!(
            parse_script("goto"),
            Err(ScriptError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_script("goto:-1"),
            Err(ScriptError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_script("wait:soon"),
            Err(ScriptError::InvalidDuration { .. })
        ));
        assert!(matches!(
            parse_script("swipe:10"),
            Err(ScriptError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn display_round_trips() {
        let steps = parse_script("goto:2 wait:3s key:left swipe:10:90").unwrap();
        let text: Vec<String> = steps.iter().map(Step::to_string).collect();
        assert_eq!(text, vec!["goto:2", "wait:3s", "key:left", "swipe:10:90"]);
    }

    #[test]
    fn records_changes_per_step() {
        let mut c = carousel();
        let steps = parse_script("wait:3s click-next wait:5s wait:1s key:space").unwrap();
        let records = run_script(&mut c, &steps);

        assert_eq!(records[0].at_ms, 3_000);
        assert_eq!(records[0].current, 1);
        assert_eq!(records[0].changes.len(), 1);

        assert_eq!(records[1].current, 2);
        assert_eq!(records[1].playback, "paused");

        assert!(records[2].changes.is_empty());
        assert_eq!(records[3].playback, "auto-playing");

        assert_eq!(records[4].playback, "paused");
        assert!(records[4].prevent_default);
    }
}
