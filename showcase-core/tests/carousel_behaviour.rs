use std::time::Duration;

use showcase_core::carousel::{CarouselController, CarouselInput, Key, Playback};
use showcase_core::config::{SliderConfig, default_slides};

const INTERVAL: Duration = Duration::from_secs(3);

fn mounted(config: SliderConfig) -> CarouselController {
    let mut mount = String::new();
    CarouselController::mount(Some(&mut mount), config, default_slides())
        .expect("carousel should mount")
}

#[test]
fn every_valid_index_is_reachable() {
    let mut carousel = mounted(SliderConfig::default());
    for index in 0..carousel.total_slides() {
        carousel.go_to(index);
        assert_eq!(carousel.current_slide(), index);
    }
}

#[test]
fn out_of_range_requests_stay_in_bounds() {
    for infinite in [true, false] {
        let mut carousel = mounted(SliderConfig {
            infinite,
            ..SliderConfig::default()
        });
        for index in [5, 6, 11, 1_000, usize::MAX] {
            carousel.go_to(index);
            assert!(carousel.current_slide() < carousel.total_slides());
        }
    }
}

#[test]
fn autoplay_pause_resume_timeline() {
    let mut carousel = mounted(SliderConfig::default());
    carousel.drain_events();

    carousel.advance(INTERVAL);
    assert_eq!(carousel.drain_events().len(), 1);

    carousel.pause();
    carousel.advance(INTERVAL * 4);
    assert!(carousel.drain_events().is_empty());

    carousel.resume();
    carousel.advance(Duration::from_millis(10));
    assert!(carousel.drain_events().is_empty(), "resume must not fire immediately");
    carousel.advance(INTERVAL);
    assert_eq!(carousel.drain_events().len(), 1);
    assert_eq!(carousel.current_slide(), 2);
}

#[test]
fn at_most_one_autoplay_timer_is_ever_armed() {
    let mut carousel = mounted(SliderConfig {
        pause_on_interaction: false,
        ..SliderConfig::default()
    });
    for _ in 0..10 {
        carousel.start();
        carousel.next();
        carousel.handle_input(CarouselInput::PointerEnter);
        carousel.handle_input(CarouselInput::PointerLeave);
        carousel.handle_input(CarouselInput::Key(Key::ArrowLeft));
        assert_eq!(carousel.pending_timers(), 1);
    }
    carousel.advance(INTERVAL);
    assert_eq!(carousel.drain_events().last().map(|c| c.current), Some(carousel.current_slide()));
}

#[test]
fn swipes_below_threshold_never_navigate() {
    let mut carousel = mounted(SliderConfig::default());
    carousel.drain_events();
    for travel in [0.0_f32, 10.0, 49.9, 50.0] {
        carousel.handle_input(CarouselInput::TouchStart { x: 500.0 });
        carousel.handle_input(CarouselInput::TouchEnd { x: 500.0 - travel });
        carousel.handle_input(CarouselInput::TouchStart { x: 500.0 });
        carousel.handle_input(CarouselInput::TouchEnd { x: 500.0 + travel });
    }
    assert!(carousel.drain_events().is_empty());

    carousel.handle_input(CarouselInput::TouchStart { x: 500.0 });
    carousel.handle_input(CarouselInput::TouchEnd { x: 449.0 });
    assert_eq!(carousel.drain_events().len(), 1);
    assert_eq!(carousel.current_slide(), 1);

    carousel.handle_input(CarouselInput::TouchStart { x: 500.0 });
    carousel.handle_input(CarouselInput::TouchEnd { x: 551.0 });
    assert_eq!(carousel.drain_events().len(), 1);
    assert_eq!(carousel.current_slide(), 0);
}

#[test]
fn hover_and_interaction_policies_compound() {
    let mut carousel = mounted(SliderConfig::default());
    carousel.handle_input(CarouselInput::PointerEnter);
    carousel.handle_input(CarouselInput::NextClicked);
    assert!(carousel.is_paused());

    // The interaction resume wins even while the pointer is still over the slider.
    carousel.advance(INTERVAL * 2);
    assert_eq!(carousel.playback(), Playback::AutoPlaying);

    carousel.handle_input(CarouselInput::PointerLeave);
    assert_eq!(carousel.playback(), Playback::AutoPlaying);
}

#[test]
fn autoplay_disabled_keeps_carousel_idle() {
    let mut carousel = mounted(SliderConfig {
        autoplay: false,
        ..SliderConfig::default()
    });
    assert_eq!(carousel.playback(), Playback::Idle);
    carousel.handle_input(CarouselInput::NextClicked);
    carousel.handle_input(CarouselInput::PointerLeave);
    carousel.advance(INTERVAL * 10);
    assert_eq!(carousel.current_slide(), 1);
    assert_eq!(carousel.pending_timers(), 0);
}
