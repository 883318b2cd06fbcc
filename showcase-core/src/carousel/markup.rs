//! HTML injected into the slider mount point.

use std::fmt::Write as _;

use showcase_model::Slide;

use crate::config::SliderConfig;

/// Host element the slider renders into.
pub trait MountPoint {
    fn inject(&mut self, markup: String);
}

impl MountPoint for String {
    fn inject(&mut self, markup: String) {
        *self = markup;
    }
}

pub fn render_slider(slides: &[Slide], config: &SliderConfig) -> String {
    let mut html = String::with_capacity(slides.len() * 512);
    html.push_str(
        r#"<section class="hero-slider" aria-label="Presentation carousel"><div class="slider-container">"#,
    );

    for slide in slides {
        let title = escape(&slide.title);
        let _ = write!(
            html,
            r#"<div class="slide" data-slide-id="{id}" aria-hidden="true"><img class="slide__bg" src="{bg}" alt="Background {title}" loading="lazy"><div class="slide__overlay"></div><div class="slide__content"><div class="slide__inner"><div class="slide__header"><h2 class="slide__title">{title}</h2><p class="slide__description">{desc}</p></div><div class="slide__button-container"><a href="{href}" class="slide__button">{label}</a></div></div></div></div>"#,
            id = slide.id,
            bg = escape(&slide.background_image),
            title = title,
            desc = escape(&slide.description),
            href = escape(&slide.cta_target),
            label = escape(&slide.cta_label),
        );
    }

    html.push_str(
        r#"<button class="slider-arrow slider-arrow--prev" aria-label="Previous slide">&larr;</button><button class="slider-arrow slider-arrow--next" aria-label="Next slide">&rarr;</button><div class="slider-indicators" aria-label="Slide indicators">"#,
    );
    for index in 0..slides.len() {
        let _ = write!(
            html,
            r#"<button class="slider-indicator" data-slide="{index}" aria-label="Go to slide {n}"></button>"#,
            n = index + 1,
        );
    }
    html.push_str("</div>");

    if config.show_progress_bar {
        html.push_str(
            r#"<div class="slider-progress" aria-hidden="true"><div class="slider-progress__bar"></div></div>"#,
        );
    }

    html.push_str("</div></section>");
    html
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
