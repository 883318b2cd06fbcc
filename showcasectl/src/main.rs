use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use showcase_core::{
    Catalog, CarouselController, ShowcaseConfig,
    carousel::render_slider,
    catalog::load_items,
};
use showcase_model::SortMode;
use showcasectl::{
    CatalogReport, format_transcript, parse_script, parse_sort_arg, run_script,
};
use tokio::time::{Instant, MissedTickBehavior};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser)]
#[command(
    name = "showcasectl",
    about = "Drive the showcase carousel and catalog engine from the terminal"
)]
struct Cli {
    /// TOML configuration file; environment overrides still apply
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter a catalog and print what the page would show
    Catalog {
        /// JSON array of catalog items
        #[arg(long)]
        items: PathBuf,
        /// Page address to restore filters from and write them back to
        #[arg(long)]
        url: Option<Url>,
        #[arg(long)]
        search: Option<String>,
        /// Category tag, or "all"
        #[arg(long)]
        category: Option<String>,
        /// Per-category order, e.g. --sort tools=name-asc (repeatable)
        #[arg(long = "sort", value_parser = parse_sort_arg)]
        sort: Vec<(String, SortMode)>,
        /// Reset every filter after applying the others
        #[arg(long)]
        clear: bool,
        #[arg(long)]
        json: bool,
    },
    /// Hero carousel sessions
    Carousel {
        #[command(subcommand)]
        action: CarouselAction,
    },
    /// Print the slider markup injected into the mount point
    Markup,
}

#[derive(Subcommand)]
enum CarouselAction {
    /// Run a scripted session on a virtual clock
    Run {
        /// Steps such as "wait:3s, click-next, hover, key:space, goto:2"
        #[arg(long, default_value = "")]
        script: String,
        #[arg(long)]
        json: bool,
    },
    /// Let the carousel autoplay in real time
    Play {
        /// How long to play, e.g. 10s or 1m
        #[arg(long = "for", value_parser = humantime::parse_duration, default_value = "10s")]
        duration: Duration,
        /// Clock resolution
        #[arg(long, value_parser = humantime::parse_duration, default_value = "100ms")]
        tick: Duration,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ShowcaseConfig::load_with_env(cli.config.as_deref())
        .context("failed to load showcase configuration")?;

    match cli.command {
        Command::Catalog {
            items,
            url,
            search,
            category,
            sort,
            clear,
            json,
        } => {
            let items = load_items(&items)?;
            let mut catalog = Catalog::load(items, config.catalog.clone(), url);
            if let Some(term) = search {
                catalog.set_search_term(&term);
            }
            if let Some(tag) = category {
                catalog.set_category(&tag);
            }
            for (tag, mode) in sort {
                catalog.set_sort(&tag, mode);
            }
            if clear {
                catalog.clear_all();
            }
            let report = CatalogReport::from_catalog(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }
        Command::Carousel { action } => match action {
            CarouselAction::Run { script, json } => {
                let steps = parse_script(&script)?;
                let mut carousel = mount(&config)?;
                carousel.drain_events();
                let records = run_script(&mut carousel, &steps);
                if json {
                    println!("{}", serde_json::to_string_pretty(&records)?);
                } else {
                    println!("start      slide 1/{}", carousel.total_slides());
                    print!(
                        "{}",
                        format_transcript(&records, carousel.total_slides())
                    );
                }
            }
            CarouselAction::Play { duration, tick } => {
                play(mount(&config)?, duration, tick).await?;
            }
        },
        Command::Markup => {
            println!(
                "{}",
                render_slider(&config.slides_or_default(), &config.slider)
            );
        }
    }

    Ok(())
}

fn mount(config: &ShowcaseConfig) -> Result<CarouselController> {
    let mut markup = String::new();
    CarouselController::mount(
        Some(&mut markup),
        config.slider.clone(),
        config.slides_or_default(),
    )
    .context("carousel has no slides to show")
}

async fn play(mut carousel: CarouselController, duration: Duration, tick: Duration) -> Result<()> {
    anyhow::ensure!(!tick.is_zero(), "--tick must be greater than zero");

    let total = carousel.total_slides();
    let titles: Vec<String> =
        carousel.slides().iter().map(|s| s.title.clone()).collect();
    let title = |index: usize| titles.get(index).map(String::as_str).unwrap_or("");

    for change in carousel.drain_events() {
        println!("slide {}/{}  {}", change.current + 1, total, title(change.current));
    }

    let started = Instant::now();
    let mut last = started;
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for ctrl-c")?;
                tracing::info!("interrupted");
                break;
            }
        }
        let now = Instant::now();
        carousel.advance(now - last);
        last = now;
        for change in carousel.drain_events() {
            println!(
                "slide {}/{}  {}",
                change.current + 1,
                total,
                title(change.current)
            );
        }
        if now - started >= duration {
            break;
        }
    }

    carousel.shutdown();
    tracing::debug!(elapsed = ?carousel.elapsed(), "playback finished");
    Ok(())
}
