use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel::constants::*;
use carousel::loader::load_authored;
use carousel::markup;
use carousel::{CarouselConfig, JsonLabels, Page};

/// Auto-advancing content carousel
#[derive(Parser, Debug)]
#[command(name = "carousel")]
struct Cli {
    /// Directory of images, or a JSON rows document
    source: PathBuf,

    /// Autoplay period in milliseconds; zero or negative disables autoplay
    #[arg(short, long, allow_negative_numbers = true)]
    interval: Option<i64>,

    /// JSON file of localized labels
    #[arg(short, long)]
    labels: Option<PathBuf>,

    /// Number of carousels to put on the page
    #[arg(short = 'n', long, default_value_t = 1)]
    instances: usize,

    /// Run on a virtual clock without a window and print the final markup
    #[arg(long)]
    headless: bool,

    /// Virtual time to simulate in headless mode (milliseconds)
    #[arg(long, default_value_t = 10_000)]
    duration_ms: u64,

    /// Viewport width used in headless mode (pixels)
    #[arg(long, default_value_t = RENDER_WIDTH as f32)]
    width: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carousel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.instances == 0 {
        bail!("--instances must be at least 1");
    }

    let authored = load_authored(&cli.source)?;
    let config = match (cli.interval, authored.config) {
        (Some(interval), _) => CarouselConfig::with_interval(interval),
        (None, Some(config)) => config,
        (None, None) => CarouselConfig::default(),
    };
    info!(
        "Loaded {} row(s) from {:?}, interval {} ms",
        authored.rows.len(),
        cli.source,
        config.interval_ms
    );

    let mut page = Page::new().with_viewport_width(cli.width);
    if let Some(labels) = &cli.labels {
        page = page.with_labels(JsonLabels::new(labels));
    }
    for _ in 0..cli.instances {
        let mut rows = authored.rows.clone();
        page.decorate(&mut rows, config);
    }

    if cli.headless || !cfg!(feature = "viewer") {
        if !cli.headless {
            warn!("Built without the viewer feature, running headless");
        }
        run_headless(&mut page, cli.duration_ms);
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    carousel::viewer::run(page);

    Ok(())
}

fn run_headless(page: &mut Page, duration_ms: u64) {
    let mut shown: Vec<usize> = page.carousels().iter().map(|c| c.active_index()).collect();

    while page.now_ms() < duration_ms {
        page.advance(FRAME_TIME_MS.min(duration_ms - page.now_ms()));
        for (carousel, seen) in page.carousels().iter().zip(shown.iter_mut()) {
            if carousel.active_index() != *seen {
                info!(
                    "{} ms: {} shows slide {}",
                    page.now_ms(),
                    carousel.id(),
                    carousel.active_index()
                );
                *seen = carousel.active_index();
            }
        }
    }

    for carousel in page.carousels() {
        println!("{}", markup::render(carousel));
    }
}
