//! Orchard storefront demo binary
//!
//! Headless driver for the storefront screens: seeds the gallery from the
//! product catalog, plays a scripted drag / long-press session against the
//! gesture recognizer, and logs the transforms the render boundary would
//! hand to a backend. Useful for eyeballing the stack math and for profiling
//! without a display.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use orchard_shell::catalog::Catalog;
use orchard_shell::config::ShellConfig;
use orchard_shell::gallery::{Gallery, GalleryAction};
use orchard_shell::order::{DetailScreen, OrderSequence};
use orchard_shell::primitives::{lerp, SpringValue, Vec2};
use tracing::{debug, info};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "orchard")]
#[command(about = "Orchard mobile storefront demo", long_about = None)]
struct Args {
    /// Path to orchard.toml (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the product catalog
    #[arg(short, long, default_value = "config/products.json")]
    products: PathBuf,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Log panics before crashing
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        if let Ok(home) = std::env::var("HOME") {
            let crash_log = format!("{}/.local/state/orchard/crash.log", home);
            if let Ok(mut f) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log)
            {
                use std::io::Write;
                let _ = writeln!(f, "[{}] PANIC: {}", chrono::Local::now(), panic_info);
            }
        }
    }));

    // Log directory (~/.local/state/orchard or /tmp/orchard)
    let log_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join("orchard");

    std::fs::create_dir_all(&log_dir).ok();

    let args = Args::parse();

    let file_appender = rolling::daily(&log_dir, "orchard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = if args.debug {
        "debug,orchard_shell=debug"
    } else {
        "warn,orchard_shell=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    info!(log_path = %log_dir.display(), "Orchard storefront starting");

    let config = ShellConfig::load_or_default(args.config.as_deref())
        .context("loading shell configuration")?;
    let catalog = Catalog::load(&args.products).context("loading product catalog")?;

    let mut gallery = Gallery::new(
        catalog.gallery_images(),
        config.gallery,
        config.gestures.to_config(),
    );
    let mut orders = OrderSequence::default();

    info!(cards = gallery.stack().len(), "gallery seeded from catalog");
    log_render_pass(&gallery);

    // Scripted session: drag the front card around and let go
    let start = Vec2::new(180.0, 400.0);
    let end = Vec2::new(320.0, 250.0);
    gallery.touch_down(start);
    for frame in 1..=30 {
        let t = frame as f64 / 30.0;
        let pos = Vec2::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t));
        gallery.touch_motion(pos);
    }
    let dragged = gallery.transform_at(0).offset;
    info!(x = dragged.x, y = dragged.y, "front card mid-drag");
    gallery.touch_up();

    settle_front_card(&gallery, dragged);

    // Long-press through a full cycle of the deck
    let presses = gallery.stack().len();
    let hold = config.gestures.to_config().long_press_duration + Duration::from_millis(50);
    for _ in 0..presses {
        gallery.touch_down(start);
        std::thread::sleep(hold);
        gallery.touch_up();
        log_render_pass(&gallery);
    }
    info!(front = %gallery.stack().front(), "deck back to original order");

    // Tap opens the front product's detail screen, bump quantity, order
    gallery.touch_down(start);
    if gallery.touch_up() == Some(GalleryAction::FrontCardTapped) {
        let product = catalog
            .by_image(gallery.stack().front())
            .context("front card image missing from catalog")?;
        let mut detail = DetailScreen::new(product.clone());
        detail.increment_quantity();
        detail.increment_quantity();
        let order = detail.place_order(&mut orders);
        info!(
            order_id = order.id,
            product = %order.product.name,
            total = order.total_price(),
            "demo order placed"
        );
    }

    info!("demo session complete");
    Ok(())
}

/// Play the front card's release animation out headlessly, sampling the
/// spring the renderer would use
fn settle_front_card(gallery: &Gallery, from: Vec2) {
    let spring = gallery.transform_at(0).spring;
    let mut x = SpringValue::new(from.x, spring);
    let mut y = SpringValue::new(from.y, spring);
    x.set_target(0.0);
    y.set_target(0.0);

    let mut frames = 0u32;
    while (x.is_animating() || y.is_animating()) && frames < 600 {
        x.update(1.0 / 60.0);
        y.update(1.0 / 60.0);
        frames += 1;
    }
    info!(frames, "front card settled back to center");
}

fn log_render_pass(gallery: &Gallery) {
    for card in gallery.render_cards() {
        debug!(
            image = card.image,
            depth = card.depth,
            x = card.transform.offset.x,
            y = card.transform.offset.y,
            scale = card.transform.scale,
            rotation = card.transform.rotation,
            response = card.transform.spring.response,
            "card transform"
        );
    }
}
