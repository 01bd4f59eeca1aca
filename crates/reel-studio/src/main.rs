mod args;

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use reel_engine::anim::{AnimatedView, FrameStore, PlaybackConfig};
use reel_engine::coords::Size;
use reel_engine::logging::{LoggingConfig, init_logging};
use reel_engine::time::RefreshClock;

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let target = match (args.width, args.height) {
        (Some(w), Some(h)) => Some(Size::new(w, h)),
        _ => None,
    };

    let store = FrameStore::decode(&bytes, target)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;
    let store = Arc::new(store);

    print_frame_table(&args.input, &store);

    if let Some(dir) = &args.dump {
        dump_frames(&store, dir)?;
    }

    if args.info {
        return Ok(());
    }

    play(&args, store);
    Ok(())
}

fn print_frame_table(path: &Path, store: &FrameStore) {
    let size = store.logical_size();
    println!();
    println!("  {}", path.display());
    println!(
        "  {} frames  ·  {:.3}s total  ·  {}x{}  ·  {}",
        store.frame_count(),
        store.total_duration(),
        size.width,
        size.height,
        if store.is_animated() { "animated" } else { "static" },
    );
    println!();
    for (index, frame) in store.iter().enumerate() {
        println!("    #{index:<4} {:>8.3}s", frame.duration());
    }
    println!();
}

fn dump_frames(store: &FrameStore, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    for (index, frame) in store.iter().enumerate() {
        let path = dir.join(format!("frame_{index:04}.png"));
        frame
            .image()
            .as_image()
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    log::info!("wrote {} frames to {}", store.frame_count(), dir.display());
    Ok(())
}

/// Drives one view from a paced refresh clock for `args.seconds`.
fn play(args: &Args, store: Arc<FrameStore>) {
    let redraws = Rc::new(Cell::new(0u64));
    let sink = {
        let redraws = Rc::clone(&redraws);
        move || redraws.set(redraws.get() + 1)
    };

    let config = PlaybackConfig {
        max_time_step: args.max_step,
    };
    let mut view = AnimatedView::with_config(store, sink, config);
    view.start_animating();

    if !view.is_animating() {
        println!("  nothing to play: image is not animated");
        return;
    }

    // Let the playback clamp, not the refresh clamp, bound long stalls.
    let max_step = view.clock().config().max_time_step;
    let mut clock = RefreshClock::with_clamps(
        RefreshClock::from_hz(args.fps).interval(),
        Duration::ZERO,
        Duration::try_from_secs_f32(max_step.max(0.25)).unwrap_or(Duration::MAX),
    );

    let run_for = Duration::try_from_secs_f32(args.seconds).unwrap_or(Duration::ZERO);
    let started = Instant::now();
    let mut refreshes = 0u64;

    clock.reset();
    while started.elapsed() < run_for {
        std::thread::sleep(clock.remaining());
        let tick = clock.tick();
        refreshes += 1;

        if view.on_refresh(&tick) {
            log::debug!("refresh {:>6}: frame {}", tick.index, view.current_index());
        }
    }

    println!(
        "  played {:.2}s  ·  {} refreshes  ·  {} redraws  ·  ended on frame {}",
        started.elapsed().as_secs_f32(),
        refreshes,
        redraws.get(),
        view.current_index(),
    );
}
