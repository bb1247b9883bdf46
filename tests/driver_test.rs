//! Main loop scenarios on the headless backend.

use std::time::Duration;

use dote::engine::{animation_for, Driver, ExitReason, HeadlessBackend, RunConfig};
use dote::term::{grid_size, FrameBuffer};
use dote::types::{Dimensions, Direction, Mode};

fn config(mode: Mode, passes: u32) -> RunConfig {
    RunConfig {
        mode,
        passes,
        delay: Duration::from_millis(1),
        seed: 3,
        ..RunConfig::default()
    }
}

fn pass_len(config: &RunConfig, dims: Dimensions) -> u64 {
    let (w, h) = grid_size(dims, config.mode.address_mode());
    animation_for(config, w, h).pass_len() as u64
}

#[test]
fn three_passes_then_exit() {
    let dims = Dimensions::new(50, 20);
    for mode in [Mode::Runner, Mode::Meteor, Mode::Tour] {
        let cfg = config(mode, 3);
        let mut backend = HeadlessBackend::new(dims).without_recording();
        let outcome = Driver::new(cfg).run(&mut backend).unwrap();
        assert_eq!(outcome.reason, ExitReason::PassesComplete, "{mode:?}");
        assert_eq!(outcome.passes, 3);
        assert_eq!(outcome.ticks, 3 * pass_len(&cfg, dims), "{mode:?}");
        assert_eq!(backend.finished(), 1);
    }
}

#[test]
fn reversed_runner_takes_the_same_number_of_ticks() {
    let dims = Dimensions::new(50, 20);
    let cfg = RunConfig {
        direction: Direction::Rightward,
        ..config(Mode::Runner, 1)
    };
    let mut backend = HeadlessBackend::new(dims).without_recording();
    let outcome = Driver::new(cfg).run(&mut backend).unwrap();
    assert_eq!(outcome.ticks, pass_len(&config(Mode::Runner, 1), dims));
}

#[test]
fn zero_passes_runs_until_quit() {
    let mut backend = HeadlessBackend::new(Dimensions::new(30, 12))
        .without_recording()
        .quit_after(1_000);
    let outcome = Driver::new(config(Mode::Runner, 0)).run(&mut backend).unwrap();
    assert_eq!(outcome.reason, ExitReason::QuitKey);
    assert_eq!(outcome.ticks, 1_000);
    assert!(outcome.passes > 3);
}

#[test]
fn zero_passes_runs_until_signal() {
    let mut backend = HeadlessBackend::new(Dimensions::new(30, 12))
        .without_recording()
        .shutdown_after(250);
    let outcome = Driver::new(config(Mode::Meteor, 0)).run(&mut backend).unwrap();
    assert_eq!(outcome.reason, ExitReason::Signal);
    assert_eq!(outcome.ticks, 250);
    assert_eq!(backend.finished(), 1);
}

#[test]
fn zero_delay_never_requests_a_negative_sleep() {
    let cfg = RunConfig {
        delay: Duration::ZERO,
        ..config(Mode::Runner, 1)
    };
    let mut backend = HeadlessBackend::new(Dimensions::new(30, 12)).without_recording();
    let outcome = Driver::new(cfg).run(&mut backend).unwrap();
    assert_eq!(backend.slept(), Duration::ZERO);
    assert_eq!(backend.sleeps() as u64, outcome.ticks);
}

#[test]
fn resize_mid_run_reallocates_and_reclears() {
    let small = Dimensions::new(40, 16);
    let large = Dimensions::new(70, 30);
    for mode in [Mode::Runner, Mode::Meteor, Mode::Tour] {
        let cfg = config(mode, 0);
        let mut backend = HeadlessBackend::new(small)
            .with_sizes([small, large])
            .quit_after(4);
        Driver::new(cfg).run(&mut backend).unwrap();

        let frames = backend.frames();
        assert_eq!(frames.len(), 4);
        let (sw, sh) = grid_size(small, mode.address_mode());
        let (lw, lh) = grid_size(large, mode.address_mode());
        assert_eq!((frames[0].width(), frames[0].height()), (sw, sh));
        for fb in &frames[1..] {
            assert_eq!((fb.width(), fb.height()), (lw, lh), "{mode:?}");
        }

        // The first large frame must match one composed into a brand-new
        // buffer from the same animation state: nothing from the small
        // frame survives.
        let mut anim = animation_for(&cfg, sw, sh);
        anim.update(0);
        anim.resize(lw, lh);
        anim.update(1);
        let mut fresh = FrameBuffer::new(lw, lh, mode.address_mode());
        fresh.clear(anim.background());
        anim.compose(1, &mut fresh);
        assert_eq!(frames[1], fresh, "{mode:?}");
    }
}

#[test]
fn a_full_redraw_follows_every_resize() {
    let small = Dimensions::new(40, 16);
    let large = Dimensions::new(70, 30);
    let mut backend = HeadlessBackend::new(small)
        .with_sizes([small, large])
        .quit_after(4);
    Driver::new(config(Mode::Meteor, 0)).run(&mut backend).unwrap();
    let out = String::from_utf8_lossy(backend.output()).into_owned();
    assert_eq!(out.matches("\x1b[2J").count(), 2);
}
