use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dote::engine::{animation_for, RunConfig};
use dote::term::{encode_diff_into, FrameBuffer};
use dote::types::{Dimensions, Mode};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Update, clear, compose and diff-encode, the way the driver does each tick.
#[test]
fn tick_hot_path_is_allocation_free_after_warmup() {
    let dims = Dimensions::new(120, 40);
    for mode in [Mode::Runner, Mode::Meteor, Mode::Tour] {
        let config = RunConfig {
            mode,
            passes: 0,
            seed: 11,
            ..RunConfig::default()
        };
        let mut fb = FrameBuffer::for_terminal(dims, mode.address_mode());
        let mut prev = fb.clone();
        let mut anim = animation_for(&config, fb.width(), fb.height());
        let mut out = Vec::with_capacity(1 << 20);

        let mut tick = 0u64;
        let mut step = |fb: &mut FrameBuffer, prev: &mut FrameBuffer, out: &mut Vec<u8>| {
            anim.update(tick);
            fb.clear(anim.background());
            anim.compose(tick, fb);
            out.clear();
            encode_diff_into(prev, fb, out).unwrap();
            std::mem::swap(prev, fb);
            tick += 1;
        };

        // Warm-up (first-use statics inside the escape encoder).
        for _ in 0..10 {
            step(&mut fb, &mut prev, &mut out);
        }

        let allocs = with_alloc_counting(|| {
            for _ in 0..300 {
                step(&mut fb, &mut prev, &mut out);
            }
        });
        assert_eq!(allocs, 0, "{mode:?}");
    }
}
