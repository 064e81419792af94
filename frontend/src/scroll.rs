use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Duration of an animated section scroll.
pub const SCROLL_DURATION_MS: f64 = 1_200.0;

/// Scroll offset past which the navigation bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

thread_local! {
    // Bumped on every scroll request; a running animation stops once it is stale.
    static SCROLL_GENERATION: Cell<u64> = Cell::new(0);
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Nav style for a scroll reading that may be unavailable.
pub fn nav_scrolled(scroll_y: Option<f64>) -> bool {
    scroll_y.map_or(false, is_scrolled)
}

/// Exponential ease-out over `t` in `[0, 1]`, clamped at 1.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Scroll position `elapsed_ms` into an animation from `start` to `target`.
pub fn scroll_offset(start: f64, target: f64, elapsed_ms: f64) -> f64 {
    if elapsed_ms >= SCROLL_DURATION_MS {
        return target;
    }
    let progress = (elapsed_ms / SCROLL_DURATION_MS).clamp(0.0, 1.0);
    start + (target - start) * ease_out_expo(progress)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameStep {
    /// A newer scroll request took over.
    Stop,
    /// Time is up; land on the target and end the loop.
    Finish,
    Continue,
}

fn frame_step(superseded: bool, elapsed_ms: f64) -> FrameStep {
    if superseded {
        FrameStep::Stop
    } else if elapsed_ms >= SCROLL_DURATION_MS {
        FrameStep::Finish
    } else {
        FrameStep::Continue
    }
}

/// Smoothly scrolls the window so the element with `id` sits at the top.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        warn!("No section with id '{}' to scroll to", id);
        return;
    };

    let start = window.scroll_y().unwrap_or(0.0);
    let target = (start + element.get_bounding_client_rect().top()).max(0.0);

    let generation = SCROLL_GENERATION.with(|current| {
        let next = current.get().wrapping_add(1);
        current.set(next);
        next
    });

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = frame.clone();
    let frame_window = window.clone();
    let mut started_at: Option<f64> = None;

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let superseded = SCROLL_GENERATION.with(|current| current.get() != generation);
        let elapsed = now - *started_at.get_or_insert(now);
        let step = frame_step(superseded, elapsed);

        if step != FrameStep::Stop {
            frame_window.scroll_to_with_x_and_y(0.0, scroll_offset(start, target, elapsed));
        }
        if step == FrameStep::Continue {
            let rescheduled = frame
                .borrow()
                .as_ref()
                .map(|callback| {
                    frame_window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .is_ok()
                })
                .unwrap_or(false);
            if rescheduled {
                return;
            }
            frame_window.scroll_to_with_x_and_y(0.0, target);
        }
        // Dropping the closure ends the loop and frees it
        let _ = frame.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>));

    let scheduled = handle
        .borrow()
        .as_ref()
        .map(|callback| window.request_animation_frame(callback.as_ref().unchecked_ref()));
    if !matches!(scheduled, Some(Ok(_))) {
        let _ = handle.borrow_mut().take();
        window.scroll_to_with_x_and_y(0.0, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_starts_at_zero_and_saturates_at_one() {
        assert!(ease_out_expo(0.0).abs() < 0.01);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(2.0), 1.0);
    }

    #[test]
    fn easing_never_decreases() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_out_expo(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn offset_lands_exactly_on_target_when_time_is_up() {
        assert_eq!(scroll_offset(100.0, 900.0, SCROLL_DURATION_MS), 900.0);
        assert_eq!(scroll_offset(900.0, 0.0, SCROLL_DURATION_MS * 3.0), 0.0);
    }

    #[test]
    fn offset_moves_toward_target_in_either_direction() {
        let down = scroll_offset(0.0, 1_000.0, SCROLL_DURATION_MS / 2.0);
        assert!(down > 500.0 && down < 1_000.0);

        let up = scroll_offset(1_000.0, 0.0, SCROLL_DURATION_MS / 2.0);
        assert!(up < 500.0 && up > 0.0);
    }

    #[test]
    fn frame_loop_only_continues_while_current_and_unfinished() {
        assert_eq!(frame_step(false, 0.0), FrameStep::Continue);
        assert_eq!(frame_step(false, SCROLL_DURATION_MS - 1.0), FrameStep::Continue);
        assert_eq!(frame_step(false, SCROLL_DURATION_MS), FrameStep::Finish);
        assert_eq!(frame_step(true, 10.0), FrameStep::Stop);
        assert_eq!(frame_step(true, SCROLL_DURATION_MS * 2.0), FrameStep::Stop);
    }

    #[test]
    fn nav_turns_solid_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(NAV_SCROLL_THRESHOLD));
        assert!(is_scrolled(NAV_SCROLL_THRESHOLD + 1.0));
    }

    #[test]
    fn nav_seeded_mid_page_starts_solid() {
        assert!(nav_scrolled(Some(800.0)));
        assert!(!nav_scrolled(Some(0.0)));
        assert!(!nav_scrolled(None));
    }
}
