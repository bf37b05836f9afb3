//! Browser subscriptions behind the page state. Every observer and listener is
//! created through leptos-use, which releases it when the owning view unmounts.

use leptos::{ev, prelude::*};
use leptos_use::{
    core::IntoElementsMaybeSignal, use_event_listener, use_intersection_observer_with_options,
    use_window, use_window_scroll, UseIntersectionObserverOptions,
};

use crate::{
    content::SectionId,
    error::PortfolioError,
    state::{CursorPos, NavState, RevealLatch, ACTIVE_THRESHOLD, REVEAL_THRESHOLD},
};

use super::PageState;

/// Ratios at which sections report back, so the tracker can rank them.
const TRACKING_THRESHOLDS: [f64; 6] = [0.0, 0.2, ACTIVE_THRESHOLD, 0.6, 0.8, 1.0];

/// Latches true once the target has been at least 15% visible.
///
/// The observer disconnects itself after latching. If the target never
/// mounts the flag stays false.
pub fn use_reveal<El, M>(target: El) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let latch = RwSignal::new(RevealLatch::default());

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                latch.maybe_update(|l| l.observe(entry.is_intersecting(), entry.intersection_ratio()));
            }
            if latch.with_untracked(RevealLatch::is_revealed) {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Signal::derive(move || latch.with(RevealLatch::is_revealed))
}

/// Reports how much of a section is visible to the page's section tracker.
pub fn use_section_tracking<El, M>(target: El, id: SectionId)
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let state = expect_context::<PageState>();

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                state.record_visibility(id, entry.is_intersecting(), entry.intersection_ratio());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(TRACKING_THRESHOLDS.to_vec()),
    );
}

/// Feeds the window's scroll offset into the nav state.
///
/// The offset is read inside an effect, which only runs after hydration, so a
/// page restored mid-scroll still hydrates against the server's transparent nav.
pub fn use_nav_scroll(nav: RwSignal<NavState>) {
    let (_, y) = use_window_scroll();
    Effect::new(move |_| {
        let offset = y.get();
        nav.maybe_update(|n| n.on_scroll(offset));
    });
}

pub fn use_cursor() -> Signal<CursorPos> {
    let (cursor, set_cursor) = signal(CursorPos::default());
    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        set_cursor.set(CursorPos {
            x: f64::from(e.client_x()),
            y: f64::from(e.client_y()),
        });
    });
    cursor.into()
}

pub fn scroll_to_section(id: SectionId) -> Result<(), PortfolioError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PortfolioError::NoWindow)?;
    let el = document
        .get_element_by_id(id.anchor())
        .ok_or(PortfolioError::MissingAnchor(id.anchor()))?;

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    log::debug!("scrolling to #{id}");
    Ok(())
}

/// The section named by `location.hash`, if there is a fragment at all.
pub fn fragment_section() -> Result<Option<SectionId>, PortfolioError> {
    let window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
    let hash = window.location().hash().unwrap_or_default();
    if hash.is_empty() {
        return Ok(None);
    }
    SectionId::from_fragment(&hash).map(Some)
}
