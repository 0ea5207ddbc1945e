//! Cosmetic delays for UI transitions (toast hide, modal close, redirects).

use std::time::Duration;

/// Run `f` once after `delay`. Outside the browser `f` is dropped unrun.
pub fn after<F>(delay: Duration, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}
