// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and threshold configuration for a storefront page.

use crate::notify::NotifyConfig;
use crate::time::Duration;

/// Every delay and threshold the page controllers use.
///
/// Built once at page load and shared read-only by the controllers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Notification lifetimes and stacking policy.
    pub notify: NotifyConfig,
    /// Interval between automatic testimonial advances.
    pub autoplay: Duration,
    /// Scroll offset past which the navbar gets its `scrolled` class.
    pub navbar_scroll: f64,
    /// Scroll offset past which the back-to-top button is shown.
    pub back_to_top_scroll: f64,
    /// Total length of a trust-counter animation.
    pub counter_duration: Duration,
    /// Interval between trust-counter frames.
    pub counter_frame: Duration,
    /// How long an inline form message keeps its status class.
    pub form_message: Duration,
    /// Simulated latency of a contact form submission.
    pub simulated_submit: Duration,
    /// Simulated latency of the load-more button.
    pub load_more: Duration,
    /// Intersection ratio at which an element is revealed.
    pub reveal_threshold: f64,
    /// Root margin of the reveal observer, in CSS syntax.
    pub reveal_root_margin: &'static str,
    /// Delay before a shown gallery item fades in.
    pub gallery_show_delay: Duration,
    /// Delay before a hidden gallery item leaves layout.
    pub gallery_hide_delay: Duration,
    /// Opacity of items dimmed by a [`Policy::Dim`](crate::filter::Policy::Dim)
    /// dimension.
    pub dim_opacity: f32,
    /// Scale of gallery items while fading out.
    pub hidden_scale: f32,
}

impl SiteConfig {
    /// Values matching the storefront's stylesheet transitions.
    #[must_use]
    pub const fn storefront() -> Self {
        Self {
            notify: NotifyConfig::storefront(),
            autoplay: Duration(5_000),
            navbar_scroll: 50.0,
            back_to_top_scroll: 300.0,
            counter_duration: Duration(2_000),
            counter_frame: Duration(16),
            form_message: Duration(5_000),
            simulated_submit: Duration(1_000),
            load_more: Duration(1_000),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px",
            gallery_show_delay: Duration(10),
            gallery_hide_delay: Duration(300),
            dim_opacity: 0.3,
            hidden_scale: 0.8,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::storefront()
    }
}
