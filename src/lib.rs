//! Linked slider groups with fixed-total value redistribution.
//!
//! A *linked group* is a set of sliders whose values are constrained to sum
//! to a configured total. When one member changes — by user drag or by a
//! programmatic write — the remaining members absorb the difference so the
//! group settles back on the total, according to a pluggable policy:
//!
//! - **Next / Prev**: a single neighbor in scan order absorbs the whole
//!   delta, with any clamped remainder carried to the member after it.
//! - **First / Last**: the scan starts at a fixed end of the group.
//! - **All**: the delta is split evenly across all other members, with the
//!   last-scanned member absorbing the rounding remainder so the sum stays
//!   exact.
//!
//! The crate owns only the redistribution policy. Rendering, drag handling,
//! and bounds enforcement belong to the slider widget, which is reached
//! through the [`slider::Slider`] capability trait — any widget (or test
//! double) that can report and accept a value, expose its bounds, and emit
//! value-changed notifications can join a group.
//!
//! # Architecture
//!
//! [`link::LinkedSliders`] is the manager: it holds the global defaults and
//! the registry of attached groups, and exposes the attach / reconfigure /
//! detach surface. Each group keeps a per-group re-entrancy guard so the
//! writes a redistribution pass performs never trigger a nested pass, while
//! independent groups stay free to redistribute within the same call stack.
//!
//! The model is single-threaded and synchronous: all work happens inside the
//! value-changed notification, on whatever execution context the surrounding
//! UI provides.

pub mod link;
pub mod slider;
