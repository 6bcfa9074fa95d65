//! Linked-group attachment, configuration, and redistribution.
//!
//! The manager ([`LinkedSliders`]) attaches redistribution behavior to a set
//! of sliders, after which every value change on a member triggers one
//! synchronous redistribution pass that brings the group's sum back to the
//! configured total. Groups are reconfigured in place and detached without
//! touching the sliders' raw values.

mod config;
mod controller;
mod engine;
mod manager;
#[cfg(test)]
mod stub;

pub use config::{LinkDefaults, Patch, Policy, SettingsPatch};
pub use manager::{Command, LinkError, LinkedSliders};
