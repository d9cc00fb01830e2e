//! Domain layer: message segmentation and delivery outcomes.

pub mod delivery;
pub mod segments;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
