//! Default value functions for serde deserialization.

pub fn resolution() -> usize {
    100
}

pub fn enabled() -> bool {
    true
}
