pub mod indicators;
pub mod period;
pub mod serde_helpers;
