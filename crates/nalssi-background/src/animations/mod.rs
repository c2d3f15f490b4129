//! Time-driven animation channels and the procedural particle field.

pub mod channel;
pub mod driver;
pub mod easing;
pub mod particles;
