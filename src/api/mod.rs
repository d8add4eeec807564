pub mod markers;
pub mod viewport;
