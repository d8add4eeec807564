pub mod fetch;
pub mod render;
pub mod severity;
pub mod transform;
