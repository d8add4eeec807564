pub mod country;
pub mod feature;
pub mod marker;
