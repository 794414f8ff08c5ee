pub mod grow;
pub mod probe;
