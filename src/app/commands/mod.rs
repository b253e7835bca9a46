pub mod browse;
pub mod search;
