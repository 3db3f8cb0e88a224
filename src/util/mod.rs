pub mod relative_time;
pub mod unicode;
