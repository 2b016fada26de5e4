pub mod limit;
pub mod page;
