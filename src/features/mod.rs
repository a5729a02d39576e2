pub mod regions;
pub mod search;
