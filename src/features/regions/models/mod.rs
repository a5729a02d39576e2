mod level;
mod region_row;

pub use level::Level;
pub use region_row::RegionRow;
