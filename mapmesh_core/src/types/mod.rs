mod category;
mod map_data;
mod polygon_file;
mod tags;

pub use category::*;
pub use map_data::*;
pub use polygon_file::*;
pub use tags::*;
