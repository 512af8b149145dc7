pub mod data;
pub mod flags;
pub mod image;
pub mod list;

pub use data::DataCommand;
pub use flags::FlagsCommand;
pub use image::ImageCommand;
pub use list::ListCommand;
