pub mod file;
pub mod string;

pub use file::file_get;
pub use string::strip;
