pub mod error;
pub mod reader;
pub mod section;
pub mod value;

// Re-export the reader types for easier access
pub use error::{IniError, IniErrorKind, ParseFailure, Result};
pub use reader::IniReader;
pub use section::Section;
pub use value::{Lookup, Value};
