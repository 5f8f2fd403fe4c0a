//! A minimal reader for INI-format configuration files
//!
//! ```no_run
//! use inireader::IniReader;
//!
//! # fn main() -> inireader::Result<()> {
//! let reader = IniReader::from_file("./conf.ini")?;
//! let server = reader.get("server")?;
//!
//! let ip = server.get("ip").to_string()?;
//! let port = server.get("port").to_int()?;
//! let timeout = server.get("timeout").to_float_or(50.0)?;
//! # let _ = (ip, port, timeout);
//! # Ok(())
//! # }
//! ```
pub mod ini;
pub mod utils;

// Re-export the main reader types for easier access
pub use ini::{IniError, IniErrorKind, IniReader, Lookup, Result, Section, Value};
