use crate::error::IndexError;
use std::io;

// Define a base trait for page sources
pub trait Crawler {
    /// Every entry name of the source, unfiltered and in no particular order
    fn list(&self) -> Result<Vec<String>, IndexError>;

    /// Read the raw bytes of one entry
    fn fetch(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Human-readable location, used in log messages
    fn location(&self) -> String;
}
