// std imports
use std::io::Write;

/// Destination of the report lines.
pub type OutputStream = Box<dyn Write + Send + Sync>;
