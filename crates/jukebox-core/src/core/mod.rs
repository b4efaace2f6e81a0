pub mod error;
pub mod error_help;
pub mod path;
pub mod version;

pub use error::{JukeboxError, JukeboxResult, Missing};
pub use error_help::{format_error_with_help, ErrorHelp};
