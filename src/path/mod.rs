mod resolver;

pub use resolver::{is_executable, resolve_command, Denial, Resolution};
