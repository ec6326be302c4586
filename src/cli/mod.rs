mod args;
mod console;

pub use args::{CliArgs, DEFAULT_REQUEST};
pub use console::{ConsoleReporter, render_event, render_outcome};
