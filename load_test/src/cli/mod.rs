// Command line interface

mod args;

pub use args::{Cli, ClientArgs, Mode, ServerArgs};
