pub mod command_runner;

pub use command_runner::{split_command, CommandRunner, OutputMode, SystemCommandRunner};
