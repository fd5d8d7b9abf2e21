mod app;
mod core;
mod pipeline;
mod queue;

use std::process::ExitCode;

fn main() -> ExitCode {
    app::startup::startup()
}
