mod command;
mod dataset;
mod report;
mod tui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
