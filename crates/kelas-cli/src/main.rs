mod command;
mod content;
mod logging;
mod schema;
mod tui;
mod ui;
mod util;
mod workbook;

fn main() -> anyhow::Result<()> {
    command::run()
}
