use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the `App` trait.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    /// Creates a new Tui.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the application until `app.should_exit()` returns true.
    ///
    /// - `TuiEvent::Render`: calls `app.draw()`
    /// - `TuiEvent::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&event);
                    }
                }
            }
            Ok(())
        })
    }
}
