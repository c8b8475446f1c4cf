use crossterm::event::{self, Event};

/// Events processed by TUI applications.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The screen is out of date and must be drawn.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(Event),
}

/// Event loop state management.
///
/// There are no ticks: the screen only changes in response to terminal events,
/// so a render is requested after each of them and the loop otherwise blocks.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event.
    ///
    /// Blocks until a crossterm event occurs when nothing is pending.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        self.dirty = true;
        Ok(event::read()?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_render() {
        let mut events = EventLoop::new();
        assert!(events.next().unwrap().is_render());
    }
}
