use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::input::InputSource;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// A centralized event loop that drives the UI thread.
///
/// Owns the polling cadence and dispatches every event to a handler
/// closure; the handler also runs with `None` once per poll interval so the
/// host can redraw. All window state transitions happen synchronously
/// inside the handler, in event delivery order.
pub struct EventLoop<D> {
    source: D,
    poll_interval: Duration,
}

impl<D: InputSource> EventLoop<D> {
    pub fn new(source: D, poll_interval: Duration) -> Self {
        Self {
            source,
            poll_interval,
        }
    }

    pub fn source(&mut self) -> &mut D {
        &mut self.source
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.source, None)? {
                break;
            }

            if self.source.poll(self.poll_interval)? {
                // Drain the queue so mouse drags don't lag behind rendering.
                loop {
                    let event = self.source.read()?;
                    if let ControlFlow::Quit = handler(&mut self.source, Some(event))? {
                        return Ok(());
                    }
                    if !self.source.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
