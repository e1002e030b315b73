//! Terminal event pump.
//!
//! A background thread polls crossterm and forwards key and resize
//! events over a channel, interleaved with regular ticks. Ticks drive
//! the animated scroll, so the tick rate is the animation frame rate.
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Events that can be processed by the application.
#[derive(Debug, Clone, Copy)]
pub enum Event
{
    /// Regular time tick for animations
    Tick,
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event with new dimensions
    Resize(u16, u16),
}

/// Owns the polling thread and the receiving end of the event channel.
pub struct EventHandler
{
    /// Receiver side of the event channel
    event_receiver: mpsc::Receiver<Event>,
    /// Sender used to ask the thread to stop on drop
    shutdown_sender: mpsc::Sender<()>,
    /// Handle joined on drop
    // Option is used to move the handle out of `&mut self` in `drop`
    thread_handle: Option<JoinHandle<()>>,
}

impl EventHandler
{
    /// Spawns the polling thread with the given tick rate.
    ///
    /// # Panics
    ///
    /// The polling thread panics if the terminal cannot be polled.
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self
    {
        let (event_sender, event_receiver) = mpsc::channel();
        let (shutdown_sender, shutdown_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop
            {
                if shutdown_receiver.try_recv().is_ok()
                {
                    break;
                }

                // Wait at most until the next tick is due.
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                if event::poll(timeout).expect("Error polling events")
                {
                    match event::read().expect("Error reading event")
                    {
                        CrosstermEvent::Key(key) =>
                        {
                            // Receiver dropped means the app is gone.
                            if event_sender.send(Event::Key(key)).is_err()
                            {
                                break;
                            }
                        }
                        CrosstermEvent::Resize(width, height) =>
                        {
                            if event_sender
                                .send(Event::Resize(width, height))
                                .is_err()
                            {
                                break;
                            }
                        }
                        // Ignore other event types
                        _ =>
                        {}
                    }
                }

                if last_tick.elapsed() >= tick_rate
                {
                    if event_sender.send(Event::Tick).is_err()
                    {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            event_receiver,
            shutdown_sender,
            thread_handle: Some(handle),
        }
    }

    /// Blocks until the next event arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is disconnected.
    pub fn next(&self) -> Result<Event>
    {
        self.event_receiver
            .recv()
            .context("Event channel disconnected")
    }
}

impl Drop for EventHandler
{
    fn drop(&mut self)
    {
        // Signal shutdown (ignore if already closed)
        let _ = self.shutdown_sender.send(());

        if let Some(handle) = self.thread_handle.take()
        {
            let _ = handle.join();
        }
    }
}
