use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Tick,
    Resize,
    Interrupt,
    /// The terminal input stream failed or ended; no more key or resize
    /// events will arrive.
    InputClosed,
}

/// How the pause before taking over the screen ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupOutcome {
    Proceed,
    Interrupted,
}

/// Merges the refresh cadence, terminal events and SIGINT into one stream.
///
/// Producers are attached separately: the SIGINT listener goes up first so an
/// interrupt is caught from the very first line of output, while terminal
/// input and ticks only start once the dashboard owns the screen.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    tasks: Vec<JoinHandle<()>>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        Self {
            tx,
            rx,
            tasks: Vec::new(),
        }
    }

    /// Extra producer handle, used to inject events.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Forwards every SIGINT as `Event::Interrupt`. The OS handler is installed
    /// when the task is first polled, so yield once after calling this.
    pub fn listen_for_interrupts(&mut self) {
        let tx = self.tx.clone();
        self.tasks.push(tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                if tx.send(Event::Interrupt).is_err() {
                    break;
                }
            }
        }));
    }

    /// Starts the tick interval and the terminal event reader.
    pub fn start(&mut self, tick_rate: Duration) {
        let tx = self.tx.clone();
        self.tasks.push(tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);
            // A slow tick pushes the next one back instead of queueing a burst.
            tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        let mapped = match maybe_event {
                            Some(Ok(CrosstermEvent::Key(key))) if is_interrupt_key(&key) => {
                                Some(Event::Interrupt)
                            }
                            Some(Ok(CrosstermEvent::Resize(_, _))) => Some(Event::Resize),
                            Some(Ok(_)) => None,
                            Some(Err(_)) | None => {
                                let _ = tx.send(Event::InputClosed);
                                break;
                            }
                        };
                        if let Some(e) = mapped
                            && tx.send(e).is_err()
                        {
                            break;
                        }
                    }
                    _ = tick_interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        }));
    }

    /// The handler keeps its own sender, so this only yields `None` if the
    /// channel is closed from the receiving side.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Waits out `pause` unless an interrupt arrives first. Anything else
    /// received meanwhile is dropped.
    pub async fn startup_pause(&mut self, pause: Duration) -> StartupOutcome {
        let sleep = tokio::time::sleep(pause);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => return StartupOutcome::Proceed,
                event = self.rx.recv() => match event {
                    Some(Event::Interrupt) => return StartupOutcome::Interrupted,
                    Some(_) => {}
                    None => return StartupOutcome::Proceed,
                },
            }
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Raw mode turns Ctrl+C into a key press instead of SIGINT.
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_is_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt_key(&key));
    }

    #[test]
    fn plain_keys_are_ignored() {
        assert!(!is_interrupt_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_interrupt_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!is_interrupt_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    }

    #[test]
    fn key_release_is_not_interrupt() {
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        key.kind = KeyEventKind::Release;
        assert!(!is_interrupt_key(&key));
    }

    #[tokio::test]
    async fn interrupt_cuts_startup_pause_short() {
        let mut events = EventHandler::new();
        events.sender().send(Event::Interrupt).unwrap();

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            events.startup_pause(Duration::from_secs(60)),
        )
        .await
        .expect("pause should end on the interrupt, not the timer");
        assert_eq!(outcome, StartupOutcome::Interrupted);
    }

    #[tokio::test]
    async fn interrupt_arriving_mid_pause_is_seen() {
        let mut events = EventHandler::new();
        let tx = events.sender();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            tx.send(Event::Interrupt).unwrap();
        });

        let outcome = events.startup_pause(Duration::from_secs(30)).await;
        assert_eq!(outcome, StartupOutcome::Interrupted);
    }

    #[tokio::test]
    async fn pause_without_interrupt_proceeds() {
        let mut events = EventHandler::new();
        events.sender().send(Event::Tick).unwrap();
        events.sender().send(Event::Resize).unwrap();

        let outcome = events.startup_pause(Duration::from_millis(10)).await;
        assert_eq!(outcome, StartupOutcome::Proceed);
    }
}
