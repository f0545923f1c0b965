//! Async driver for a screen's state machine.
//!
//! The controller is owned by a single task and driven through `&mut self`.
//! Fetches run as spawned tokio tasks and report back through a channel as
//! `Loaded` messages. A fetch that panics reports an infrastructure failure.
//! Starting a fetch cancels the previous one; the model additionally drops any
//! result from an older generation, so a response that races its cancellation
//! never overwrites newer state.

use std::sync::Arc;

use cinefiller_core::error::DomainError;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::screen::Screen;
use crate::state::{Event, Intent, Message, ScreenModel, ScreenState};

type ScreenMessage<S> = Message<<S as Screen>::Params, <S as Screen>::Data>;

/// Drives one screen instance.
pub struct ScreenController<S: Screen> {
    screen: Arc<S>,
    model: ScreenModel<S::Params, S::Data>,
    sender: mpsc::UnboundedSender<ScreenMessage<S>>,
    receiver: mpsc::UnboundedReceiver<ScreenMessage<S>>,
    in_flight: Option<CancellationToken>,
}

impl<S: Screen> ScreenController<S> {
    /// Creates a controller in the `Loading` state with no parameters.
    #[must_use]
    pub fn new(screen: Arc<S>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            screen,
            model: ScreenModel::new(),
            sender,
            receiver,
            in_flight: None,
        }
    }

    /// The current screen state.
    #[must_use]
    pub fn state(&self) -> &ScreenState<S::Data> {
        self.model.state()
    }

    /// The current fetch generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.model.generation()
    }

    /// Sets the navigation parameters, starting a fetch if they changed.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime and a fetch must be started.
    pub fn navigate(&mut self, params: S::Params) {
        self.dispatch(Message::ParamsChanged(params));
    }

    /// Retries the last fetch if the screen is in the `Failed` state.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime and a fetch must be started.
    pub fn retry(&mut self) {
        self.dispatch(Message::Retry);
    }

    /// Passes a user intent through the screen, returning it for the parent.
    pub fn intent(&mut self, intent: Intent) -> Option<Intent> {
        match self.dispatch(Message::Intent(intent)) {
            Event::Intent(intent) => Some(intent),
            Event::None | Event::Fetch { .. } => None,
        }
    }

    /// Applies a message to the model and performs the effect it requests.
    pub fn dispatch(&mut self, message: ScreenMessage<S>) -> Event<S::Params> {
        let event = self.model.update(message);
        if let Event::Fetch { generation, params } = &event {
            self.spawn_fetch(*generation, params.clone());
        }
        event
    }

    /// Waits for delivered results until the screen leaves `Loading`.
    ///
    /// Returns immediately if no fetch has ever been requested.
    pub async fn settle(&mut self) -> &ScreenState<S::Data> {
        while self.model.state().is_loading() && self.model.params().is_some() {
            let Some(message) = self.receiver.recv().await else {
                break;
            };
            self.dispatch(message);
        }
        self.model.state()
    }

    /// Applies every result delivered so far without waiting. Returns the
    /// number of messages applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.dispatch(message);
            applied += 1;
        }
        applied
    }

    fn spawn_fetch(&mut self, generation: u64, params: S::Params) {
        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.replace(token.clone()) {
            previous.cancel();
        }

        info!(screen = S::NAME, generation, ?params, "dispatching screen fetch");

        let screen = Arc::clone(&self.screen);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let mut load = tokio::spawn(async move { screen.load(&params).await });
            tokio::select! {
                () = token.cancelled() => {
                    load.abort();
                    debug!(screen = S::NAME, generation, "screen fetch cancelled");
                }
                joined = &mut load => {
                    let result = match joined {
                        Ok(result) => result,
                        Err(err) if err.is_panic() => {
                            error!(screen = S::NAME, generation, "screen fetch panicked");
                            Err(DomainError::Infrastructure("screen fetch panicked".into()))
                        }
                        Err(_) => return,
                    };
                    if let Err(err) = &result {
                        warn!(screen = S::NAME, generation, error = %err, "screen fetch failed");
                    }
                    // The receiver only goes away with the controller itself.
                    let _ = sender.send(Message::Loaded { generation, result });
                }
            }
        });
    }
}

impl<S: Screen> Drop for ScreenController<S> {
    fn drop(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}
