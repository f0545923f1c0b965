//! Screen state machine.
//!
//! `ScreenModel::update` is the only way state changes. Every accepted
//! parameter change starts a new generation; a `Loaded` message is applied
//! only if it carries the current generation.

use std::fmt;

use cinefiller_core::error::DomainError;
use tracing::debug;

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    /// A fetch for the current parameters is outstanding.
    Loading,
    /// The fetch completed. `None` means the requested entity does not exist.
    Ready(Option<T>),
    /// The fetch failed; the screen offers a retry.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

impl<T> ScreenState<T> {
    /// Returns `true` while a fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if the fetch completed without finding the entity.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Ready(None))
    }

    /// Returns the resolved entity, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => data.as_ref(),
            Self::Loading | Self::Failed { .. } => None,
        }
    }
}

/// User intents the screen forwards to its parent without processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A scene row was selected.
    SceneSelected {
        /// The selected scene's label.
        scene_number: String,
    },
    /// A dialogue line was selected.
    DialogueLineSelected {
        /// Speaker of the selected line.
        character_name: String,
    },
    /// The user asked to leave the screen.
    NavigateBack,
}

/// Messages accepted by a screen.
#[derive(Debug, Clone)]
pub enum Message<P, T> {
    /// Navigation parameters were set or changed.
    ParamsChanged(P),
    /// A fetch completed.
    Loaded {
        /// Generation the fetch was started for.
        generation: u64,
        /// The lookup outcome.
        result: Result<Option<T>, DomainError>,
    },
    /// Retry after a failure.
    Retry,
    /// A user intent to forward.
    Intent(Intent),
}

/// Effects requested by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<P> {
    /// Nothing to do.
    None,
    /// Start a fetch for `params`, tagging its result with `generation`.
    Fetch {
        /// Generation of the new fetch.
        generation: u64,
        /// Parameters to fetch for.
        params: P,
    },
    /// Forward an intent to the parent.
    Intent(Intent),
}

/// Per-screen state: current parameters, generation counter and state.
#[derive(Debug)]
pub struct ScreenModel<P, T> {
    params: Option<P>,
    generation: u64,
    state: ScreenState<T>,
}

impl<P, T> Default for ScreenModel<P, T> {
    fn default() -> Self {
        Self {
            params: None,
            generation: 0,
            state: ScreenState::Loading,
        }
    }
}

impl<P, T> ScreenModel<P, T>
where
    P: Clone + PartialEq + fmt::Debug,
{
    /// Creates a model with no parameters yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameters of the current generation.
    #[must_use]
    pub fn params(&self) -> Option<&P> {
        self.params.as_ref()
    }

    /// The current generation; zero before the first fetch.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &ScreenState<T> {
        &self.state
    }

    /// Applies a message and returns the effect it requests.
    pub fn update(&mut self, message: Message<P, T>) -> Event<P> {
        match message {
            Message::ParamsChanged(params) => {
                let unchanged = self.params.as_ref() == Some(&params);
                if unchanged && !matches!(self.state, ScreenState::Failed { .. }) {
                    return Event::None;
                }
                self.begin_fetch(params)
            }
            Message::Loaded { generation, result } => {
                if self.params.is_none() {
                    debug!(generation, "discarding screen result with no fetch requested");
                    return Event::None;
                }
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "discarding stale screen result"
                    );
                    return Event::None;
                }
                self.state = match result {
                    Ok(found) => ScreenState::Ready(found),
                    Err(err) => ScreenState::Failed {
                        message: err.to_string(),
                    },
                };
                Event::None
            }
            Message::Retry => {
                let failed = matches!(self.state, ScreenState::Failed { .. });
                match self.params.clone() {
                    Some(params) if failed => self.begin_fetch(params),
                    _ => Event::None,
                }
            }
            Message::Intent(intent) => Event::Intent(intent),
        }
    }

    fn begin_fetch(&mut self, params: P) -> Event<P> {
        self.generation += 1;
        self.state = ScreenState::Loading;
        self.params = Some(params.clone());
        Event::Fetch {
            generation: self.generation,
            params,
        }
    }
}
