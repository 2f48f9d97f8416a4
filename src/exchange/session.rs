use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::models::{CurrencyRecord, ExchangeAmounts, SelectionPair};

use super::calculator::{self, ExchangeError};
use super::delay::{SettleDelay, TokioDelay};

/// Which side of the pair a selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Send,
    Receive,
}

/// Everything the presentation layer can observe about the exchange flow.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapState {
    pub pair: SelectionPair,
    pub amounts: ExchangeAmounts,
    /// True while a conversion is awaiting settlement; submit is disabled
    /// during this window.
    pub busy: bool,
    /// Set when the send amount failed validation; cleared by the next
    /// successful submit or settled conversion.
    pub validation: Option<ExchangeError>,
    /// Monotonic id of the latest issued conversion. Settlements carrying
    /// an older id are stale and discarded.
    generation: u64,
}

impl SwapState {
    pub fn new(pair: SelectionPair) -> Self {
        Self {
            pair,
            amounts: ExchangeAmounts::default(),
            busy: false,
            validation: None,
            generation: 0,
        }
    }

    /// Issue a conversion for the current text and pair, if there is text to
    /// convert. Bumps the generation so any in-flight conversion becomes
    /// stale.
    fn issue_compute(&mut self) -> Vec<Effect> {
        if self.amounts.send.trim().is_empty() {
            return Vec::new();
        }
        self.generation += 1;
        self.busy = true;
        debug!(
            generation = self.generation,
            send = %self.pair.send.code,
            receive = %self.pair.receive.code,
            "conversion issued"
        );
        vec![Effect::Compute {
            generation: self.generation,
            amount_text: self.amounts.send.clone(),
            pair: self.pair.clone(),
        }]
    }
}

/// External stimulus applied to the swap state.
#[derive(Debug, Clone)]
pub enum Event {
    /// The user edited the send amount text. Typing alone never recomputes.
    AmountChanged(String),
    /// A currency was picked for one side of the pair.
    CurrencySelected { slot: Slot, record: CurrencyRecord },
    /// The send/receive identities were exchanged.
    Swapped,
    /// The form was submitted.
    Submitted,
    /// A conversion finished its settlement delay.
    Settled {
        generation: u64,
        outcome: Result<Decimal, ExchangeError>,
    },
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the conversion, wait out the settlement delay, and feed the
    /// result back as [`Event::Settled`] with the same generation.
    Compute {
        generation: u64,
        amount_text: String,
        pair: SelectionPair,
    },
}

/// Pure transition function for the exchange flow.
///
/// All UI-coupled behavior lives here: selection and swap recompute only
/// when an amount is present, submit validates first, and settlements
/// publish only when they are the latest issued conversion.
pub fn step(mut state: SwapState, event: Event) -> (SwapState, Vec<Effect>) {
    match event {
        Event::AmountChanged(text) => {
            state.amounts.send = text;
            (state, Vec::new())
        }
        Event::CurrencySelected { slot, record } => {
            match slot {
                Slot::Send => state.pair.send = record,
                Slot::Receive => state.pair.receive = record,
            }
            let effects = state.issue_compute();
            (state, effects)
        }
        Event::Swapped => {
            std::mem::swap(&mut state.pair.send, &mut state.pair.receive);
            // Recompute with the post-swap pair, never the stale one.
            let effects = state.issue_compute();
            (state, effects)
        }
        Event::Submitted => {
            if state.busy {
                return (state, Vec::new());
            }
            if let Err(error) = calculator::parse_amount(&state.amounts.send) {
                warn!(%error, "submit rejected");
                state.validation = Some(error);
                return (state, Vec::new());
            }
            state.validation = None;
            let effects = state.issue_compute();
            (state, effects)
        }
        Event::Settled {
            generation,
            outcome,
        } => {
            if generation != state.generation {
                debug!(
                    generation,
                    latest = state.generation,
                    "stale settlement discarded"
                );
                return (state, Vec::new());
            }
            state.busy = false;
            match outcome {
                Ok(value) => {
                    state.amounts.receive = calculator::render_amount(value);
                    state.validation = None;
                    info!(generation, receive = %state.amounts.receive, "conversion settled");
                }
                Err(error) => {
                    warn!(generation, %error, "conversion failed");
                    state.validation = Some(error);
                }
            }
            (state, Vec::new())
        }
    }
}

/// Owns the swap state and the settlement delay, and drives conversions.
pub struct ExchangeSession {
    state: SwapState,
    delay: Arc<dyn SettleDelay>,
}

impl ExchangeSession {
    pub fn new(pair: SelectionPair) -> Self {
        Self {
            state: SwapState::new(pair),
            delay: Arc::new(TokioDelay::default()),
        }
    }

    pub fn with_delay(mut self, delay: Arc<dyn SettleDelay>) -> Self {
        self.delay = delay;
        self
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    /// Apply one event and return the effects the caller still has to run.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        let (state, effects) = step(self.state.clone(), event);
        self.state = state;
        effects
    }

    /// Run one compute effect to completion: convert, wait out the
    /// settlement delay, and return the settle event to apply.
    pub async fn settle(&self, effect: Effect) -> Event {
        let Effect::Compute {
            generation,
            amount_text,
            pair,
        } = effect;
        let outcome = calculator::compute(&amount_text, &pair.send, &pair.receive);
        self.delay.wait().await;
        Event::Settled {
            generation,
            outcome,
        }
    }

    /// Apply an event and drive any resulting conversions to completion.
    ///
    /// Overlapping conversions (supersession) need the split
    /// [`Self::apply`]/[`Self::settle`] calls instead.
    pub async fn dispatch(&mut self, event: Event) -> &SwapState {
        let effects = self.apply(event);
        for effect in effects {
            let settled = self.settle(effect).await;
            self.apply(settled);
        }
        self.state()
    }
}
