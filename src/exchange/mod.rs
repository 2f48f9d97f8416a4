mod calculator;
mod delay;
mod session;

pub use calculator::{compute, render_amount, ExchangeError};
pub use delay::{NoDelay, SettleDelay, TokioDelay};
pub use session::{step, Effect, Event, ExchangeSession, Slot, SwapState};
