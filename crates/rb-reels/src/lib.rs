//! # rb-reels — ReelBox reel engine and round controller
//!
//! The spin/settle/evaluate state machine behind the 3×3 slot mini-game.
//!
//! ## Architecture
//!
//! ```text
//! Round (credits, bet, spin-lock)
//!     │ request_spin
//!     v
//! ReelEngine ──tick──> per-reel travel ──settle──> one-shot completion
//!     │                                                  │
//!     └── result() -> Grid ──> paytable::evaluate ──> payout + highlights
//! ```
//!
//! The engine is the single writer of reel state; the controller only reads
//! the settled grid. One cooperative tick clock drives all in-motion reels.

pub mod engine;
pub mod paytable;
pub mod reel;
pub mod round;
pub mod stats;
pub mod timing;

pub use engine::*;
pub use paytable::*;
pub use reel::*;
pub use round::*;
pub use stats::*;
pub use timing::*;
