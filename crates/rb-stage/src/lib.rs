//! # rb-stage — ReelBox stage system
//!
//! The shared vocabulary between the reel engine and its front-ends.
//! A `Stage` is NOT an animation frame and NOT a render command.
//! A `Stage` is the SEMANTIC MEANING of a moment in the game flow.
//!
//! Front-ends (terminal, audio) respond to stages and to declarative
//! surface commands, never to raw engine internals.
//!
//! ## Architecture
//!
//! ```text
//! ReelEngine ──ticks──> StageEvent stream
//!     │                      │
//!     ├── RenderSurface <────┤   (draw/scroll/overlay/text commands)
//!     └── AudioSink     <────┘   (fire-and-forget cues)
//! ```

pub mod event;
pub mod payline;
pub mod stage;
pub mod surface;
pub mod symbols;

pub use event::*;
pub use payline::*;
pub use stage::*;
pub use surface::*;
pub use symbols::*;
