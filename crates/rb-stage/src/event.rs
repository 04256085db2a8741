//! StageEvent — a stage occurrence stamped with engine time

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// A stage occurrence on the engine's tick clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEvent {
    /// The canonical stage
    pub stage: Stage,
    /// Engine tick at which the stage occurred (monotonic per session)
    pub tick: u64,
}

impl StageEvent {
    pub fn new(stage: Stage, tick: u64) -> Self {
        Self { stage, tick }
    }

    /// Stage type name, for logging.
    pub fn type_name(&self) -> &'static str {
        self.stage.type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_roundtrip() {
        let event = StageEvent::new(Stage::SpinEnd, 42);
        let json = serde_json::to_string(&event).unwrap();
        let back: StageEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.type_name(), "spin_end");
    }
}
