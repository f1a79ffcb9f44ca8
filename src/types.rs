//! Core types for Valentine Quest

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One speaker/text pair in the scripted conversation sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DialogueLine {
    /// Name shown above the dialogue box, including its trailing colon
    pub speaker: String,
    /// The line itself
    pub text: String,
}

impl DialogueLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Frame counts the front-end uses to pace the chest-open sequence,
/// at an assumed 60 frames per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnimationTimings {
    /// How long the chest-open animation runs
    pub chest_duration: u32,
    /// Minimum time the flower bouquet stays on screen
    pub flower_duration: u32,
    /// Frame at which the flowers fade in
    pub transition_delay: u32,
}
