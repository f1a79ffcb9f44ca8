//! The fixed game script
//!
//! Everything the backend ever says is scripted: the victory dialogue, the
//! chest prompt wording, the animation frame counts and the confession
//! message. The flow ordering (start → claim → confirm → open → confession)
//! is driven entirely by the front-end; handlers just read from here.

use crate::types::{AnimationTimings, DialogueLine};

/// Victory dialogue played after the flag is raised, in playback order
pub fn victory_dialogue() -> Vec<DialogueLine> {
    vec![
        DialogueLine::new("PRINCE ???:", "You did it! You saved me!"),
        DialogueLine::new("PRINCE ???:", "I knew you had it in you..."),
        DialogueLine::new("PRINCE ???:", "I have a gift for you."),
        DialogueLine::new("JACQUES:", "Please accept these tokens of my affection."),
    ]
}

// Chest prompt shown when the dialogue ends

pub const REWARD_TITLE: &str = "CLAIM YOUR REWARD";
pub const REWARD_MESSAGE: &str = "YOU RECEIVE A CHEST";
pub const REWARD_ACTION: &str = "OPEN NOW";

// Confirmation dialog

pub const CONFIRM_TITLE: &str = "OPEN THE CHEST?";
pub const CONFIRM_MESSAGE: &str = "Claim your special gift inside...";
pub const CONFIRM_YES: &str = "YES, OPEN IT!";
pub const CONFIRM_NO: &str = "NOT YET";

/// Page the front-end navigates to once the chest and flower animations end
pub const CONFESSION_PAGE: &str = "/confession";

/// Pacing for the chest-open sequence: 4 seconds of chest at 60 FPS, then
/// flowers for at least 200 frames
pub fn animation_timings() -> AnimationTimings {
    AnimationTimings {
        chest_duration: 240,
        flower_duration: 200,
        transition_delay: 240,
    }
}

/// Message rendered into the confession page after the flower bouquet
pub const CONFESSION_MESSAGE: &str = "<em>My Dearest Carylene,</em><br><br>\n\n\
    Happy Valentine's Day! 💕<br><br>\n\n\
    On this special day, I wanted to tell you something that has been on my heart for so long.\n\
    You mean the world to me, and being able to share this day with you makes me incredibly happy.<br><br>\n\n\
    With all my love,<br>\n\
    Jacques";

/// API paths reported by the game status endpoint
pub fn api_endpoints() -> Vec<String> {
    [
        "/api/conversation/start",
        "/api/reward/claim",
        "/api/reward/confirm",
        "/api/reward/open",
        "/confession",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
