//! Audio notification capability
//!
//! What the rest of a host depends on to signal events audibly.

use async_trait::async_trait;

/// Port trait for event notification sounds
#[async_trait]
pub trait AudioNotificationService: Send + Sync {
    /// Play the breakpoint-hit sound if the settings allow it.
    ///
    /// Never fails: a sound that cannot be played is skipped.
    async fn play_breakpoint_hit_sound(&self);
}
