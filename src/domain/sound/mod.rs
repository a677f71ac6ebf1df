//! Notification sound domain module

mod sound_id;

pub use sound_id::{SoundId, ALL_SOUNDS, ASSET_EXTENSION};
