//! Host capabilities: clock, sound output and file access.

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use native::{HAS_PICKER, now_millis, pick_image, play_sound, read_file};
#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::{HAS_PICKER, now_millis, pick_image, play_sound, read_file};
