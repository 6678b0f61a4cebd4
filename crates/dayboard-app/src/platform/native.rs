//! Desktop backend.
//!
//! Pictures arrive as files dropped onto the window and are read on a
//! short-lived thread. Sound cues are rendered to samples and played through
//! the default output device on a thread of their own.

use std::{
    path::PathBuf,
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use cpal::{
    BufferSize, BuildStreamError, DefaultStreamConfigError, OutputCallbackInfo, PlayStreamError,
    StreamConfig,
    traits::{DeviceTrait as _, HostTrait as _, StreamTrait as _},
};
use dayboard_core::SoundEffect;
use futures_channel::oneshot;

use crate::image_import::ImageImportError;

/// Whether [`pick_image`] can open a file picker.
pub(crate) const HAS_PICKER: bool = false;

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

/// Extra time the stream stays open after the last tone has faded.
const TAIL: Duration = Duration::from_millis(100);

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum SoundOutputError {
    #[display("no audio output device")]
    NoDevice,
    #[display("no default output config: {_0}")]
    Config(#[from] DefaultStreamConfigError),
    #[display("failed to build output stream: {_0}")]
    Build(#[from] BuildStreamError),
    #[display("failed to start output stream: {_0}")]
    Play(#[from] PlayStreamError),
}

pub(crate) fn play_sound(effect: SoundEffect) {
    let spawned = thread::Builder::new()
        .name(format!("sound-{effect}"))
        .spawn(move || {
            if let Err(err) = play_blocking(effect) {
                log::warn!("cannot play {effect}: {err}");
            }
        });
    if let Err(err) = spawned {
        log::warn!("cannot start sound thread for {effect}: {err}");
    }
}

fn play_blocking(effect: SoundEffect) -> Result<(), SoundOutputError> {
    let device = cpal::default_host()
        .default_output_device()
        .ok_or(SoundOutputError::NoDevice)?;
    let supported = device.default_output_config()?;
    let config = StreamConfig {
        channels: supported.channels(),
        sample_rate: supported.sample_rate(),
        buffer_size: BufferSize::Default,
    };

    let channels = usize::from(config.channels.max(1));
    let mut samples = effect.render(config.sample_rate).into_iter();
    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _info: &OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                frame.fill(samples.next().unwrap_or(0.0));
            }
        },
        |err| log::warn!("sound output stream error: {err}"),
        None,
    )?;
    stream.play()?;
    log::debug!("playing {effect} at {} Hz", config.sample_rate);

    thread::sleep(Duration::from_secs_f64(effect.duration()) + TAIL);
    Ok(())
}

#[expect(clippy::unused_async)]
pub(crate) async fn pick_image() -> Result<String, ImageImportError> {
    Err(ImageImportError::Unsupported)
}

pub(crate) async fn read_file(path: PathBuf) -> Result<Vec<u8>, ImageImportError> {
    let (tx, rx) = oneshot::channel();
    thread::spawn(move || {
        let _ = tx.send(std::fs::read(&path));
    });
    let bytes = rx.await.map_err(|_| ImageImportError::Canceled)??;
    Ok(bytes)
}
