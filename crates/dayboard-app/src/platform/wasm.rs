//! Browser backend.
//!
//! Sound cues are synthesized with WebAudio oscillators. Pictures are picked
//! through a detached `<input type="file">` and read with `FileReader`, which
//! yields a `data:` URI directly.

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use dayboard_core::{
    SoundEffect,
    sound::{SILENT_GAIN, Tone, Waveform},
};
use futures_channel::oneshot;
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};
use web_sys::{
    AudioContext, AudioScheduledSourceNode, File, FileReader, HtmlInputElement, OscillatorType,
};

use crate::image_import::ImageImportError;

/// Whether [`pick_image`] can open a file picker.
pub(crate) const HAS_PICKER: bool = true;

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

thread_local! {
    static AUDIO: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

pub(crate) fn play_sound(effect: SoundEffect) {
    let result = AUDIO.with(|cell| {
        let mut audio = cell.borrow_mut();
        if audio.is_none() {
            *audio = Some(AudioContext::new()?);
        }
        match audio.as_ref() {
            Some(audio) => schedule(audio, effect),
            None => Ok(()),
        }
    });
    if let Err(err) = result {
        log::warn!("failed to play {effect}: {err:?}");
    }
}

fn schedule(audio: &AudioContext, effect: SoundEffect) -> Result<(), JsValue> {
    // Contexts created before the first user gesture start suspended.
    let _resumed = audio.resume()?;
    let now = audio.current_time();
    for tone in effect.tones() {
        schedule_tone(audio, now, tone)?;
    }
    Ok(())
}

fn schedule_tone(audio: &AudioContext, now: f64, tone: &Tone) -> Result<(), JsValue> {
    let oscillator = audio.create_oscillator()?;
    let gain = audio.create_gain()?;
    oscillator.set_type(match tone.waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Triangle => OscillatorType::Triangle,
    });

    let start = now + tone.start;
    let end = start + tone.length;

    let frequency = oscillator.frequency();
    frequency.set_value_at_time(tone.frequency, start)?;
    if let Some((target, after)) = tone.glide_to {
        frequency.exponential_ramp_to_value_at_time(target, start + after)?;
    }

    let level = gain.gain();
    if tone.attack > 0.0 {
        level.set_value_at_time(0.0, start)?;
        level.linear_ramp_to_value_at_time(tone.peak_gain, start + tone.attack)?;
    } else {
        level.set_value_at_time(tone.peak_gain, start)?;
    }
    level.exponential_ramp_to_value_at_time(SILENT_GAIN, end)?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&audio.destination())?;

    let source: &AudioScheduledSourceNode = &oscillator;
    source.start_with_when(start)?;
    source.stop_with_when(end)?;
    Ok(())
}

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<String, ImageImportError>>>>>;

fn send(reply: &Reply, result: Result<String, ImageImportError>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

fn browser_error(message: &str) -> ImageImportError {
    ImageImportError::Browser(message.to_owned())
}

fn js_error(value: &JsValue) -> ImageImportError {
    ImageImportError::Browser(format!("{value:?}"))
}

pub(crate) async fn pick_image() -> Result<String, ImageImportError> {
    let (tx, rx) = oneshot::channel();
    open_picker(Rc::new(RefCell::new(Some(tx))))?;
    rx.await.map_err(|_| ImageImportError::Canceled)?
}

fn open_picker(reply: Reply) -> Result<(), ImageImportError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| browser_error("no document"))?;
    let input: HtmlInputElement = document
        .create_element("input")
        .map_err(|err| js_error(&err))?
        .dyn_into()
        .map_err(|_| browser_error("created element is not an input"))?;
    input.set_type("file");
    input.set_accept("image/*");

    let on_change = {
        let reply = Rc::clone(&reply);
        let input = input.clone();
        Closure::once_into_js(move || match input.files().and_then(|files| files.get(0)) {
            Some(file) => read_as_data_url(&file, reply),
            None => send(&reply, Err(ImageImportError::Canceled)),
        })
    };
    input
        .add_event_listener_with_callback("change", on_change.unchecked_ref())
        .map_err(|err| js_error(&err))?;

    let on_cancel = {
        let reply = Rc::clone(&reply);
        Closure::once_into_js(move || send(&reply, Err(ImageImportError::Canceled)))
    };
    input
        .add_event_listener_with_callback("cancel", on_cancel.unchecked_ref())
        .map_err(|err| js_error(&err))?;

    input.click();
    Ok(())
}

fn read_as_data_url(file: &File, reply: Reply) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(err) => return send(&reply, Err(js_error(&err))),
    };

    let on_load = {
        let reader = reader.clone();
        let reply = Rc::clone(&reply);
        Closure::once_into_js(move || {
            let result = reader
                .result()
                .map_err(|err| js_error(&err))
                .and_then(|value| {
                    value
                        .as_string()
                        .ok_or_else(|| browser_error("file reader result is not a string"))
                });
            send(&reply, result);
        })
    };
    reader.set_onload(Some(on_load.unchecked_ref()));

    let on_error = {
        let reply = Rc::clone(&reply);
        Closure::once_into_js(move || send(&reply, Err(browser_error("failed to read file"))))
    };
    reader.set_onerror(Some(on_error.unchecked_ref()));

    if let Err(err) = reader.read_as_data_url(file) {
        send(&reply, Err(js_error(&err)));
    }
}

#[expect(clippy::unused_async)]
pub(crate) async fn read_file(path: PathBuf) -> Result<Vec<u8>, ImageImportError> {
    log::warn!("cannot read {} in the browser", path.display());
    Err(ImageImportError::Unsupported)
}
