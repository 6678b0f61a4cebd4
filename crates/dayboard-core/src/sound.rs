//! Named sound cues and the tones that make them up.

use std::f64::consts::{FRAC_2_PI, TAU};

/// Oscillator shape of a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Symmetric triangle with the same period and peak as the sine.
    Triangle,
}

impl Waveform {
    /// Value at `phase` radians, in `-1.0..=1.0`.
    #[must_use]
    pub fn value(self, phase: f64) -> f64 {
        match self {
            Self::Sine => phase.sin(),
            Self::Triangle => FRAC_2_PI * phase.sin().asin(),
        }
    }
}

/// One synthesized note.
///
/// Times are seconds relative to the moment the cue is played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Oscillator shape.
    pub waveform: Waveform,
    /// Offset of the note start.
    pub start: f64,
    /// Frequency at the start of the note, in Hz.
    pub frequency: f32,
    /// Frequency the note glides to exponentially, if any, and when.
    pub glide_to: Option<(f32, f64)>,
    /// Time from silence to `peak_gain`. Zero starts at full gain.
    pub attack: f64,
    /// Gain reached at the end of the attack.
    pub peak_gain: f32,
    /// Time from note start until the gain has decayed to silence.
    pub length: f64,
}

impl Tone {
    /// Frequency `t` seconds after the note starts, in Hz.
    #[must_use]
    pub fn frequency_at(&self, t: f64) -> f64 {
        let base = f64::from(self.frequency);
        match self.glide_to {
            Some((target, after)) if t < after => {
                base * (f64::from(target) / base).powf(t / after)
            }
            Some((target, _)) => f64::from(target),
            None => base,
        }
    }

    /// Envelope gain `t` seconds after the note starts.
    ///
    /// Rises linearly during the attack, then decays exponentially towards
    /// [`SILENT_GAIN`] at `length`. Outside the note the gain is zero.
    #[must_use]
    pub fn gain_at(&self, t: f64) -> f64 {
        if !(0.0..self.length).contains(&t) {
            return 0.0;
        }
        let peak = f64::from(self.peak_gain);
        if t < self.attack {
            return peak * t / self.attack;
        }
        let progress = (t - self.attack) / (self.length - self.attack);
        peak * (f64::from(SILENT_GAIN) / peak).powf(progress)
    }
}

/// Sound cues played by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SoundEffect {
    /// The countdown reached zero.
    #[display("alarm")]
    Alarm,
    /// A task was checked off.
    #[display("success")]
    Success,
    /// Every task is done.
    #[display("completion")]
    Completion,
}

const C5: f32 = 523.25;
const E5: f32 = 659.25;
const G5: f32 = 783.99;
const A5: f32 = 880.0;
const C6: f32 = 1046.5;

/// Gain treated as silence at the end of an exponential decay.
pub const SILENT_GAIN: f32 = 0.01;

const ALARM: [Tone; 1] = [Tone {
    waveform: Waveform::Sine,
    start: 0.0,
    frequency: C5,
    glide_to: Some((C6, 0.1)),
    attack: 0.0,
    peak_gain: 0.5,
    length: 1.5,
}];

const SUCCESS: [Tone; 1] = [Tone {
    waveform: Waveform::Triangle,
    start: 0.0,
    frequency: A5,
    glide_to: None,
    attack: 0.02,
    peak_gain: 0.25,
    length: 0.35,
}];

const fn chord_note(start: f64, frequency: f32) -> Tone {
    Tone {
        waveform: Waveform::Triangle,
        start,
        frequency,
        glide_to: None,
        attack: 0.1,
        peak_gain: 0.3,
        length: 2.0,
    }
}

const COMPLETION: [Tone; 3] = [
    chord_note(0.0, C5),
    chord_note(0.1, E5),
    chord_note(0.2, G5),
];

impl SoundEffect {
    /// Tones making up this cue.
    #[must_use]
    pub fn tones(self) -> &'static [Tone] {
        match self {
            Self::Alarm => &ALARM,
            Self::Success => &SUCCESS,
            Self::Completion => &COMPLETION,
        }
    }

    /// Time until the last tone has faded out.
    #[must_use]
    pub fn duration(self) -> f64 {
        self.tones()
            .iter()
            .map(|tone| tone.start + tone.length)
            .fold(0.0, f64::max)
    }

    /// Mono samples of the whole cue at `sample_rate`, clamped to `-1.0..=1.0`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn render(self, sample_rate: u32) -> Vec<f32> {
        let rate = f64::from(sample_rate);
        let mut samples = vec![0.0_f32; (self.duration() * rate).ceil() as usize];
        for tone in self.tones() {
            let first = (tone.start * rate).round() as usize;
            let mut phase = 0.0;
            for (offset, sample) in samples.iter_mut().skip(first).enumerate() {
                let t = offset as f64 / rate;
                if t >= tone.length {
                    break;
                }
                *sample += (tone.waveform.value(phase) * tone.gain_at(t)) as f32;
                phase = (phase + TAU * tone.frequency_at(t) / rate) % TAU;
            }
        }
        for sample in &mut samples {
            *sample = sample.clamp(-1.0, 1.0);
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::{SILENT_GAIN, SoundEffect};

    fn peak(samples: &[f32]) -> f32 {
        samples.iter().fold(0.0, |max, sample| max.max(sample.abs()))
    }

    #[test]
    fn test_completion_is_a_staggered_triad() {
        let tones = SoundEffect::Completion.tones();
        assert_eq!(tones.len(), 3);
        let starts: Vec<f64> = tones.iter().map(|tone| tone.start).collect();
        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
        assert!((SoundEffect::Completion.duration() - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_every_cue_is_audible() {
        for effect in [
            SoundEffect::Alarm,
            SoundEffect::Success,
            SoundEffect::Completion,
        ] {
            assert!(!effect.tones().is_empty(), "{effect} has no tones");
            assert!(effect.tones().iter().all(|tone| tone.peak_gain > 0.0));
        }
    }

    #[test]
    fn test_alarm_glides_up_an_octave() {
        let tone = SoundEffect::Alarm.tones()[0];
        assert!((tone.frequency_at(0.0) - 523.25).abs() < 1e-3);
        assert!(tone.frequency_at(0.05) > 523.25 && tone.frequency_at(0.05) < 1046.5);
        assert!((tone.frequency_at(0.5) - 1046.5).abs() < 1e-3);
    }

    #[test]
    fn test_envelope_attacks_then_decays_to_silence() {
        let tone = SoundEffect::Success.tones()[0];
        assert!(tone.gain_at(0.0).abs() < 1e-9);
        assert!((tone.gain_at(tone.attack) - f64::from(tone.peak_gain)).abs() < 1e-6);
        let tail = tone.gain_at(tone.length - 1e-6);
        assert!((tail - f64::from(SILENT_GAIN)).abs() < 1e-3);
        assert!(tone.gain_at(tone.length).abs() < 1e-9);
        assert!(tone.gain_at(-0.1).abs() < 1e-9);
    }

    #[test]
    fn test_render_covers_the_cue_at_its_peak_gain() {
        let samples = SoundEffect::Alarm.render(48_000);
        assert_eq!(samples.len(), 72_000);
        assert!((peak(&samples) - 0.5).abs() < 0.01);

        let samples = SoundEffect::Success.render(48_000);
        assert_eq!(samples.len(), 16_800);
        assert!((peak(&samples) - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_render_stays_in_range_and_fades_out() {
        let samples = SoundEffect::Completion.render(22_050);
        assert!(samples.iter().all(|sample| (-1.0..=1.0).contains(sample)));
        assert!(peak(&samples) > 0.25);
        let tail = &samples[samples.len() - 100..];
        assert!(peak(tail) < 2.0 * SILENT_GAIN);
    }
}
