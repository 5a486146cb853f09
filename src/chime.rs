//! Short tone played on every scene change, silenced by the mute toggle.

use log::{debug, warn};
use raylib::prelude::*;

use crate::scene::Scene;

pub const SAMPLE_RATE: u32 = 22_050;
pub const TONE_SECONDS: f32 = 0.35;
const AMPLITUDE: f32 = 0.25;

/// C major arpeggio, one note per scene.
pub fn pitch(scene: Scene) -> f32 {
    match scene {
        Scene::Introduction => 523.25,
        Scene::Skills => 659.25,
        Scene::Projects => 783.99,
        Scene::Contact => 1046.50,
    }
}

/// Builds a 16-bit mono PCM WAV file holding a decaying sine tone.
pub fn tone_wav(frequency: f32, seconds: f32, sample_rate: u32) -> Vec<u8> {
    let samples = (seconds * sample_rate as f32) as u32;
    let data_len = samples * 2;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());

    for n in 0..samples {
        let t = n as f32 / sample_rate as f32;
        let envelope = 1.0 - n as f32 / samples as f32;
        let value = (t * frequency * std::f32::consts::TAU).sin() * envelope * AMPLITUDE;
        bytes.extend_from_slice(&((value * i16::MAX as f32) as i16).to_le_bytes());
    }

    bytes
}

pub struct Chime<'aud> {
    sounds: Vec<Sound<'aud>>,
    muted: bool,
}

impl<'aud> Chime<'aud> {
    pub fn new(audio: &'aud RaylibAudio, muted: bool) -> Self {
        let mut sounds = Vec::new();
        for scene in Scene::ALL {
            let bytes = tone_wav(pitch(scene), TONE_SECONDS, SAMPLE_RATE);
            let sound = audio
                .new_wave_from_memory(".wav", &bytes)
                .and_then(|wave| audio.new_sound_from_wave(&wave));
            match sound {
                Ok(sound) => sounds.push(sound),
                Err(e) => {
                    warn!("Could not build chime for {}: {}", scene.name(), e);
                    return Self::silent(muted);
                }
            }
        }
        Self { sounds, muted }
    }

    /// A chime with no audio device behind it.
    pub fn silent(muted: bool) -> Self {
        Self {
            sounds: Vec::new(),
            muted,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if self.muted {
            for sound in &self.sounds {
                if sound.is_playing() {
                    sound.stop();
                }
            }
        }
        self.muted
    }

    pub fn play(&self, scene: Scene) {
        if self.muted {
            return;
        }
        if let Some(sound) = self.sounds.get(scene.index()) {
            debug!("Chime for {}", scene.name());
            sound.play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    #[test]
    fn wav_header_describes_mono_pcm() {
        let bytes = tone_wav(440.0, 0.1, 8000);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(u32_at(&bytes, 24), 8000);
        assert_eq!(u32_at(&bytes, 40), 800 * 2);
        assert_eq!(u32_at(&bytes, 4) as usize, bytes.len() - 8);
    }

    #[test]
    fn tone_fades_out() {
        let bytes = tone_wav(440.0, 0.1, 8000);
        let last = i16::from_le_bytes([bytes[bytes.len() - 2], bytes[bytes.len() - 1]]);
        assert!(last.abs() < 100);
    }

    #[test]
    fn pitch_rises_through_the_show() {
        let pitches: Vec<_> = Scene::ALL.iter().map(|s| pitch(*s)).collect();
        assert!(pitches.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn mute_toggles() {
        let mut chime = Chime::silent(false);
        assert!(chime.toggle_mute());
        assert!(chime.is_muted());
        chime.play(Scene::Skills);
        assert!(!chime.toggle_mute());
    }
}
