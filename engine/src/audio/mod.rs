//! Audio Module
//!
//! Synthesized one-shot detonation sound. No asset files: the boom is a
//! low sine sweep under a decaying noise burst, generated sample by
//! sample. Playback failure never affects the simulation - the caller
//! logs and carries on without sound.

use std::time::Duration;

use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

const BOOM_VOLUME: f32 = 0.8;

/// Synthesized explosion: xorshift noise with a fast-decay envelope over
/// a sine sweep dropping from rumble to sub-bass.
#[derive(Debug, Clone)]
struct DetonationBoom {
    sample_rate: u32,
    channels: u16,
    frame: u64,
    chan: u16,
    state: u32,
    phase: f32,
    last_sample: f32,
}

impl DetonationBoom {
    const DURATION_MS: u64 = 900;

    fn new(seed: u32) -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            frame: 0,
            chan: 0,
            state: seed.max(1),
            phase: 0.0,
            last_sample: 0.0,
        }
    }

    fn total_frames(&self) -> u64 {
        self.sample_rate as u64 * Self::DURATION_MS / 1_000
    }

    fn next_noise(&mut self) -> f32 {
        // Xorshift32 pseudo-noise.
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        let unit = (x as f32) / (u32::MAX as f32);
        unit * 2.0 - 1.0
    }

    fn next_mono(&mut self) -> f32 {
        let progress = self.frame as f32 / self.total_frames() as f32;

        // Rumble sweep 120 Hz down to 35 Hz.
        let freq = 120.0 - 85.0 * progress;
        self.phase = (self.phase + freq / self.sample_rate as f32).fract();
        let rumble = (self.phase * std::f32::consts::TAU).sin();

        // Crack of noise up front, gone by mid-burst.
        let crack = self.next_noise() * (1.0 - progress).powi(4);

        let envelope = (1.0 - progress).powi(2);
        (rumble * 0.7 + crack * 0.5) * envelope
    }
}

impl Iterator for DetonationBoom {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame >= self.total_frames() {
            return None;
        }
        // Compute once per frame, repeat for both channels.
        if self.chan == 0 {
            self.last_sample = self.next_mono();
        }
        self.chan += 1;
        if self.chan >= self.channels {
            self.chan = 0;
            self.frame += 1;
        }
        Some(self.last_sample)
    }
}

impl Source for DetonationBoom {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.total_frames().saturating_sub(self.frame) as usize)
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_millis(Self::DURATION_MS))
    }
}

/// Audio output handle. Holds the stream open for the app's lifetime.
pub struct Sfx {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Sfx {
    /// Open the default audio output. Fails on machines without one;
    /// the demo then runs silent.
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Fire the detonation boom. Best effort: a busy or vanished output
    /// device just skips the sound.
    pub fn play_boom(&self) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(BOOM_VOLUME);
        sink.append(DetonationBoom::new(0x9E37_79B9));
        sink.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boom_is_finite_and_bounded() {
        let boom = DetonationBoom::new(1);
        let samples: Vec<f32> = boom.collect();
        assert_eq!(samples.len(), 2 * 48_000 * 900 / 1000);
        assert!(samples.iter().all(|s| s.is_finite() && s.abs() <= 1.5));
    }

    #[test]
    fn test_boom_decays_to_silence() {
        let boom = DetonationBoom::new(7);
        let samples: Vec<f32> = boom.collect();
        let head: f32 = samples[..4800].iter().map(|s| s.abs()).sum();
        let tail: f32 = samples[samples.len() - 4800..]
            .iter()
            .map(|s| s.abs())
            .sum();
        assert!(tail < head * 0.25);
    }
}
