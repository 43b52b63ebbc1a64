//! core/playback/decoder.rs
//! FLAC decoding (Symphonia) exposed as a rodio::Source.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use rodio::Source;

use symphonia::core::audio::{SampleBuffer, SignalSpec};
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, SeekMode, SeekTo};
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::{Time, TimeBase};

use crate::error::{Error, Result};

/// A streaming rodio Source backed by Symphonia.
pub struct FlacSource {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,

    sample_rate: u32,
    channels: u16,

    // Decoded frames before this timestamp are dropped (accurate seek).
    skip_until_ts: u64,

    // Interleaved f32 samples ready to be yielded
    samples: Vec<f32>,
    cursor: usize,

    ended: bool,
}

impl FlacSource {
    /// Open `path` and position it at `start_ms`.
    /// Also returns the track length in milliseconds when the stream header knows it.
    pub fn open_at(path: &Path, start_ms: u64) -> Result<(Self, Option<u64>)> {
        let file = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

        let mut hint = Hint::new();
        hint.with_extension("flac");

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| Error::Decode(format!("{}: no audio track", path.display())))?;
        let track_id = track.id;
        let params = track.codec_params.clone();

        let duration_ms = duration_ms(params.time_base, params.n_frames);

        let decoder = symphonia::default::get_codecs()
            .make(&params, &DecoderOptions::default())
            .map_err(|e| Error::Decode(e.to_string()))?;

        let mut skip_until_ts = 0;
        if start_ms > 0 {
            let seeked = format
                .seek(
                    SeekMode::Accurate,
                    SeekTo::Time {
                        time: Time::new(start_ms / 1000, (start_ms % 1000) as f64 / 1000.0),
                        track_id: Some(track_id),
                    },
                )
                .map_err(|e| Error::Decode(format!("seek failed: {e}")))?;
            skip_until_ts = seeked.required_ts;
        }

        let mut source = Self {
            format,
            decoder,
            track_id,
            sample_rate: params.sample_rate.unwrap_or(44_100),
            channels: params.channels.map(|c| c.count() as u16).unwrap_or(2),
            skip_until_ts,
            samples: Vec::new(),
            cursor: 0,
            ended: false,
        };

        // Prime once so sample_rate/channels reflect the decoded stream.
        source.refill()?;

        Ok((source, duration_ms))
    }

    fn refill(&mut self) -> Result<()> {
        self.samples.clear();
        self.cursor = 0;

        while !self.ended {
            let packet = match self.format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(_)) => {
                    self.ended = true;
                    break;
                }
                Err(SymphoniaError::ResetRequired) => {
                    self.decoder.reset();
                    continue;
                }
                Err(e) => return Err(Error::Decode(e.to_string())),
            };

            if packet.track_id() != self.track_id {
                continue;
            }
            if packet.ts() + packet.dur() <= self.skip_until_ts {
                continue;
            }

            let decoded = match self.decoder.decode(&packet) {
                Ok(d) => d,
                // Corrupt frame; skip it.
                Err(SymphoniaError::DecodeError(msg)) => {
                    log::debug!("skipping corrupt FLAC frame: {msg}");
                    continue;
                }
                Err(SymphoniaError::IoError(_)) => {
                    self.ended = true;
                    break;
                }
                Err(e) => return Err(Error::Decode(e.to_string())),
            };

            let spec = SignalSpec::new(decoded.spec().rate, decoded.spec().channels);
            let channels = spec.channels.count();
            self.sample_rate = spec.rate;
            self.channels = channels as u16;

            let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
            buf.copy_interleaved_ref(decoded);

            let skip_frames = self.skip_until_ts.saturating_sub(packet.ts()) as usize;
            self.skip_until_ts = 0;

            let skip = (skip_frames * channels).min(buf.samples().len());
            self.samples.extend_from_slice(&buf.samples()[skip..]);

            if !self.samples.is_empty() {
                break;
            }
        }

        Ok(())
    }
}

fn duration_ms(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let t = time_base?.calc_time(n_frames?);
    Some(t.seconds * 1000 + (t.frac * 1000.0).round() as u64)
}

impl Iterator for FlacSource {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.samples.len() {
            if self.ended {
                return None;
            }
            if let Err(e) = self.refill() {
                log::warn!("decoding stopped: {e}");
                self.ended = true;
                return None;
            }
            if self.samples.is_empty() {
                return None;
            }
        }

        let s = self.samples.get(self.cursor).copied();
        self.cursor += 1;
        s
    }
}

impl Source for FlacSource {
    // Packets may change spec mid-stream, so no fixed span length.
    fn current_span_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}
