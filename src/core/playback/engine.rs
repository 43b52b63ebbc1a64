//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per current track)
//! - command loop + periodic position ticks
//!
//! Emits PlayerEvent back via a channel.
//! No Iced imports.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::decoder::FlacSource;
use super::{PlayerCommand, PlayerEvent};
use crate::error::{Error, Result};

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    sink: Option<Sink>,
    current_path: Option<PathBuf>,
    current_duration_ms: Option<u64>,
    // Track position that sink position 0 corresponds to (non-zero after a seek).
    start_ms: u64,

    // Survives track changes; applied to every new sink.
    volume: f32,
    tick: Duration,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>, volume: f32, tick: Duration) -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| Error::Output(e.to_string()))?;

        Ok(Self {
            stream,
            sink: None,
            current_path: None,
            current_duration_ms: None,
            start_ms: 0,
            volume: volume.clamp(0.0, 1.0),
            tick,
            event_tx,
        })
    }

    /// Command loop. Returns on `Shutdown` or once every `PlaybackController` is dropped.
    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        loop {
            match command_rx.recv_timeout(self.tick) {
                Ok(cmd) => {
                    let mut shutdown = self.handle_command(cmd);
                    while !shutdown {
                        let Ok(cmd) = command_rx.try_recv() else { break };
                        shutdown = self.handle_command(cmd);
                    }
                    if shutdown {
                        log::debug!("engine shutting down");
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Returns true when the loop should exit.
    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        log::debug!("engine command: {cmd:?}");

        match cmd {
            PlayerCommand::PlayFile(path) => {
                if let Err(e) = self.play_file(path) {
                    log::warn!("play failed: {e}");
                    self.emit(PlayerEvent::Error(e.to_string()));
                    self.emit(PlayerEvent::Stopped);
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    self.emit(PlayerEvent::Paused);
                }
            }
            PlayerCommand::Resume => {
                if let Some(sink) = &self.sink {
                    sink.play();
                    self.emit(PlayerEvent::Resumed);
                }
            }
            PlayerCommand::Stop => {
                self.stop_internal();
                self.emit(PlayerEvent::Stopped);
            }
            PlayerCommand::Seek(ms) => {
                if let Err(e) = self.seek(ms) {
                    log::warn!("seek to {ms} ms failed: {e}");
                    self.emit(PlayerEvent::Error(e.to_string()));
                }
            }
            PlayerCommand::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self) {
        let Some(sink) = &self.sink else { return };

        if sink.empty() {
            if let Some(path) = self.current_path.clone() {
                self.stop_internal();
                self.emit(PlayerEvent::TrackEnded { path });
                return;
            }
        }

        let position_ms = self.start_ms + sink.get_pos().as_millis() as u64;
        self.emit(PlayerEvent::Position { position_ms });
    }

    fn play_file(&mut self, path: PathBuf) -> Result<()> {
        self.stop_internal();
        self.open_at(path.clone(), 0, false)?;

        log::info!("playing {}", path.display());
        self.emit(PlayerEvent::Started {
            path,
            duration_ms: self.current_duration_ms,
            start_ms: 0,
        });
        Ok(())
    }

    /// Reopen the current file at `ms`, keeping the pause state.
    fn seek(&mut self, ms: u64) -> Result<()> {
        let Some(path) = self.current_path.clone() else {
            return Ok(());
        };
        let paused = self.sink.as_ref().is_some_and(Sink::is_paused);

        let ms = match self.current_duration_ms {
            Some(d) => ms.min(d.saturating_sub(1)),
            None => ms,
        };

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.open_at(path, ms, paused)?;

        self.emit(PlayerEvent::Seeked { position_ms: ms });
        Ok(())
    }

    fn open_at(&mut self, path: PathBuf, start_ms: u64, paused: bool) -> Result<()> {
        let (source, duration_ms) = FlacSource::open_at(&path, start_ms)?;

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        if paused {
            sink.pause();
        }
        sink.append(source);

        self.sink = Some(sink);
        self.current_path = Some(path);
        self.current_duration_ms = duration_ms;
        self.start_ms = start_ms;
        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_path = None;
        self.current_duration_ms = None;
        self.start_ms = 0;
    }
}
