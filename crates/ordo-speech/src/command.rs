//! Subprocess-backed speech engine.
//!
//! Drives a system TTS program (`espeak-ng`, `espeak`, `say`, or `spd-say`)
//! in a worker thread. The thread watches both the child process and the
//! utterance's cancel flag, killing the child on cancellation and marking the
//! utterance done when the child exits — success or failure alike, since the
//! caller treats both the same way.

use std::env;
use std::ffi::OsStr;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::engine::SpeechEngine;
use crate::error::SpeechResult;
use crate::utterance::{DEFAULT_WPM, Utterance, estimate_spoken_duration};
use crate::voice::Voice;

/// How often the watcher thread polls the child and the cancel flag.
const WATCH_INTERVAL: Duration = Duration::from_millis(25);

/// A TTS program this engine knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtsProgram {
    /// `espeak-ng`, the maintained espeak fork.
    EspeakNg,
    /// Classic `espeak`.
    Espeak,
    /// macOS `say`.
    Say,
    /// speech-dispatcher's `spd-say`.
    SpdSay,
}

impl TtsProgram {
    /// All known programs in detection-preference order.
    pub const ALL: [TtsProgram; 4] = [
        TtsProgram::EspeakNg,
        TtsProgram::Espeak,
        TtsProgram::Say,
        TtsProgram::SpdSay,
    ];

    /// The binary name looked up on `PATH`.
    pub fn binary(self) -> &'static str {
        match self {
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
            Self::Say => "say",
            Self::SpdSay => "spd-say",
        }
    }

    /// Voices this program offers, in preference-fallback order.
    fn voices(self) -> Vec<Voice> {
        match self {
            Self::EspeakNg | Self::Espeak => vec![
                Voice::new("en+m1", "English Male 1"),
                Voice::new("en+m2", "English Male 2"),
                Voice::new("en+m3", "English Male 3"),
                Voice::new("en+f1", "English Female 1"),
                Voice::new("en+f2", "English Female 2"),
                Voice::new("en+f3", "English Female 3"),
            ],
            Self::Say => vec![
                Voice::new("Daniel", "Daniel (British Male)"),
                Voice::new("Alex", "Alex (American Male)"),
                Voice::new("Samantha", "Samantha (American Female)"),
                Voice::new("Karen", "Karen (Australian Female)"),
            ],
            // spd-say picks its own voice from the dispatcher config.
            Self::SpdSay => Vec::new(),
        }
    }

    /// Build the command line for speaking `text` with `voice`.
    fn command(self, text: &str, voice: Option<&Voice>, wpm: u32) -> Command {
        let mut cmd = Command::new(self.binary());
        match self {
            Self::EspeakNg | Self::Espeak => {
                cmd.arg("-v").arg(voice.map_or("en", |v| v.id.as_str()));
                cmd.arg("-s").arg(wpm.to_string());
                cmd.arg(text);
            }
            Self::Say => {
                if let Some(v) = voice {
                    cmd.arg("-v").arg(&v.id);
                }
                cmd.arg("-r").arg(wpm.to_string());
                cmd.arg(text);
            }
            Self::SpdSay => {
                // -w blocks until the utterance finishes, which is what the
                // watcher thread needs to observe completion.
                cmd.arg("-w").arg(text);
            }
        }
        cmd
    }
}

/// Speech engine that shells out to a system TTS program.
#[derive(Debug)]
pub struct CommandSpeech {
    program: TtsProgram,
    voices: Vec<Voice>,
    wpm: u32,
}

impl CommandSpeech {
    /// Use a specific TTS program.
    pub fn with_program(program: TtsProgram) -> Self {
        Self {
            program,
            voices: program.voices(),
            wpm: DEFAULT_WPM,
        }
    }

    /// Override the speaking rate in words per minute.
    pub fn with_wpm(mut self, wpm: u32) -> Self {
        self.wpm = wpm.max(1);
        self
    }

    /// Find the first known TTS program on `PATH`, if any.
    pub fn detect() -> Option<Self> {
        TtsProgram::ALL
            .into_iter()
            .find(|p| on_path(p.binary()))
            .map(Self::with_program)
    }

    /// The program this engine drives.
    pub fn program(&self) -> TtsProgram {
        self.program
    }
}

impl SpeechEngine for CommandSpeech {
    fn name(&self) -> &str {
        self.program.binary()
    }

    fn voices(&self) -> &[Voice] {
        &self.voices
    }

    fn speak(&mut self, text: &str, voice: Option<&Voice>) -> SpeechResult<Utterance> {
        let mut child = self
            .program
            .command(text, voice, self.wpm)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let done = Arc::new(AtomicBool::new(false));
        let cancel = Arc::new(AtomicBool::new(false));
        let thread_done = Arc::clone(&done);
        let thread_cancel = Arc::clone(&cancel);

        thread::spawn(move || {
            loop {
                if thread_cancel.load(Ordering::Relaxed) {
                    let _ = child.kill();
                    let _ = child.wait();
                    break;
                }
                match child.try_wait() {
                    Ok(Some(_)) => break,
                    Ok(None) => thread::sleep(WATCH_INTERVAL),
                    Err(_) => break,
                }
            }
            thread_done.store(true, Ordering::Relaxed);
        });

        let estimate = estimate_spoken_duration(text, self.wpm);
        Ok(Utterance::new(done, cancel, Some(estimate)))
    }
}

/// Whether `binary` exists in any `PATH` directory.
fn on_path(binary: &str) -> bool {
    env::var_os("PATH").is_some_and(|paths| path_contains(&paths, binary))
}

/// Whether `binary` exists in any directory of a `PATH`-style value.
fn path_contains(paths: &OsStr, binary: &str) -> bool {
    env::split_paths(paths).any(|dir| dir.join(binary).is_file())
}
