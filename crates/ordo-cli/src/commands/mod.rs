pub mod decree;
pub mod rules;
pub mod tui;

use std::fs;
use std::path::Path;

use rand::Rng;

use ordo_core::RuleCatalog;
use ordo_ritual::RitualConfig;
use ordo_speech::{CommandSpeech, SilentSpeech, SpeechEngine};

/// Load the rule catalog: a JSON file when given, else the built-ins.
pub fn load_catalog(path: Option<&Path>) -> Result<RuleCatalog, String> {
    match path {
        Some(p) => {
            let json =
                fs::read_to_string(p).map_err(|e| format!("cannot read {}: {e}", p.display()))?;
            RuleCatalog::from_json_str(&json).map_err(|e| format!("{}: {e}", p.display()))
        }
        None => Ok(RuleCatalog::default()),
    }
}

/// Pick a speech backend: silent when muted or when no TTS program exists.
/// A missing synthesizer is degraded mode, never an error.
pub fn build_speech(mute: bool) -> Box<dyn SpeechEngine> {
    if mute {
        return Box::new(SilentSpeech);
    }
    match CommandSpeech::detect() {
        Some(engine) => Box::new(engine),
        None => Box::new(SilentSpeech),
    }
}

/// Assemble the engine configuration from CLI flags.
pub fn build_config(seed: Option<u64>, voice: &str, quick: bool) -> RitualConfig {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let config = RitualConfig::default()
        .with_seed(seed)
        .with_voice_pattern(voice);
    if quick { config.without_pacing() } else { config }
}
