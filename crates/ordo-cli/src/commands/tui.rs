use std::path::Path;

pub fn run(rules: Option<&Path>, seed: Option<u64>, voice: &str, mute: bool) -> Result<(), String> {
    let catalog = super::load_catalog(rules)?;
    let speech = super::build_speech(mute);
    let config = super::build_config(seed, voice, false);
    crate::tui::run(catalog, speech, config)
}
