//! Web Speech API adapter for the desktop webview.
//!
//! The drill runs inside a webview, so vocalization goes through
//! `window.speechSynthesis` via an evaluated script. The runtime may lack
//! the capability entirely; the script guards for that and the adapter
//! reports only whether a request was issued.

use dioxus::document;
use log::debug;

use services::{LANG_PREFERENCE, SpeechAdapter, Utterance};

/// Builds the one-shot vocalization script for an utterance.
///
/// Any in-flight utterance is canceled first; a new word supersedes the
/// previous one. Voice selection walks the language-tag preference order
/// and falls back to whatever voice the engine has.
#[must_use]
pub fn speech_synthesis_script(utterance: &Utterance) -> String {
    let prefs = LANG_PREFERENCE
        .iter()
        .map(|tag| format!("{tag:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"(function() {{
                    if (!('speechSynthesis' in window)) return;
                    try {{
                        window.speechSynthesis.cancel();
                        const u = new SpeechSynthesisUtterance({text:?});
                        const voices = window.speechSynthesis.getVoices() || [];
                        const prefs = [{prefs}];
                        let voice = null;
                        for (const tag of prefs) {{
                            voice = voices.find(v => (v.lang || '').toLowerCase().startsWith(tag));
                            if (voice) break;
                        }}
                        if (!voice) voice = voices[0] || null;
                        if (voice) u.voice = voice;
                        u.rate = {rate};
                        u.pitch = {pitch};
                        u.volume = {volume};
                        window.speechSynthesis.speak(u);
                    }} catch (_) {{}}
                }})();"#,
        text = utterance.text,
        prefs = prefs,
        rate = utterance.rate,
        pitch = utterance.pitch,
        volume = utterance.volume,
    )
}

/// `SpeechAdapter` over the webview's `speechSynthesis`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebViewSpeech;

impl SpeechAdapter for WebViewSpeech {
    fn speak(&self, utterance: &Utterance) -> bool {
        debug!("speaking {:?}", utterance.text);
        let _ = document::eval(&speech_synthesis_script(utterance));
        true
    }
}
