use log::warn;
use luxai_core::{TargetLanguage, ToolApi, TranslateRequest};

/// Shown in place of a translation when the request fails.
pub const TRANSLATOR_FALLBACK: &str = "Error during translation. Please try again.";

/// State for one translator session, including the language picker overlay.
/// Exactly one language is selected at all times, defaulting to the first
/// entry of [`TargetLanguage::ALL`].
#[derive(Debug, Default)]
pub struct TranslatorController {
    input: String,
    translation: String,
    selected: TargetLanguage,
    picker_open: bool,
    loading: bool,
}

impl TranslatorController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    /// Select a target language and close the picker. Never issues a request
    /// by itself; translation only happens on an explicit submit.
    pub fn select_language(&mut self, language: TargetLanguage) {
        self.selected = language;
        self.picker_open = false;
    }

    pub fn selected(&self) -> TargetLanguage {
        self.selected
    }

    /// Enabled iff not loading and the input is non-empty.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Run one request cycle. A no-op while disabled. The previous output is
    /// fully replaced, either by the new translation or by the fallback message.
    pub async fn submit(&mut self, api: &dyn ToolApi) {
        if !self.can_submit() {
            return;
        }
        self.loading = true;

        let request = TranslateRequest {
            text: self.input.clone(),
            target_language: self.selected,
        };
        match api.translate(&request).await {
            Ok(response) => self.translation = response.translation,
            Err(e) => {
                warn!("translate request failed: {}", e);
                self.translation = TRANSLATOR_FALLBACK.to_string();
            }
        }

        self.loading = false;
    }
}
