use log::warn;
use luxai_core::{SummarizeRequest, SummaryLanguage, ToolApi};

/// Minimum input length before a summarization can be submitted.
pub const MIN_INPUT_CHARS: usize = 100;

/// Shown in place of a summary when the request fails.
pub const SUMMARIZER_FALLBACK: &str = "Error generating summary. Please try again.";

/// State for one summarizer session: input, output language, the last result
/// and the in-flight flag.
#[derive(Debug, Default)]
pub struct SummarizerController {
    input: String,
    summary: String,
    language: SummaryLanguage,
    loading: bool,
}

impl SummarizerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn set_language(&mut self, language: SummaryLanguage) {
        self.language = language;
    }

    /// Submission is refused below the minimum length; exactly
    /// [`MIN_INPUT_CHARS`] characters enables it.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.input.chars().count() >= MIN_INPUT_CHARS
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn language(&self) -> SummaryLanguage {
        self.language
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Derived counter over the current input; never stored separately.
    pub fn input_chars(&self) -> usize {
        self.input.chars().count()
    }

    /// Derived counter over the current output.
    pub fn summary_chars(&self) -> usize {
        self.summary.chars().count()
    }

    /// Run one request cycle. A no-op while disabled. The previous output is
    /// fully replaced, either by the new summary or by the fallback message.
    pub async fn submit(&mut self, api: &dyn ToolApi) {
        if !self.can_submit() {
            return;
        }
        self.loading = true;

        let request = SummarizeRequest {
            text: self.input.clone(),
            language: self.language,
        };
        match api.summarize(&request).await {
            Ok(response) => self.summary = response.summary,
            Err(e) => {
                warn!("summarize request failed: {}", e);
                self.summary = SUMMARIZER_FALLBACK.to_string();
            }
        }

        self.loading = false;
    }
}
