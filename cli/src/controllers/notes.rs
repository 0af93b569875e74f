use anyhow::{bail, Result};
use log::warn;
use luxai_core::{MeetingUpload, ProgressFn, TimelineEntry, ToolApi, UploadFile};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// File extensions accepted for transcript uploads.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["txt", "pdf", "docx"];

/// Shown in place of the notes when the request fails.
pub const NOTES_FALLBACK: &str = "Error generating notes. Please try again.";

/// State for one meeting-notes session: the attached file and/or pasted
/// transcript, the generated notes and timeline, and the live upload
/// percentage.
#[derive(Debug, Default)]
pub struct MeetingNotesController {
    file: Option<UploadFile>,
    transcript: String,
    notes: String,
    timeline: Vec<TimelineEntry>,
    loading: bool,
    progress: Arc<AtomicU8>,
}

impl MeetingNotesController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an upload, rejecting files outside the allow-listed extensions.
    pub fn attach_file(&mut self, name: &str, bytes: Vec<u8>) -> Result<()> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            bail!(
                "Unsupported file type '{}'; accepted extensions: {}",
                name,
                ALLOWED_EXTENSIONS.join(", ")
            );
        }
        self.file = Some(UploadFile {
            name: name.to_string(),
            bytes,
        });
        Ok(())
    }

    pub fn set_transcript(&mut self, transcript: String) {
        self.transcript = transcript;
    }

    pub fn attached_file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    /// Enabled iff not loading and a file or non-empty transcript is present.
    pub fn can_submit(&self) -> bool {
        !self.loading && (self.file.is_some() || !self.transcript.is_empty())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Live view of the upload percentage for the shell's progress bar. The
    /// handle stays valid after the controller is dropped, so a late progress
    /// callback is a harmless store rather than an error.
    pub fn progress_handle(&self) -> Arc<AtomicU8> {
        Arc::clone(&self.progress)
    }

    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Relaxed)
    }

    /// Run one request cycle. A no-op while disabled. The upload percentage
    /// is surfaced through the progress handle during submission and reset to
    /// zero afterwards regardless of outcome. On success the notes and
    /// timeline are both replaced (absent timeline clears it); on failure the
    /// notes become the fallback message and the previous timeline is left in
    /// place.
    pub async fn submit(&mut self, api: &dyn ToolApi) {
        if !self.can_submit() {
            return;
        }
        self.loading = true;

        let upload = MeetingUpload {
            file: self.file.clone(),
            transcript: (!self.transcript.is_empty()).then(|| self.transcript.clone()),
        };
        let progress = Arc::clone(&self.progress);
        let on_progress: ProgressFn =
            Arc::new(move |percent| progress.store(percent, Ordering::Relaxed));

        match api.meeting_notes(upload, Some(on_progress)).await {
            Ok(response) => {
                self.notes = response.notes;
                self.timeline = response.timeline.unwrap_or_default();
            }
            Err(e) => {
                warn!("meeting-notes request failed: {}", e);
                self.notes = NOTES_FALLBACK.to_string();
            }
        }

        self.progress.store(0, Ordering::Relaxed);
        self.loading = false;
    }
}
