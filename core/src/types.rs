use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Output language for the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLanguage {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl SummaryLanguage {
    pub const ALL: [SummaryLanguage; 4] = [
        SummaryLanguage::English,
        SummaryLanguage::Spanish,
        SummaryLanguage::French,
        SummaryLanguage::German,
    ];

    /// Wire name of the language, as the `/summarize/` endpoint expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLanguage::English => "english",
            SummaryLanguage::Spanish => "spanish",
            SummaryLanguage::French => "french",
            SummaryLanguage::German => "german",
        }
    }
}

impl fmt::Display for SummaryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SummaryLanguage::ALL
            .into_iter()
            .find(|language| language.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported summary language '{}'", s))
    }
}

/// Target language for the translator. The order is fixed; the first entry is
/// the default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Es,
    Fr,
    De,
    It,
    Pt,
    Ja,
    Zh,
    Ko,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 8] = [
        TargetLanguage::Es,
        TargetLanguage::Fr,
        TargetLanguage::De,
        TargetLanguage::It,
        TargetLanguage::Pt,
        TargetLanguage::Ja,
        TargetLanguage::Zh,
        TargetLanguage::Ko,
    ];

    /// Wire code sent as `target_language`.
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Es => "es",
            TargetLanguage::Fr => "fr",
            TargetLanguage::De => "de",
            TargetLanguage::It => "it",
            TargetLanguage::Pt => "pt",
            TargetLanguage::Ja => "ja",
            TargetLanguage::Zh => "zh",
            TargetLanguage::Ko => "ko",
        }
    }

    /// Human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Es => "Spanish",
            TargetLanguage::Fr => "French",
            TargetLanguage::De => "German",
            TargetLanguage::It => "Italian",
            TargetLanguage::Pt => "Portuguese",
            TargetLanguage::Ja => "Japanese",
            TargetLanguage::Zh => "Chinese",
            TargetLanguage::Ko => "Korean",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetLanguage::ALL
            .into_iter()
            .find(|language| {
                language.code().eq_ignore_ascii_case(s) || language.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| {
                let codes: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.code()).collect();
                format!("unsupported language '{}', expected one of {}", s, codes.join(", "))
            })
    }
}

/// Request to the `/summarize/` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub language: SummaryLanguage,
}

/// Response from the `/summarize/` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Request to the `/translate/` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: TargetLanguage,
}

/// Response from the `/translate/` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

/// A file attached to a meeting-notes submission.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Payload for the `/meeting-notes/` endpoint. The file part is included only
/// when a file was chosen, the transcript part only when text is non-empty;
/// both may be present at once.
#[derive(Debug, Clone, Default)]
pub struct MeetingUpload {
    pub file: Option<UploadFile>,
    pub transcript: Option<String>,
}

impl MeetingUpload {
    /// Total payload bytes across both parts, used as the progress denominator.
    pub fn total_bytes(&self) -> u64 {
        let file_len = self.file.as_ref().map_or(0, |f| f.bytes.len() as u64);
        let transcript_len = self.transcript.as_ref().map_or(0, |t| t.len() as u64);
        file_len + transcript_len
    }
}

/// One discrete moment extracted from a meeting transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: String,
    pub title: String,
    pub description: String,
}

/// Response from the `/meeting-notes/` endpoint. `timeline` is absent for
/// responses that carry no key moments.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingNotesResponse {
    pub notes: String,
    #[serde(default)]
    pub timeline: Option<Vec<TimelineEntry>>,
}

/// Response from the `/health/` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Response from the `/stats/` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ProductivityStats {
    pub total_summarizations: u64,
    pub total_translations: u64,
    pub total_meetings: u64,
    pub time_saved_hours: u64,
    pub languages_supported: u64,
    pub user_satisfaction: u64,
    pub avg_processing_time_ms: u64,
    #[serde(default)]
    pub monthly_trend: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summarize_request_serializes_contract_fields() {
        let request = SummarizeRequest {
            text: "some long text".to_string(),
            language: SummaryLanguage::German,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"text": "some long text", "language": "german"}));
    }

    #[test]
    fn translate_request_serializes_language_code() {
        let request = TranslateRequest {
            text: "hello".to_string(),
            target_language: TargetLanguage::Ja,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"text": "hello", "target_language": "ja"}));
    }

    #[test]
    fn target_language_parses_codes_and_names() {
        assert_eq!("es".parse::<TargetLanguage>().unwrap(), TargetLanguage::Es);
        assert_eq!("KO".parse::<TargetLanguage>().unwrap(), TargetLanguage::Ko);
        assert_eq!(
            "Portuguese".parse::<TargetLanguage>().unwrap(),
            TargetLanguage::Pt
        );
        assert!("xx".parse::<TargetLanguage>().is_err());
    }

    #[test]
    fn first_target_language_is_default() {
        assert_eq!(TargetLanguage::default(), TargetLanguage::ALL[0]);
    }

    #[test]
    fn timeline_is_none_when_absent() {
        let response: MeetingNotesResponse =
            serde_json::from_value(json!({"notes": "done"})).unwrap();
        assert!(response.timeline.is_none());
    }

    #[test]
    fn timeline_preserves_received_order() {
        let response: MeetingNotesResponse = serde_json::from_value(json!({
            "notes": "done",
            "timeline": [
                {"timestamp": "5 min", "title": "Kickoff", "description": "intro"},
                {"timestamp": "10 min", "title": "Budget", "description": "numbers"}
            ]
        }))
        .unwrap();
        let timeline = response.timeline.unwrap();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].title, "Kickoff");
        assert_eq!(timeline[1].timestamp, "10 min");
    }

    #[test]
    fn stats_deserialize_from_backend_shape() {
        let stats: ProductivityStats = serde_json::from_value(json!({
            "total_summarizations": 1250,
            "total_translations": 890,
            "total_meetings": 450,
            "time_saved_hours": 240,
            "languages_supported": 50,
            "user_satisfaction": 98,
            "avg_processing_time_ms": 2500,
            "monthly_trend": {"January": 120, "February": 150}
        }))
        .unwrap();
        assert_eq!(stats.total_meetings, 450);
        assert_eq!(stats.monthly_trend.len(), 2);
    }

    #[test]
    fn upload_total_counts_both_parts() {
        let upload = MeetingUpload {
            file: Some(UploadFile {
                name: "meeting.txt".to_string(),
                bytes: vec![0u8; 10],
            }),
            transcript: Some("notes".to_string()),
        };
        assert_eq!(upload.total_bytes(), 15);
    }
}
