use clap::{Parser, Subcommand};
use luxai_core::{SummaryLanguage, TargetLanguage};
use std::path::PathBuf;

/// Command-line client for the LuxAI productivity suite
#[derive(Parser, Debug)]
#[command(name = "luxai", author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the LuxAI backend API
    #[arg(long, env = "LUXAI_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn lengthy content into a concise summary
    Summarize {
        /// Text to summarize; read from --file or stdin when omitted
        text: Option<String>,

        /// Read the input text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output language for the summary
        #[arg(short, long, default_value = "english")]
        language: SummaryLanguage,
    },

    /// Translate English text into a target language
    Translate {
        /// Text to translate; read from --file or stdin when omitted
        text: Option<String>,

        /// Read the input text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Target language code (es, fr, de, it, pt, ja, zh, ko)
        #[arg(short = 't', long = "to", default_value = "es")]
        to: TargetLanguage,
    },

    /// Generate polished notes and a timeline from a meeting transcript
    MeetingNotes {
        /// Transcript file to upload (txt, pdf or docx)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pasted transcript text
        #[arg(short, long)]
        transcript: Option<String>,
    },

    /// Show productivity statistics from the backend
    Stats,

    /// Check that the backend is reachable and healthy
    Health,
}
