use colored::*;
use luxai_core::ProductivityStats;

use crate::controllers::{MeetingNotesController, SummarizerController, TranslatorController};

/// Print the summary together with the derived input/output statistics.
pub fn print_summary(controller: &SummarizerController) {
    println!("{}", "AI Summary".blue().bold());
    println!("{}", controller.summary());
    println!();
    println!(
        "{} {} in / {} out",
        "Characters:".dimmed(),
        controller.input_chars(),
        controller.summary_chars()
    );
}

pub fn print_translation(controller: &TranslatorController) {
    println!(
        "{}",
        format!("Translation to {}", controller.selected().name())
            .blue()
            .bold()
    );
    println!("{}", controller.translation());
}

/// Print the notes; the timeline section is omitted entirely when empty.
pub fn print_notes(controller: &MeetingNotesController) {
    println!("{}", "Polished Notes".blue().bold());
    println!("{}", controller.notes());

    if !controller.timeline().is_empty() {
        println!();
        println!("{}", "Meeting Timeline".blue().bold());
        for entry in controller.timeline() {
            println!(
                "{}  [{}] {}",
                "•".yellow(),
                entry.timestamp.cyan(),
                entry.title.bold()
            );
            println!("   {}", entry.description.dimmed());
        }
    }
}

pub fn print_stats(stats: &ProductivityStats) {
    println!("{}", "Productivity Statistics".blue().bold());
    println!("  Summarizations:     {}", stats.total_summarizations);
    println!("  Translations:       {}", stats.total_translations);
    println!("  Meetings processed: {}", stats.total_meetings);
    println!("  Hours saved:        {}", stats.time_saved_hours);
    println!("  Languages:          {}", stats.languages_supported);
    println!("  Satisfaction:       {}%", stats.user_satisfaction);
    println!("  Avg processing:     {} ms", stats.avg_processing_time_ms);

    if !stats.monthly_trend.is_empty() {
        println!("  {}", "Monthly trend:".dimmed());
        for (month, count) in &stats.monthly_trend {
            println!("    {:<10} {}", month, count);
        }
    }
}
