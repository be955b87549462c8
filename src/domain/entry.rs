//! Entry - Journal Entry Data
//!
//! The sample record type browsed by the demo application.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique ID
    pub id: i64,
    /// Entry title
    pub title: String,
    /// Mood score 1-10, if the author recorded one
    pub mood: Option<i64>,
    /// Word count
    pub words: u32,
    /// When the entry was written
    pub written_at: DateTime<Utc>,
    /// Free-form tags
    pub tags: Vec<String>,
}

impl JournalEntry {
    pub fn tags_line(&self) -> String {
        self.tags.join(", ")
    }
}

fn day(month: u32, dom: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, dom, hour, 30, 0)
        .earliest()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// A fixed sample dataset for the demo window. Some entries have no mood
/// score so the table's null ordering is visible.
pub fn sample_entries() -> Vec<JournalEntry> {
    let raw: Vec<(&str, Option<i64>, u32, u32, u32, u32, &[&str])> = vec![
        ("Morning pages", Some(6), 412, 1, 5, 7, &["routine"]),
        ("Long run by the river", Some(8), 233, 1, 6, 18, &["exercise", "outdoors"]),
        ("Rough night", Some(2), 510, 1, 8, 23, &["sleep"]),
        ("Quick note", None, 41, 1, 9, 12, &[]),
        ("Lunch with Ana", Some(7), 180, 1, 12, 14, &["friends"]),
        ("Project kickoff", Some(5), 640, 1, 13, 19, &["work"]),
        ("Meditation streak day 30", Some(9), 95, 1, 15, 8, &["routine", "mindfulness"]),
        ("Rainy afternoon", Some(4), 320, 1, 18, 16, &["weather"]),
        ("Untitled", None, 12, 1, 19, 22, &[]),
        ("Weekend hike", Some(8), 455, 1, 24, 17, &["exercise", "outdoors"]),
        ("Tax paperwork", Some(3), 150, 1, 27, 20, &["chores"]),
        ("Called home", Some(7), 210, 1, 29, 21, &["family"]),
        ("Book club: chapter 5", Some(6), 380, 2, 2, 19, &["reading"]),
        ("Slow morning", Some(5), 260, 2, 4, 9, &["routine"]),
        ("Gym, finally", Some(7), 130, 2, 6, 18, &["exercise"]),
        ("Argument at work", Some(2), 720, 2, 9, 22, &["work"]),
        ("Making amends", Some(6), 410, 2, 10, 21, &["work"]),
        ("Snow day", Some(9), 300, 2, 13, 11, &["weather", "outdoors"]),
        ("Scratchpad", None, 28, 2, 14, 13, &[]),
        ("Valentine's dinner", Some(8), 350, 2, 14, 23, &["family"]),
        ("Planning spring garden", Some(7), 480, 2, 17, 15, &["home"]),
        ("Head cold", Some(3), 90, 2, 20, 10, &["health"]),
        ("Back on my feet", Some(6), 270, 2, 23, 18, &["health"]),
    ];

    raw.into_iter()
        .enumerate()
        .map(|(i, (title, mood, words, month, dom, hour, tags))| JournalEntry {
            id: i as i64 + 1,
            title: title.to_string(),
            mood,
            words,
            written_at: day(month, dom, hour),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_entries_have_unique_ids() {
        let entries = sample_entries();
        let mut ids: Vec<i64> = entries.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_sample_entries_include_missing_moods() {
        let entries = sample_entries();
        assert!(entries.iter().any(|entry| entry.mood.is_none()));
    }
}
