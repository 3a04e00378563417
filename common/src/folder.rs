//! Student folder name parsing
//!
//! LMS exports name each submission folder like
//! `martinkalandaphriri_Team_26_submission`: the student token comes first,
//! a team/group number may appear anywhere.

use crate::matching::{reconcile, MatchOptions, MatchOutcome};
use crate::roster::Roster;
use regex::Regex;

/// Result of parsing one folder name
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFolder {
    /// Part before the first underscore
    pub student_name_raw: String,
    /// Roster match for the raw token
    pub matched: MatchOutcome,
    /// Label taken from the folder name, e.g. `Team 26`
    pub team_parsed: String,
}

/// The part of the folder name before the first underscore.
pub fn raw_student_token(folder_name: &str) -> &str {
    folder_name
        .split_once('_')
        .map(|(head, _)| head)
        .unwrap_or(folder_name)
}

/// Find `team`/`group` followed by a number, e.g. `Team_26`, `group16`,
/// `Group 24`, and normalize it to `Team 26` / `Group 16`.
pub fn parse_team_label(folder_name: &str) -> String {
    lazy_static::lazy_static! {
        static ref TEAM_RE: Regex = Regex::new(r"(?i)(team|group)[ _]?(\d+)").unwrap();
    }

    match TEAM_RE.captures(folder_name) {
        Some(cap) => format!("{} {}", capitalize(&cap[1]), &cap[2]),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split a folder name into its raw student token and team label, and
/// reconcile the token against the roster.
pub fn parse_folder_name(folder_name: &str, roster: &Roster, options: &MatchOptions) -> ParsedFolder {
    let student_name_raw = raw_student_token(folder_name).to_string();
    let matched = reconcile(&student_name_raw, roster, options);
    let team_parsed = parse_team_label(folder_name);

    ParsedFolder {
        student_name_raw,
        matched,
        team_parsed,
    }
}
