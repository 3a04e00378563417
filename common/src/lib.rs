//! TA Toolkit Common Library
//!
//! Roster matching, folder-name parsing and the report record type.
//! Nothing in here touches the file system.

pub mod error;
pub mod folder;
pub mod matching;
pub mod roster;
pub mod slug;
pub mod types;

pub use error::{Error, Result};
pub use folder::{parse_folder_name, parse_team_label, raw_student_token, ParsedFolder};
pub use matching::{
    reconcile, similarity_ratio, ContainmentPolicy, MatchKind, MatchOptions, MatchOutcome,
    DEFAULT_THRESHOLD,
};
pub use roster::{Roster, RosterEntry};
pub use slug::slugify_name;
pub use types::{FolderRecord, REPORT_COLUMNS};
