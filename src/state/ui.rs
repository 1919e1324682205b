//! Local UI chrome state (notices, panel expansion).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`comparison`,
//! `explore`) so rendering controls can evolve independently of data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::add_reason_message;
use crate::services::comparison::AddReason;
use crate::util::locale::Locale;

/// Visual tone of a notice banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Warning,
}

/// A short-lived message shown after a user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Sequence number assigned by [`UiState::show_notice`].
    pub seq: u64,
}

/// UI state for notices and panels.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
    pub notice_seq: u64,
    pub filters_expanded: bool,
}

impl UiState {
    /// Show a notice, replacing any current one. Returns its sequence number.
    pub fn show_notice(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, message: message.into(), seq: self.notice_seq });
        self.notice_seq
    }

    /// Clear the notice only if it is still the one numbered `seq`, so a
    /// stale auto-dismiss timer cannot hide a newer message.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}

/// Banner tone and text for a comparison add outcome.
#[must_use]
pub fn add_outcome_notice(locale: Locale, reason: AddReason) -> (NoticeKind, &'static str) {
    let kind = match reason {
        AddReason::Added => NoticeKind::Success,
        AddReason::Duplicate | AddReason::LimitReached => NoticeKind::Warning,
    };
    (kind, add_reason_message(locale, reason))
}
