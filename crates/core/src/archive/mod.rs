//! Moves past agenda entries out of the live page into a generated archive.
//!
//! The run is synchronous and compares every entry against one `now`
//! captured by the caller. Each dated entry ends up either still in the
//! agenda or in the returned report, never both. Undated entries are left
//! alone.

pub mod date;
pub mod page;
pub mod resource;

use chrono::NaiveDateTime;

pub use date::{EventStatus, classify, parse_event_date};
pub use page::ArchivePage;
pub use resource::{ArchiveLink, ArchiveResource};

/// A live list of agenda entries.
///
/// Implemented over the DOM by the wasm adapter and over plain vectors in
/// tests.
pub trait Agenda {
    type Entry;

    /// Entries in document order.
    fn entries(&self) -> Vec<Self::Entry>;

    /// Text of the entry's date label, `None` when it has no label element.
    fn label(&self, entry: &Self::Entry) -> Option<String>;

    /// Deep copy of the entry's rendered markup.
    fn snapshot(&self, entry: &Self::Entry) -> String;

    fn remove(&mut self, entry: &Self::Entry);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedEntry {
    pub date: NaiveDateTime,
    pub markup: String,
}

/// Outcome of one archiver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Past entries, in document order, already removed from the agenda.
    pub archived: Vec<ArchivedEntry>,
    /// Dated entries still upcoming.
    pub kept: usize,
    /// Entries without a usable date, left untouched.
    pub undated: usize,
}

impl ArchiveReport {
    pub fn has_archived(&self) -> bool {
        !self.archived.is_empty()
    }

    pub fn markup(&self) -> Vec<String> {
        self.archived.iter().map(|e| e.markup.clone()).collect()
    }

    /// The single archive link to offer, paired with the `container` that
    /// will hold it.
    ///
    /// `None` when nothing was archived or there is no container. `page`
    /// builds the archive document from the archived markup.
    pub fn affordance<C, H>(
        &self,
        container: Option<C>,
        page: impl FnOnce(Vec<String>) -> ArchivePage,
    ) -> Option<(C, ArchiveLink<H>)> {
        if !self.has_archived() {
            return None;
        }
        let container = container?;
        Some((container, ArchiveLink::new(page(self.markup()))))
    }
}

/// Archive every entry of `agenda` whose day ended before `now`.
pub fn archive_past_events<A: Agenda>(agenda: &mut A, now: NaiveDateTime) -> ArchiveReport {
    let mut report = ArchiveReport::default();
    for entry in agenda.entries() {
        let status = match agenda.label(&entry) {
            Some(label) => classify(&label, now),
            None => EventStatus::Undated,
        };
        match status {
            EventStatus::Past(date) => {
                let markup = agenda.snapshot(&entry);
                agenda.remove(&entry);
                tracing::debug!(%date, "archived past event");
                report.archived.push(ArchivedEntry { date, markup });
            }
            EventStatus::Upcoming(_) => report.kept += 1,
            EventStatus::Undated => report.undated += 1,
        }
    }
    tracing::debug!(
        archived = report.archived.len(),
        kept = report.kept,
        undated = report.undated,
        "agenda archived"
    );
    report
}
