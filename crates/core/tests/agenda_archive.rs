//! Integration test: run the archiver over an in-memory agenda, then build
//! and materialize the archive page from its report.

use chrono::{NaiveDate, NaiveDateTime};
use vitrine_core::archive::{
    Agenda, ArchiveLink, ArchivePage, EventStatus, archive_past_events, classify,
};

fn archive_page(entries: Vec<String>) -> ArchivePage {
    ArchivePage {
        title: "Archives".into(),
        stylesheet_url: "https://example.org/style.css".into(),
        background_url: "https://example.org/images/fond.jpg".into(),
        return_url: "https://example.org/".into(),
        return_label: "Retour".into(),
        entries,
    }
}

struct Entry {
    id: u32,
    label: Option<String>,
    html: String,
}

#[derive(Default)]
struct VecAgenda {
    entries: Vec<Entry>,
    removals: Vec<u32>,
}

impl VecAgenda {
    fn with_labels(labels: &[&str]) -> Self {
        let entries = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Entry {
                id: i as u32,
                label: Some((*label).to_string()),
                html: format!(
                    "<li class=\"agenda-item\"><span class=\"agenda-date\">{label}</span></li>"
                ),
            })
            .collect();
        Self {
            entries,
            removals: Vec::new(),
        }
    }

    fn live_labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| e.label.as_deref())
            .collect()
    }
}

impl Agenda for VecAgenda {
    type Entry = u32;

    fn entries(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.id).collect()
    }

    fn label(&self, entry: &u32) -> Option<String> {
        self.entries
            .iter()
            .find(|e| e.id == *entry)
            .and_then(|e| e.label.clone())
    }

    fn snapshot(&self, entry: &u32) -> String {
        self.entries
            .iter()
            .find(|e| e.id == *entry)
            .map(|e| e.html.clone())
            .unwrap_or_default()
    }

    fn remove(&mut self, entry: &u32) {
        self.removals.push(*entry);
        self.entries.retain(|e| e.id != *entry);
    }
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn past_future_and_undated_entries() {
    let mut agenda = VecAgenda::with_labels(&["01/01/20", "01/01/30", "not-a-date"]);
    let report = archive_past_events(&mut agenda, midnight(2025, 6, 1));

    assert_eq!(report.archived.len(), 1);
    assert_eq!(report.kept, 1);
    assert_eq!(report.undated, 1);
    assert!(report.archived[0].markup.contains("01/01/20"));
    assert_eq!(
        report.archived[0].date,
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap()
    );
    assert_eq!(agenda.live_labels(), vec!["01/01/30", "not-a-date"]);
    assert_eq!(agenda.removals, vec![0]);

    let (container, mut link) = report
        .affordance::<_, String>(Some("#agenda"), archive_page)
        .unwrap();
    assert_eq!(container, "#agenda");
    assert_eq!(link.entry_count(), 1);

    let mut rendered = Vec::new();
    for _ in 0..2 {
        let url = link
            .activate(|html| {
                rendered.push(html.to_string());
                Ok::<_, String>("blob:https://example.org/1".to_string())
            })
            .unwrap();
        assert_eq!(url, "blob:https://example.org/1");
    }
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].contains("<span class=\"agenda-date\">01/01/20</span>"));
    assert!(!rendered[0].contains("01/01/30"));
}

#[test]
fn second_run_sees_pruned_agenda() {
    let mut agenda = VecAgenda::with_labels(&["10/10/21", "11/11/22", "12/12/40"]);
    let now = midnight(2025, 1, 1);

    let first = archive_past_events(&mut agenda, now);
    assert_eq!(first.archived.len(), 2);

    let second = archive_past_events(&mut agenda, now);
    assert!(!second.has_archived());
    assert_eq!(second.kept, 1);
    assert_eq!(agenda.removals, vec![0, 1]);
    assert_eq!(agenda.live_labels(), vec!["12/12/40"]);
}

#[test]
fn nothing_past_means_no_affordance() {
    let mut agenda = VecAgenda::with_labels(&["01/01/30", "TBA"]);
    let report = archive_past_events(&mut agenda, midnight(2025, 6, 1));
    assert!(!report.has_archived());
    assert!(agenda.removals.is_empty());
    let link: Option<(&str, ArchiveLink<String>)> = report.affordance(Some("#agenda"), archive_page);
    assert!(link.is_none());
}

#[test]
fn one_affordance_for_all_past_entries() {
    let mut agenda = VecAgenda::with_labels(&["01/01/19", "02/02/20", "03/03/21", "01/01/30"]);
    let report = archive_past_events(&mut agenda, midnight(2025, 6, 1));
    let (_, link) = report
        .affordance::<_, String>(Some(()), archive_page)
        .unwrap();
    assert_eq!(link.entry_count(), 3);
    assert!(!link.resource().is_materialized());
}

#[test]
fn missing_container_still_archives_without_affordance() {
    let mut agenda = VecAgenda::with_labels(&["01/01/20", "01/01/30"]);
    let report = archive_past_events(&mut agenda, midnight(2025, 6, 1));

    // Past entries leave the page even with nowhere to put the link.
    assert!(report.has_archived());
    assert_eq!(agenda.live_labels(), vec!["01/01/30"]);

    let mut built = false;
    let link = report.affordance::<(), String>(None, |entries| {
        built = true;
        archive_page(entries)
    });
    assert!(link.is_none());
    assert!(!built);
}

#[test]
fn documented_date_examples() {
    let now = midnight(2025, 1, 1);
    assert_eq!(
        classify("Vernissage le 15/03/24", now),
        EventStatus::Past(
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap()
        )
    );
    // Two-digit years always land in 20xx.
    assert!(matches!(
        classify("15/03/99", now),
        EventStatus::Upcoming(at) if at.format("%Y").to_string() == "2099"
    ));
}
