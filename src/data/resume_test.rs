use super::*;

#[test]
fn first_name_takes_leading_token() {
    assert_eq!(first_name(&DATA), "Sayeeda");
}

#[test]
fn first_name_falls_back_for_empty_name() {
    let mut resume = DATA;
    resume.name = "";
    assert_eq!(first_name(&resume), "User");
    resume.name = "   ";
    assert_eq!(first_name(&resume), "User");
}

#[test]
fn period_formats_closed_range() {
    assert_eq!(period("Jul 2024", Some("Aug 2024")), "Jul 2024 - Aug 2024");
}

#[test]
fn period_marks_open_range_as_present() {
    assert_eq!(period("Jul 2024", None), "Jul 2024 - Present");
}

#[test]
fn record_has_required_hero_fields() {
    assert!(!DATA.name.is_empty());
    assert!(!DATA.initials.is_empty());
    assert!(!DATA.description.is_empty());
    assert!(!DATA.summary.is_empty());
}

#[test]
fn every_project_has_a_link_and_tags() {
    for project in DATA.projects {
        assert!(!project.links.is_empty(), "{} has no links", project.title);
        assert!(!project.technologies.is_empty(), "{} has no tags", project.title);
    }
}

#[test]
fn work_entries_have_ranges() {
    for work in DATA.work {
        assert!(!work.start.is_empty());
        // Closed entries carry an end marker; open ones render as Present.
        let rendered = period(work.start, work.end);
        assert!(rendered.starts_with(work.start));
    }
}

#[test]
fn link_kind_labels_are_stable() {
    assert_eq!(LinkKind::Website.label(), "Website");
    assert_eq!(LinkKind::Source.label(), "Source");
}
