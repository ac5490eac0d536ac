use chrono::NaiveDate;
use education_planner::workflows::discovery::{Catalog, FamilyProfile, Selection};
use education_planner::workflows::planning::report::PlanReport;
use education_planner::workflows::planning::{
    render_report_on, PageLayout, WizardError, WizardSession, WizardStep,
};

fn catalog() -> Catalog {
    Catalog::builtin().expect("bundled catalog loads")
}

fn plan_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 1).expect("valid plan date")
}

fn session_at_results(catalog: &Catalog) -> WizardSession {
    let mut session = WizardSession::new();
    session.next().expect("welcome -> profile");
    session.set_child_age(13);
    session.set_budget(50_000);
    session.set_location("Flexible");
    session.set_names(Some("Jordan".to_string()), Some("Maya".to_string()));
    session.next().expect("profile -> discovery");

    assert!(!session.eligible(catalog).is_empty());
    session.toggle_school("collingwood");
    session.toggle_school("churchill-ib");
    session.next().expect("discovery -> results");
    session
}

#[test]
fn wizard_produces_a_personalized_plan() {
    let catalog = catalog();
    let session = session_at_results(&catalog);
    assert_eq!(session.step(), WizardStep::Results);

    let document = session
        .report(&catalog, plan_date(), PageLayout::default())
        .expect("report available on results step");
    let text = document.to_text();

    assert!(text.starts_with("Education Plan for Maya\n"));
    assert!(text.contains("Prepared for Jordan"));
    assert!(text.contains("Generated 2024-12-01"));
    assert!(text.contains("Schools selected: 2"));
    assert!(text.contains("Budget: Up to $50,000/yr"));
    assert!(text.contains("Child age: 13"));
    assert!(text.contains("1. Collingwood School (Private)"));
    assert!(text.contains("2. Sir Winston Churchill IB Programme (IB Program)"));
    assert!(text.contains("Tuition: $42,000/yr | Deadline: November 1"));
    assert!(text.contains("Register Maya for admissions tests (SSAT)"));
    assert!(text.contains("Action Plan: Long-term"));
    assert!(text.contains("24-18 months before: Research schools, attend information sessions"));
    assert!(text.contains("Decision Time (March-April)"));
    assert!(text.contains("KEY Education (Vancouver)"));

    let calendar_at = text.find("Application Timeline").expect("calendar printed");
    let advice_at = text.find("Action Plan: This Week").expect("advice printed");
    let support_at = text.find("Admissions Support").expect("support printed");
    assert!(calendar_at < advice_at && advice_at < support_at);

    let collingwood_at = text.find("Collingwood School").expect("collingwood listed");
    let churchill_at = text.find("Sir Winston Churchill").expect("churchill listed");
    assert!(collingwood_at < churchill_at);
}

#[test]
fn report_is_refused_before_results() {
    let catalog = catalog();
    let mut session = session_at_results(&catalog);
    session.back();

    let refused = session.report(&catalog, plan_date(), PageLayout::default());
    assert_eq!(refused, Err(WizardError::NotAtResults(WizardStep::Discovery)));
}

#[test]
fn report_defaults_names_and_skips_unknown_schools() {
    let catalog = catalog();
    let profile = FamilyProfile::new(8);
    let selection = Selection::new()
        .toggle("deer-lake-sda")
        .toggle("retired-school");

    let report = PlanReport::build(&profile, &selection, &catalog, plan_date());
    assert_eq!(report.title.heading, "Education Plan for your child");
    assert!(report.title.prepared_for.is_none());
    assert_eq!(report.overview.schools_selected, 1);
    assert_eq!(report.overview.budget_label, "Public only (Free)");
    assert_eq!(report.schools[0].id, "deer-lake-sda");
    assert_eq!(
        report.schools[0].preparation_tips,
        vec![
            "Apply several months early",
            "Ensure basic requirements met",
            "Show interest and fit",
            "Complete application thoroughly",
        ]
    );
    assert_eq!(report.schools[0].timeline[0].window, "18-12 months before");
    assert_eq!(report.calendar.len(), 5);
    assert!(report.support.is_empty());

    let all_bullets: Vec<&String> = report.advice.iter().flat_map(|s| &s.bullets).collect();
    assert!(all_bullets.iter().all(|bullet| !bullet.contains("SSAT")));

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["overview"]["schools_selected"], 1);
    assert_eq!(json["schools"][0]["competitiveness"], "low");
    assert_eq!(json["calendar"][4]["phase"], "Decision Time");
    assert!(json.get("support").is_none());
}

#[test]
fn narrow_layout_paginates_and_numbers_every_page() {
    let catalog = catalog();
    let selection = ["collingwood", "mulgrave", "st-georges", "crofton-house", "york-house"]
        .iter()
        .fold(Selection::new(), |selection, id| selection.toggle(id));
    let profile = FamilyProfile::new(14).with_budget(50_000);
    let layout = PageLayout::new(12, 40).expect("layout within limits");

    let document = render_report_on(&profile, &selection, &catalog, plan_date(), layout);
    assert!(document.page_count() > 1);

    for page in document.pages() {
        assert!(page.lines.len() <= 10, "page {} overflows", page.number);
        assert!(page.lines.first().is_some_and(|line| !line.is_empty()));
    }

    let text = document.to_text();
    let total = document.page_count();
    assert_eq!(text.matches('\u{000C}').count(), total - 1);
    for number in 1..=total {
        assert!(text.contains(&format!("Page {number} of {total}")));
    }
}

#[test]
fn saved_plan_matches_rendered_text() {
    let catalog = catalog();
    let session = session_at_results(&catalog);
    let document = session
        .report(&catalog, plan_date(), PageLayout::default())
        .expect("report renders");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("education-plan.txt");
    document.write_to(&path).expect("plan saved");

    let saved = std::fs::read_to_string(&path).expect("plan readable");
    assert_eq!(saved, document.to_text());
}
