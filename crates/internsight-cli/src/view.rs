//! Stateless rendering of recommendation cards and pages.
//!
//! Pure functions returning `String` so the output can be asserted on in
//! tests without capturing stdout. No mutation, no side effects.

use std::fmt::Write as _;

use internsight_core::{format_match_score, Recommendation, ResultPager};

pub(crate) const EMPTY_STATE: &str =
    "no recommendations matched your profile; try different skills or locations";

/// Renders one recommendation as a card: the five display fields plus the
/// formatted match score.
pub(crate) fn render_card(rec: &Recommendation) -> String {
    format!(
        "{}\n{}\n{}\nDuration: {}\nStipend: {}\nMatch Score: {}\n",
        rec.title,
        rec.company,
        rec.location,
        rec.duration,
        rec.stipend,
        format_match_score(rec.score)
    )
}

/// Renders the current page: a header line, the visible cards, or the
/// empty-state line when there are no results.
pub(crate) fn render_page(pager: &ResultPager) -> String {
    if pager.is_empty() {
        return format!("{EMPTY_STATE}\n");
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "page {}/{} ({} results)",
        pager.current_page() + 1,
        pager.page_count(),
        pager.len()
    );
    out.push('\n');

    for rec in pager.visible() {
        out.push_str(&render_card(rec));
        out.push('\n');
    }
    out
}

/// Renders the navigation prompt, listing only the actions that are
/// currently available.
pub(crate) fn render_prompt(pager: &ResultPager) -> String {
    let mut options = Vec::new();
    if pager.has_next() {
        options.push("[n]ext");
    }
    if pager.has_prev() {
        options.push("[p]rev");
    }
    options.push("[s]earch again");
    options.push("[q]uit");
    format!("{} > ", options.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, score: f64) -> Recommendation {
        Recommendation {
            internship_id: None,
            title: title.to_owned(),
            company: "Acme".to_owned(),
            location: "Pune".to_owned(),
            duration: "3 Months".to_owned(),
            stipend: "10000 /month".to_owned(),
            score,
        }
    }

    #[test]
    fn render_card_shows_all_fields_and_formatted_score() {
        let card = render_card(&record("Backend Intern", 0.8765));

        assert!(card.contains("Backend Intern"));
        assert!(card.contains("Acme"));
        assert!(card.contains("Pune"));
        assert!(card.contains("Duration: 3 Months"));
        assert!(card.contains("Stipend: 10000 /month"));
        assert!(card.contains("Match Score: 87.65%"));
    }

    #[test]
    fn render_page_empty_set_shows_empty_state() {
        let pager = ResultPager::new();
        let page = render_page(&pager);
        assert!(page.contains(EMPTY_STATE));
    }

    #[test]
    fn render_page_header_is_one_based() {
        let mut pager = ResultPager::new();
        pager.replace((0..7).map(|i| record(&format!("Intern {i}"), 0.5)).collect());

        assert!(render_page(&pager).contains("page 1/3 (7 results)"));

        pager.next_page();
        assert!(render_page(&pager).contains("page 2/3 (7 results)"));
    }

    #[test]
    fn render_page_shows_only_visible_cards() {
        let mut pager = ResultPager::new();
        pager.replace((0..5).map(|i| record(&format!("Intern {i}"), 0.5)).collect());

        let page = render_page(&pager);
        assert!(page.contains("Intern 0"));
        assert!(page.contains("Intern 2"));
        assert!(!page.contains("Intern 3"));
    }

    #[test]
    fn render_prompt_hides_navigation_on_single_page() {
        let mut pager = ResultPager::new();
        pager.replace(vec![record("Only", 0.9)]);

        let prompt = render_prompt(&pager);
        assert!(!prompt.contains("[n]ext"));
        assert!(!prompt.contains("[p]rev"));
        assert!(prompt.contains("[s]earch again"));
        assert!(prompt.contains("[q]uit"));
    }

    #[test]
    fn render_prompt_tracks_page_position() {
        let mut pager = ResultPager::new();
        pager.replace((0..7).map(|i| record(&format!("Intern {i}"), 0.5)).collect());

        // First page: next only.
        let prompt = render_prompt(&pager);
        assert!(prompt.contains("[n]ext"));
        assert!(!prompt.contains("[p]rev"));

        // Middle page: both.
        pager.next_page();
        let prompt = render_prompt(&pager);
        assert!(prompt.contains("[n]ext"));
        assert!(prompt.contains("[p]rev"));

        // Last page: prev only.
        pager.next_page();
        let prompt = render_prompt(&pager);
        assert!(!prompt.contains("[n]ext"));
        assert!(prompt.contains("[p]rev"));
    }

    #[test]
    fn render_prompt_on_empty_set_offers_search_and_quit_only() {
        let pager = ResultPager::new();
        let prompt = render_prompt(&pager);
        assert_eq!(prompt, "[s]earch again  [q]uit > ");
    }
}
