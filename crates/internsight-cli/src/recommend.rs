//! The `recommend` command: submit a profile, then page through results.
//!
//! The pager loop owns one [`ResultPager`] for the session. Submissions go
//! through [`ResultPager::apply`], so a failed resubmission leaves the
//! previously displayed records and page untouched; only an error line is
//! printed. The loop ends on `q` or end of input.

use std::io::{self, BufRead, Write};

use internsight_client::RecommendClient;
use internsight_core::{ProfileDraft, ProfileField, ResultPager};

use crate::view;

/// One action in the interactive pager loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PagerCommand {
    Next,
    Prev,
    NewSearch,
    Quit,
}

/// Parses a line of user input into a pager command.
///
/// Accepts single letters and full words, case-insensitive. Returns `None`
/// for anything unrecognized so the loop can re-prompt.
pub(crate) fn parse_pager_command(input: &str) -> Option<PagerCommand> {
    match input.trim().to_lowercase().as_str() {
        "n" | "next" => Some(PagerCommand::Next),
        "p" | "prev" | "previous" => Some(PagerCommand::Prev),
        "s" | "search" => Some(PagerCommand::NewSearch),
        "q" | "quit" | "exit" => Some(PagerCommand::Quit),
        _ => None,
    }
}

/// Submits the profile built from the CLI flags and pages through results.
///
/// With `--json` the raw result array is printed and the pager loop is
/// skipped. The first submission has no prior results to preserve, so its
/// failure is propagated as the command's error.
///
/// # Errors
///
/// Returns an error if the first submission fails or stdin/stdout I/O fails.
pub(crate) async fn run_recommend(
    client: &RecommendClient,
    skills: &str,
    interest: &str,
    locations: &str,
    json: bool,
) -> anyhow::Result<()> {
    let mut draft = ProfileDraft::new(skills, interest, locations);

    let records = client.recommendations(&draft.to_profile()).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut pager = ResultPager::new();
    pager.replace(records);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", view::render_page(&pager));
        print!("{}", view::render_prompt(&pager));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // end of input
        };

        match parse_pager_command(&line?) {
            Some(PagerCommand::Next) => {
                pager.next_page();
            }
            Some(PagerCommand::Prev) => {
                pager.prev_page();
            }
            Some(PagerCommand::NewSearch) => {
                edit_draft(&mut draft, &mut lines)?;
                let outcome = client.recommendations(&draft.to_profile()).await;
                if let Err(e) = pager.apply(outcome) {
                    tracing::warn!(error = %e, "resubmission failed");
                    println!("request failed: {e}");
                    println!("keeping the previous results");
                }
            }
            Some(PagerCommand::Quit) => break,
            None => println!("unrecognized command; use n, p, s, or q"),
        }
    }

    Ok(())
}

/// Prompts for each profile field in turn; a blank line keeps the current value.
fn edit_draft<I>(draft: &mut ProfileDraft, lines: &mut I) -> anyhow::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let fields = [
        (ProfileField::SkillsText, "skills", draft.skills_text.clone()),
        (
            ProfileField::AreaOfInterest,
            "interest",
            draft.area_of_interest.clone(),
        ),
        (
            ProfileField::PreferredLocations,
            "locations",
            draft.preferred_locations_raw.clone(),
        ),
    ];

    for (field, label, current) in fields {
        print!("{label} [{current}]: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let value = line.trim();
        if !value.is_empty() {
            draft.update(field, value);
        }
    }

    Ok(())
}

/// Prints one value per line, or the given message when the list is empty.
pub(crate) fn print_list(values: &[String], empty_message: &str) {
    if values.is_empty() {
        println!("{empty_message}");
        return;
    }
    for value in values {
        println!("{value}");
    }
}
