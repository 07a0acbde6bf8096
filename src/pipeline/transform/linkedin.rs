//! Member card LinkedIn search buttons.
//!
//! Inserts the button styles after the `.text-link` rule, then appends an
//! icon + link to each known talent-acquisition member card. The links point
//! at LinkedIn people search, not at profile URLs.

use std::sync::LazyLock;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};

use crate::document::{self, Page};
use crate::embed;
use crate::pipeline::{PassReport, Rewrite};
use crate::rules::{LINKEDIN_SEARCH_URL, TEAM_PROFILES};

/// Anchor rule for the button styles; the snippet goes right after it.
static TEXT_LINK_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.text-link \{[^}]*\}").unwrap());

/// People-search URL for a member's keywords.
fn search_url(keywords: &str) -> String {
    format!(
        "{LINKEDIN_SEARCH_URL}{}",
        utf8_percent_encode(keywords, NON_ALPHANUMERIC)
    )
}

/// Button markup appended to a member card.
fn button(keywords: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="ta-linkedin-btn">{} LinkedIn</a>"#,
        search_url(keywords),
        embed::svg::LINKEDIN_ICON.trim_end(),
    )
}

pub struct LinkedinButtons;

impl Rewrite for LinkedinButtons {
    fn name(&self) -> &'static str {
        "linkedin"
    }

    fn summary(&self) -> &'static str {
        "adding LinkedIn buttons to the talent-acquisition cards"
    }

    fn apply(&self, page: &Page) -> PassReport {
        let mut report = PassReport::new(self.name());

        let restyled = page.edit_styles(|css| {
            TEXT_LINK_RULE.is_match(css).then(|| {
                TEXT_LINK_RULE
                    .replace_all(css, |caps: &Captures<'_>| {
                        format!("{}\n\n{}", &caps[0], embed::css::LINKEDIN_BTN)
                    })
                    .into_owned()
            })
        });
        report.record("LinkedIn button styles", restyled);

        for (member, keywords) in TEAM_PROFILES {
            let mut hits = 0;
            for heading in page.select_all("h3.ta-member-name") {
                if heading.as_node().text_contents().trim() != member {
                    continue;
                }
                let Some(card) = document::ancestor_element(heading.as_node(), "article") else {
                    continue;
                };
                document::append_fragment(&card, &button(keywords));
                hits += 1;
            }
            report.record(member, hits);
        }

        report
    }
}
