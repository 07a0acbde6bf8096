//! Office card Google Maps buttons.
//!
//! Inserts the map button styles after the office feature-list rule, then
//! gives each known office card a link to its Google Maps pin. The styles
//! go in even when no office card is found.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::document::{self, Page};
use crate::embed;
use crate::pipeline::{PassReport, Rewrite};
use crate::rules::OFFICE_MAPS;

/// The office feature-list marker rule; the button styles go right after it.
static OFFICE_FEATURES_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.office-features li:before \{[^}]*\}").unwrap());

pub struct MapLinks;

impl MapLinks {
    /// Insert the map link after the feature list of every card headed by
    /// `office`. Returns the number of cards edited.
    fn append_map_link(page: &Page, office: &str, url: &str) -> usize {
        let mut hits = 0;
        for heading in page.select_all("h3.office-name") {
            if heading.as_node().text_contents().trim() != office {
                continue;
            }
            let Some(list) = document::next_sibling_element(heading.as_node(), "ul") else {
                continue;
            };
            let link = format!(
                r#"<a href="{url}" target="_blank" rel="noopener noreferrer" class="office-map-btn">📍 Google Maps</a>"#
            );
            document::insert_fragment_after(&list, &link);
            hits += 1;
        }
        hits
    }
}

impl Rewrite for MapLinks {
    fn name(&self) -> &'static str {
        "map-links"
    }

    fn summary(&self) -> &'static str {
        "adding Google Maps links to the office cards"
    }

    fn apply(&self, page: &Page) -> PassReport {
        let mut report = PassReport::new(self.name());

        let restyled = page.edit_styles(|css| {
            OFFICE_FEATURES_RULE.is_match(css).then(|| {
                OFFICE_FEATURES_RULE
                    .replace_all(css, |caps: &Captures<'_>| {
                        format!("{}\n\n{}", &caps[0], embed::css::MAP_BTN)
                    })
                    .into_owned()
            })
        });
        report.record("office map button styles", restyled);

        for (office, url) in OFFICE_MAPS {
            report.record(office, Self::append_map_link(page, office, url));
        }

        report
    }
}
