//! Johor office card refresh.
//!
//! The Johor site is not open yet; its card gets a short "coming soon"
//! feature list and a direct link to the customer-success opening.

use crate::document::{self, Page};
use crate::pipeline::{PassReport, Rewrite};
use crate::rules::{JOHOR_APPLY_URL, JOHOR_FEATURES, JOHOR_HEADING};

pub struct JohorCard;

impl Rewrite for JohorCard {
    fn name(&self) -> &'static str {
        "johor-card"
    }

    fn summary(&self) -> &'static str {
        "refreshing the Johor office card"
    }

    fn apply(&self, page: &Page) -> PassReport {
        let mut report = PassReport::new(self.name());
        let mut hits = 0;

        for heading in page.select_all("h3.office-name") {
            if heading.as_node().text_contents().trim() != JOHOR_HEADING {
                continue;
            }
            let Some(list) = document::next_sibling_element(heading.as_node(), "ul") else {
                continue;
            };

            for child in list.children().collect::<Vec<_>>() {
                child.detach();
            }
            document::append_fragment(&list, &JOHOR_FEATURES.concat());

            let link = format!(
                r#"<a href="{JOHOR_APPLY_URL}" target="_blank" rel="noopener noreferrer" class="office-map-btn">💼 Apply Now</a>"#
            );
            document::insert_fragment_after(&list, &link);
            hits += 1;
        }

        report.record(JOHOR_HEADING, hits);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_list_is_replaced_and_apply_link_added() {
        let page = Page::parse(
            r#"<html><body><div class="office-card"><h3 class="office-name">Johor（柔佛）</h3><ul class="office-features"><li>Old line one</li><li>Old line two</li></ul></div></body></html>"#,
        );
        let report = JohorCard.apply(&page);
        assert_eq!(report.total_hits(), 1);

        let items = page.select_all("ul.office-features li");
        assert_eq!(items.len(), 3);
        let texts: Vec<String> = items
            .iter()
            .map(|item| item.as_node().text_contents())
            .collect();
        assert_eq!(texts, ["Soon", "Hiring now", "靠近新加坡"]);
        assert!(!page.to_html().unwrap().contains("Old line one"));

        let link = page.select_all("a.office-map-btn").remove(0);
        assert_eq!(link.attributes.borrow().get("href"), Some(JOHOR_APPLY_URL));
        assert_eq!(link.as_node().text_contents(), "💼 Apply Now");
    }

    #[test]
    fn test_other_office_cards_are_untouched() {
        let page = Page::parse(
            r#"<html><body><div class="office-card"><h3 class="office-name">G Tower（吉隆坡）</h3><ul class="office-features"><li>MRT</li></ul></div></body></html>"#,
        );
        let report = JohorCard.apply(&page);
        assert_eq!(report.total_hits(), 0);
        assert!(page.to_html().unwrap().contains("<li>MRT</li>"));
    }
}
