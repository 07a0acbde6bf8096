//! Card emoji watermarks.
//!
//! Swaps the page's priority-menu card styles for the watermark-enabled
//! version, then tags each known card with its emoji and wraps the card
//! image so the watermark has a positioning context.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::document::{self, Page};
use crate::embed;
use crate::pipeline::{PassReport, Rewrite};
use crate::rules::CARD_WATERMARKS;

/// Span of the old card styles: the `PRIORITY MENU (CARDS)` banner comment
/// through the final `.card p` rule.
static CARDS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)/\* =+[ \t\r\n]*PRIORITY MENU \(CARDS\)[ \t\r\n]*=+ \*/.*?\.card p \{[^}]*\}",
    )
    .unwrap()
});

pub struct Watermarks;

impl Rewrite for Watermarks {
    fn name(&self) -> &'static str {
        "watermark"
    }

    fn summary(&self) -> &'static str {
        "adding emoji watermarks to the priority-menu cards"
    }

    fn apply(&self, page: &Page) -> PassReport {
        let mut report = PassReport::new(self.name());

        let restyled = page.edit_styles(|css| {
            CARDS_BLOCK.is_match(css).then(|| {
                CARDS_BLOCK
                    .replace_all(css, NoExpand(embed::css::WATERMARK))
                    .into_owned()
            })
        });
        report.record("priority-menu card styles", restyled);

        for card in &CARD_WATERMARKS {
            let selector = format!("a.card[href=\"{}\"]", card.href);
            let image = format!("img[src=\"photos/{}\"]", card.image);
            let mut hits = 0;

            for anchor in page.select_all(&selector) {
                // Both halves of the pair must be present; a card whose image
                // moved is left alone entirely.
                let Ok(img) = anchor.as_node().select_first(&image) else {
                    continue;
                };
                anchor
                    .attributes
                    .borrow_mut()
                    .insert("data-emoji", card.emoji.to_string());

                let Some(wrapper) = document::fragment(r#"<div class="card-image-wrapper"></div>"#)
                    .into_iter()
                    .next()
                else {
                    continue;
                };
                img.as_node().insert_before(wrapper.clone());
                img.as_node().detach();
                wrapper.append(img.as_node().clone());
                hits += 1;
            }
            report.record(card.href, hits);
        }

        report
    }
}
