//! The five page rewrite passes.
//!
//! One module per pass, applied in this order:
//!
//! - `watermark`: card emoji watermarks (stylesheet block + card markup)
//! - `map_links`: office card Google Maps buttons
//! - `johor_card`: Johor card feature list + Apply link
//! - `wfh_card`: work-from-home card Interpreter link
//! - `linkedin`: member card LinkedIn search buttons

mod johor_card;
mod linkedin;
mod map_links;
mod watermark;
mod wfh_card;

pub use johor_card::JohorCard;
pub use linkedin::LinkedinButtons;
pub use map_links::MapLinks;
pub use watermark::Watermarks;
pub use wfh_card::WfhCard;
