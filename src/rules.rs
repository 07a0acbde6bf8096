//! Fixed rewrite tables for the landing page.
//!
//! Every update the tool performs is keyed to literal content of the page:
//! card hrefs, office headings, member names. The tables below are the whole
//! configuration surface; they change only when the page does.

/// One priority-menu card: anchor href, watermark emoji, image filename
/// under `photos/`.
pub struct CardWatermark {
    pub href: &'static str,
    pub emoji: &'static str,
    pub image: &'static str,
}

/// Emoji watermarks for the priority-menu cards.
pub const CARD_WATERMARKS: [CardWatermark; 12] = [
    CardWatermark { href: "about-tp.html", emoji: "🏢", image: "GBS.jpeg" },
    CardWatermark { href: "open-jobs.html", emoji: "💼", image: "Reception.png" },
    CardWatermark { href: "salary-and-benefits.html", emoji: "💰", image: "Reception%20(1).png" },
    CardWatermark { href: "relocation-visa.html", emoji: "✈️", image: "Condo.jpg" },
    CardWatermark { href: "testimonials.html", emoji: "💬", image: "KL%201.jpg" },
    CardWatermark { href: "why-malaysia-thailand.html", emoji: "🇲🇾🇹🇭", image: "KL%202.jpg" },
    CardWatermark { href: "casual-interview.html", emoji: "☕", image: "GTowerInside1.png" },
    CardWatermark { href: "hiring-process.html", emoji: "📋", image: "Reception%20(2).png" },
    CardWatermark { href: "office-environment.html", emoji: "👀", image: "G%20TOWER.jpg" },
    CardWatermark { href: "external-raf.html", emoji: "🎁", image: "Reception.png" },
    CardWatermark { href: "blog.html", emoji: "📢", image: "CafepicbyKoyoriinPenang.jpg" },
    CardWatermark { href: "faq.html", emoji: "❓", image: "GTowerInside1.png" },
];

/// Office heading text → Google Maps short link.
pub const OFFICE_MAPS: [(&str, &str); 6] = [
    ("G Tower（吉隆坡）", "https://maps.app.goo.gl/vd5ju3VXhxfhpJuN7"),
    ("Livingston（槟城）", "https://maps.app.goo.gl/9i841vf18KRyunQK6"),
    ("One Precinct（槟城）", "https://maps.app.goo.gl/Nq6RKZ7spH89THG8A"),
    ("GBS@Mahsuri（槟城）", "https://maps.app.goo.gl/Zpy6r8na4Wg31uhT8"),
    ("KCP（格拉那再也中心点）", "https://maps.app.goo.gl/UE8tTboaukkeCWZW9"),
    ("Singha Complex（曼谷）", "https://maps.app.goo.gl/vPuRsYp5fcNzX4kb6"),
];

/// Member heading text → LinkedIn search keywords. Keywords are stored as
/// plain text and percent-encoded when the search URL is built.
pub const TEAM_PROFILES: [(&str, &str); 5] = [
    ("Anna Saw", "Anna Saw Yee Lin"),
    ("Melaine Sua", "Min Lee Melaine Sua"),
    ("Nuttaporn Buapradith", "Tatar Nuttaporn Buapradith"),
    ("Chloe Heo", "Chloe Yoon Jung Heo"),
    ("Rasikarn", "Rasikarn Nupueng"),
];

/// Johor office card heading.
pub const JOHOR_HEADING: &str = "Johor（柔佛）";

/// Replacement feature list for the Johor card.
pub const JOHOR_FEATURES: [&str; 3] = [
    "<li><strong>Soon</strong></li>",
    "<li><strong>Hiring now</strong></li>",
    "<li>靠近新加坡</li>",
];

/// Johor customer-success opening.
pub const JOHOR_APPLY_URL: &str = "https://careerseng-teleperformance.icims.com/jobs/50874/customer-success-specialist---mandarin---johor/job";

/// Work-from-home card heading.
pub const WFH_HEADING: &str = "居家办公";

/// Work-from-home interpreter opening. The double slashes are how the job
/// board publishes this link; keep them.
pub const WFH_JOB_URL: &str = "https://careerseng-teleperformance.icims.com//jobs//49561//interpreter---mandarin---work-from-home//job";

/// LinkedIn people-search endpoint; keywords get appended.
pub const LINKEDIN_SEARCH_URL: &str = "https://www.linkedin.com/search/results/all/?keywords=";
