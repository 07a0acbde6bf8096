//! retouch - one-shot retoucher for the recruiting site's landing page.
//!
//! Reads `index.html` from the working directory, applies the five content
//! updates (card emoji watermarks, office map links, the Johor and
//! work-from-home card refreshes, LinkedIn buttons), and writes
//! `index_UPDATED.html`. The original file is never touched.

mod cli;
mod document;
mod embed;
mod error;
mod logger;
mod pipeline;
mod rules;

use std::fs;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};

use cli::Cli;
use document::Page;
use error::RetouchError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Progress goes to stdout, so the failure reason does too
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// One retouch run: read, rewrite, write.
fn run(cli: &Cli) -> Result<()> {
    let input = &cli.input;
    if !input.exists() {
        return Err(RetouchError::MissingInput(input.clone()).into());
    }

    log!("retouch"; "retouching {}", input.display());

    let html =
        fs::read_to_string(input).map_err(|err| RetouchError::Read(input.clone(), err))?;
    let page = Page::parse(&html);

    let reports = pipeline::run(&page, cli.unmatched)?;

    let output = &cli.output;
    fs::write(output, page.to_html()?)
        .map_err(|err| RetouchError::Write(output.clone(), err))?;

    let edits: usize = reports.iter().map(pipeline::PassReport::total_hits).sum();
    log!("retouch"; "done: {edits} edit(s), wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn cli_for(dir: &Path, unmatched: &str) -> Cli {
        Cli::parse_from([
            "retouch".to_string(),
            "--input".to_string(),
            dir.join("index.html").display().to_string(),
            "--output".to_string(),
            dir.join("index_UPDATED.html").display().to_string(),
            "--unmatched".to_string(),
            unmatched.to_string(),
        ])
    }

    /// A page fragment carrying one instance of every structure the five
    /// passes look for.
    const FIXTURE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<style>
/* ========================================
   PRIORITY MENU (CARDS)
   ======================================== */
.cards {
    display: flex;
}

.card p {
    color: gray;
}

.office-features li:before {
    content: "✓";
}

.text-link {
    color: var(--gold-primary);
}
</style>
</head>
<body>
<a href="about-tp.html" class="card"><img src="photos/GBS.jpeg" alt="office"></a>
<div class="office-card"><h3 class="office-name">G Tower（吉隆坡）</h3><ul class="office-features"><li>MRT</li></ul></div>
<div class="office-card"><h3 class="office-name">Johor（柔佛）</h3><ul class="office-features"><li>Old</li></ul></div>
<div class="office-card"><h3 class="office-name">居家办公</h3><ul class="office-features"><li>灵活</li></ul></div>
<article class="ta-member"><div><h3 class="ta-member-name">Anna Saw</h3></div></article>
</body>
</html>
"##;

    #[test]
    fn test_missing_input_fails_without_writing_output() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), "warn");

        let err = run(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RetouchError>(),
            Some(RetouchError::MissingInput(_))
        ));
        assert!(!dir.path().join("index_UPDATED.html").exists());
    }

    #[test]
    fn test_full_run_applies_all_five_passes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), FIXTURE).unwrap();

        // most table entries are absent from the fixture on purpose
        run(&cli_for(dir.path(), "silent")).unwrap();

        let out = fs::read_to_string(dir.path().join("index_UPDATED.html")).unwrap();
        assert!(out.contains("/* EMOJI WATERMARK */"));
        // once in the inserted stylesheet, once on the retouched anchor
        assert_eq!(out.matches(r#"data-emoji="🏢""#).count(), 2);
        assert!(out.contains(r#"<div class="card-image-wrapper"><img"#));
        assert!(out.contains("https://maps.app.goo.gl/vd5ju3VXhxfhpJuN7"));
        assert!(out.contains("Hiring now"));
        assert!(out.contains("💼 Apply Now"));
        assert!(out.contains("💼 Interpreter Job"));
        assert!(out.contains("keywords=Anna%20Saw%20Yee%20Lin"));
        assert!(out.contains(".ta-linkedin-btn {"));
        // untouched content survives
        assert!(out.contains("<li>MRT</li>"));

        // the input file itself is never modified
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html")).unwrap(),
            FIXTURE
        );
    }

    #[test]
    fn test_strict_run_fails_when_identifiers_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), FIXTURE).unwrap();

        let err = run(&cli_for(dir.path(), "strict")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RetouchError>(),
            Some(RetouchError::Unmatched(_))
        ));
        assert!(!dir.path().join("index_UPDATED.html").exists());
    }
}
