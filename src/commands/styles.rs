//! `cite styles`: list supported citation styles.

use anyhow::Result;
use citation_core::CitationStyle;

use crate::ProcessExit;

pub fn run_styles_command() -> Result<ProcessExit> {
    for style in CitationStyle::ALL {
        let marker = if style == CitationStyle::default() {
            " (default)"
        } else {
            ""
        };
        println!("{:<10} {}{marker}", style.tag(), style.label());
    }
    Ok(ProcessExit::Success)
}
