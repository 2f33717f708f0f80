//! Langs command - list the languages this build supports.

use serde::Serialize;
use surface_languages::supported_languages;

use crate::output::emit_json;

#[derive(Debug, Serialize)]
pub struct LangReport {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub visibility_mechanism: &'static str,
}

/// List registered languages, their extensions, and how each decides
/// symbol visibility.
pub fn cmd_langs(json: bool) -> anyhow::Result<i32> {
    let mut reports: Vec<LangReport> = supported_languages()
        .into_iter()
        .map(|lang| LangReport {
            name: lang.name(),
            extensions: lang.extensions(),
            visibility_mechanism: lang.visibility_mechanism().as_str(),
        })
        .collect();
    reports.sort_by_key(|r| r.name);

    if json {
        emit_json(&reports)?;
    } else {
        for report in &reports {
            println!(
                "{} ({}): {}",
                report.name,
                report.extensions.join(", "),
                report.visibility_mechanism
            );
        }
    }
    Ok(0)
}
