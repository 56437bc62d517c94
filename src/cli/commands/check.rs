use anyhow::{Result, bail};
use common::Clock;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::RenderSettings;
use crate::document::render_body;
use crate::inspect::{PageReport, inspect};

#[derive(Serialize)]
struct CheckOutput<'a> {
    year: i32,
    report: &'a PageReport,
    violations: Vec<String>,
}

pub async fn check(settings: &RenderSettings, json: bool) -> Result<()> {
    // Read the clock once so the render and the expectation agree
    let year = settings.clock().current_year();
    debug!("Checking page structure for year {}", year);

    let body = render_body(Clock::Fixed(year)).await;
    let report = inspect(&body);
    let violations = report.violations(year);

    if json {
        let output = CheckOutput {
            year,
            report: &report,
            violations: violations.iter().map(|v| v.to_string()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    if !violations.is_empty() {
        for violation in &violations {
            error!("{}", violation);
        }
        bail!("page failed {} structural check(s)", violations.len());
    }

    info!(
        "Page structure OK: {} capability groups, {} tech tags, {} links",
        report.capability_groups.len(),
        report.tech_stack.len(),
        report.links.len()
    );
    Ok(())
}
