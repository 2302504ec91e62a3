// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.

use crate::api::{ApiClient, ScanOption, ScanRequest};
use crate::key;
use anyhow::Result;
use console::style;
use dialoguer::{Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};

/// The three pages plus an exit entry, matched exhaustively so a new
/// page cannot be added without wiring a handler.
#[derive(Clone, Copy)]
enum Page {
    Setup,
    Results,
    Dashboard,
    Exit,
}

impl Page {
    const ALL: [Page; 4] = [Page::Setup, Page::Results, Page::Dashboard, Page::Exit];

    fn label(&self) -> &'static str {
        match self {
            Page::Setup => "Project Setup",
            Page::Results => "Scan Results",
            Page::Dashboard => "Dashboard",
            Page::Exit => "Exit",
        }
    }
}

/// Main interactive menu. Receives an `ApiClient` instance and runs a
/// select loop until the user chooses "Exit". The API key resolved on
/// the Project Setup page is stored on the client, so later visits to
/// the other pages reuse it; visiting them first sends unauthenticated
/// requests the server will reject.
pub fn main_menu(mut api: ApiClient) -> Result<()> {
    println!("{}", style("M.AI Snippet Analyzer").bold());
    loop {
        let items: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        let selection = Select::new()
            .with_prompt("Menu")
            .items(&items)
            .default(0)
            .interact()?;
        match Page::ALL[selection] {
            Page::Setup => handle_setup(&mut api)?,
            Page::Results => handle_results(&api)?,
            Page::Dashboard => handle_dashboard(&api)?,
            Page::Exit => break,
        }
    }
    Ok(())
}

/// Project Setup: resolve the API key if the session does not have one
/// yet, collect the scan form and submit one analyze request.
fn handle_setup(api: &mut ApiClient) -> Result<()> {
    section("Project Setup");

    if !api.has_key() {
        match key::resolve()? {
            Some(k) => api.set_key(&k),
            None => {
                // Halt before any network call is attempted.
                println!("{}", style("Please provide a FOSSA API key.").yellow());
                return Ok(());
            }
        }
    }

    let name: String = Input::new()
        .with_prompt("Project name")
        .default("My Open Source Project".into())
        .interact_text()?;
    let path: String = Input::new()
        .with_prompt("Project folder path")
        .default("/path/to/project".into())
        .interact_text()?;
    let option_labels: Vec<&str> = ScanOption::ALL.iter().map(|o| o.label()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Scan options")
        .items(&option_labels)
        .interact()?;
    let scan_options: Vec<ScanOption> = picked.into_iter().map(|i| ScanOption::ALL[i]).collect();

    let req = ScanRequest {
        name,
        path,
        scan_options,
    };

    let spinner = spinner("Submitting scan...");
    let outcome = api.analyze(&req);
    spinner.finish_and_clear();
    match outcome {
        Ok(()) => println!("{}", style("Project scan completed successfully.").green()),
        Err(e) => {
            log::debug!("analyze failed: {:#}", e);
            println!("{}", style("Project scan failed.").red());
        }
    }
    Ok(())
}

/// Scan Results: ask for a project id and render the latest scan. The
/// page does not guard against a missing key; the server answers
/// non-200 and we show the failure notice.
fn handle_results(api: &ApiClient) -> Result<()> {
    section("Scan Results");

    let project_id: String = Input::new().with_prompt("Project ID").interact_text()?;

    let spinner = spinner("Fetching results...");
    let outcome = api.latest_scan(&project_id);
    spinner.finish_and_clear();
    match outcome {
        Ok(result) => {
            section("License scan results");
            for line in json_lines(&result.license_scan) {
                println!("{}", line);
            }
            section("Snippet analysis results");
            for line in json_lines(&result.snippet_analysis) {
                println!("{}", line);
            }
        }
        Err(e) => {
            log::debug!("latest-scan failed: {:#}", e);
            println!("{}", style("Failed to fetch scan results.").red());
        }
    }
    Ok(())
}

/// Dashboard: no input, fetch aggregate stats on every visit and chart
/// them.
fn handle_dashboard(api: &ApiClient) -> Result<()> {
    section("Dashboard");

    let spinner = spinner("Fetching dashboard data...");
    let outcome = api.projects();
    spinner.finish_and_clear();
    match outcome {
        Ok(stats) => {
            section("Project stats");
            for line in bar_chart_lines(&stats.project_stats) {
                println!("{}", line);
            }
            section("License violations");
            for line in share_chart_lines(&stats.license_violations) {
                println!("{}", line);
            }
        }
        Err(e) => {
            log::debug!("project stats failed: {:#}", e);
            println!("{}", style("Failed to fetch dashboard data.").red());
        }
    }
    Ok(())
}

fn section(title: &str) {
    println!("\n{}", style(title).cyan().bold());
}

fn spinner(msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(msg);
    spinner
}

const BAR_WIDTH: usize = 40;

/// Render a JSON object of numeric values as horizontal bars scaled to
/// the largest entry. Anything that is not such an object is shown as
/// pretty-printed JSON instead.
fn bar_chart_lines(value: &serde_json::Value) -> Vec<String> {
    let Some(entries) = numeric_entries(value) else {
        return json_lines(value);
    };
    let max = entries.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    entries
        .iter()
        .map(|(label, v)| {
            let len = if max > 0.0 {
                ((v / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!("{:<20} {} {}", label, "█".repeat(len), v)
        })
        .collect()
}

/// Render a JSON object of numeric values as shares of the total. The
/// original front end asked its framework for a pie chart that does not
/// exist; a percentage breakdown carries the same information.
fn share_chart_lines(value: &serde_json::Value) -> Vec<String> {
    let Some(entries) = numeric_entries(value) else {
        return json_lines(value);
    };
    let total: f64 = entries.iter().map(|(_, v)| *v).sum();
    entries
        .iter()
        .map(|(label, v)| {
            let pct = if total > 0.0 { v / total * 100.0 } else { 0.0 };
            let len = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
            format!("{:<20} {:>5.1}% {}", label, pct, "▒".repeat(len))
        })
        .collect()
}

/// Extract (label, number) pairs when the value is an all-numeric JSON
/// object. Entries come back in the map's iteration order.
fn numeric_entries(value: &serde_json::Value) -> Option<Vec<(String, f64)>> {
    let map = value.as_object()?;
    if map.is_empty() {
        return None;
    }
    map.iter()
        .map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
        .collect()
}

fn json_lines(value: &serde_json::Value) -> Vec<String> {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    pretty.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bar_chart_scales_to_largest_entry() {
        let lines = bar_chart_lines(&json!({"active": 2, "archived": 4}));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(&"█".repeat(20)));
        assert!(lines[1].contains(&"█".repeat(40)));
        assert!(lines[0].starts_with("active"));
        assert!(lines[1].ends_with("4"));
    }

    #[test]
    fn bar_chart_handles_all_zero_values() {
        let lines = bar_chart_lines(&json!({"a": 0, "b": 0}));
        assert!(lines.iter().all(|l| !l.contains('█')));
    }

    #[test]
    fn share_chart_reports_percentages() {
        let lines = share_chart_lines(&json!({"mit": 3, "gpl": 1}));
        assert!(lines.iter().any(|l| l.contains("75.0%")));
        assert!(lines.iter().any(|l| l.contains("25.0%")));
    }

    #[test]
    fn non_numeric_values_fall_back_to_json() {
        let value = json!({"status": "clean"});
        let lines = bar_chart_lines(&value);
        assert_eq!(lines.join("\n"), serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn scalar_results_render_as_json() {
        let lines = json_lines(&json!({"matches": 0}));
        assert!(lines.iter().any(|l| l.contains("\"matches\": 0")));
    }
}
