//! Terminal rendering of the form panels

use colored::*;

use super::FormState;
use crate::prediction::PredictResponse;

const PANEL_WIDTH: usize = 56;

fn rule() -> String {
    "─".repeat(PANEL_WIDTH).dimmed().to_string()
}

/// Result panel: probability with two decimals and the label
pub fn render_result(response: &PredictResponse) -> String {
    let label = if response.is_fraud {
        response.label().bright_red().bold()
    } else {
        response.label().bright_green().bold()
    };

    format!(
        "{}\n{}\n  {} {}\n  {} {}\n{}",
        rule(),
        "Result".bold(),
        "Fraud probability:".bold(),
        response.probability_percent(),
        "Label:".bold(),
        label,
        rule()
    )
}

/// Error panel, message shown verbatim
pub fn render_error(message: &str) -> String {
    format!("{}\n{}\n{}", rule(), message.white().on_red(), rule())
}

/// Footer naming where requests go
pub fn render_footer(api_base_label: &str) -> String {
    format!("API base: {}", api_base_label).dimmed().to_string()
}

/// Submit control; disabled while loading
pub fn render_submit_button(loading: bool) -> String {
    if loading {
        "[ Submitting… ]".dimmed().to_string()
    } else {
        "[ Predict ]".bright_blue().bold().to_string()
    }
}

/// Whichever panels the state currently holds (result, error, or nothing)
pub fn render_panels(state: &FormState) -> String {
    let mut sections = Vec::new();
    if let Some(error) = &state.error {
        sections.push(render_error(error));
    }
    if let Some(result) = &state.result {
        sections.push(render_result(result));
    }
    sections.join("\n")
}

/// Full view: buffer, controls, panels and footer
pub fn render_form(state: &FormState, api_base_label: &str) -> String {
    let mut out = Vec::new();
    out.push("Fraud Detection".bold().to_string());
    out.push(
        "Paste transaction JSON (V1–V28, Amount) and submit to the backend API."
            .dimmed()
            .to_string(),
    );
    out.push(String::new());
    out.push("Transaction (JSON)".bold().to_string());
    out.push(state.input.clone());
    out.push(String::new());
    out.push(format!("[ Use sample ]  {}", render_submit_button(state.loading)));

    let panels = render_panels(state);
    if !panels.is_empty() {
        out.push(panels);
    }

    out.push(String::new());
    out.push(render_footer(api_base_label));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_panel_contents() {
        let panel = render_result(&PredictResponse {
            fraud_probability: 0.87,
            is_fraud: true,
        });
        assert!(panel.contains("87.00%"));
        assert!(panel.contains("Fraud"));
        assert!(!panel.contains("Not fraud"));
    }

    #[test]
    fn test_error_only_state_has_no_result_panel() {
        let state = FormState {
            error: Some("bad input".to_string()),
            ..FormState::default()
        };
        let panels = render_panels(&state);
        assert!(panels.contains("bad input"));
        assert!(!panels.contains("Fraud probability"));
    }

    #[test]
    fn test_empty_state_renders_no_panels() {
        assert!(render_panels(&FormState::default()).is_empty());
    }

    #[test]
    fn test_form_view_shows_footer_and_button_state() {
        let state = FormState {
            input: "{}".to_string(),
            loading: true,
            ..FormState::default()
        };
        let view = render_form(&state, "(dev: http://localhost:8000)");
        assert!(view.contains("API base: (dev: http://localhost:8000)"));
        assert!(view.contains("Submitting…"));
        assert!(!view.contains("[ Predict ]"));
    }
}
