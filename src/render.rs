use std::io::{self, Write};

use colored::*;

use crate::planner::PlanOutcome;

pub const TITLE: &str = "AI-Powered Travel Planner 🧳";
pub const TAGLINE: &str = "Plan your next trip with AI!";
pub const ITINERARY_HEADING: &str = "Your AI-Generated Itinerary:";
pub const MISSING_FIELDS_WARNING: &str = "Please fill in all fields.";

pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE.bold())?;
    writeln!(out, "{TAGLINE}")?;
    writeln!(out)
}

/// The itinerary verbatim under its heading, or the validation warning.
pub fn render_outcome<W: Write>(out: &mut W, outcome: &PlanOutcome) -> io::Result<()> {
    match outcome {
        PlanOutcome::Itinerary(text) => {
            writeln!(out, "{}", ITINERARY_HEADING.bold().green())?;
            writeln!(out)?;
            writeln!(out, "{text}")
        }
        PlanOutcome::MissingFields(fields) => {
            writeln!(out, "⚠️  {}", MISSING_FIELDS_WARNING.yellow())?;
            let names: Vec<&str> = fields.iter().map(|field| field.label()).collect();
            writeln!(out, "   Missing: {}", names.join(", ").dimmed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::FormField;

    fn rendered(outcome: &PlanOutcome) -> String {
        let mut buffer = Vec::new();
        render_outcome(&mut buffer, outcome).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn itinerary_is_printed_verbatim_under_heading() {
        let text = "Day 1:\n  - Louvre\n  - Café de Flore";
        let output = rendered(&PlanOutcome::Itinerary(text.into()));

        let heading_at = output.find(ITINERARY_HEADING).unwrap();
        let text_at = output.find(text).unwrap();
        assert!(heading_at < text_at);
    }

    #[test]
    fn missing_fields_render_warning_only() {
        let output = rendered(&PlanOutcome::MissingFields(vec![
            FormField::Destination,
            FormField::Preferences,
        ]));

        assert!(output.contains(MISSING_FIELDS_WARNING));
        assert!(output.contains("Destination"));
        assert!(output.contains("Your Preferences"));
        assert!(!output.contains(ITINERARY_HEADING));
    }

    #[test]
    fn banner_names_the_app() {
        let mut buffer = Vec::new();
        render_banner(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("AI-Powered Travel Planner"));
        assert!(output.contains(TAGLINE));
    }
}
