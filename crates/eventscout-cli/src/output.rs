use console::style;
use std::fmt::Display;

use eventscout_core::models::{Coordinates, Event};
use eventscout_core::status::Status;

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "warning",
                    "message": message.to_string(),
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }

    /// Render the session status line, when there is one
    pub fn status(&self, status: &Status) {
        if let OutputFormat::Human = self.format {
            if let Some(line) = status.line() {
                println!("{}", style(line).dim());
            }
        }
    }

    /// Render a suggestion list
    pub fn suggestions(&self, cities: &[String]) {
        match self.format {
            OutputFormat::Human => {
                if cities.is_empty() {
                    println!("{}", style("(no suggestions)").dim());
                } else {
                    for city in cities {
                        println!("  {}", city);
                    }
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&cities).unwrap());
            }
        }
    }

    /// Render the outcome of a location lookup
    pub fn location(&self, coords: Option<Coordinates>, status: &Status) {
        match self.format {
            OutputFormat::Human => self.status(status),
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": status.line(),
                    "coordinates": coords,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }

    /// Render a search result list with tier gating
    pub fn events(&self, events: &[Event], status: &Status) {
        match self.format {
            OutputFormat::Human => {
                for event in events {
                    for line in format_event_lines(event) {
                        println!("{}", line);
                    }
                    println!();
                }
                self.status(status);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": status.line(),
                    "events": events,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }
}

/// Render one event as styled lines
///
/// An event without a detail link is tier-gated content the service chose
/// to withhold; it renders with a marker instead of a link, never as an
/// error.
pub fn format_event_lines(event: &Event) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    lines.push(style(&event.title).bold().to_string());

    let when_where = match &event.venue {
        Some(venue) => format!("  {} @ {}", event.datetime, venue),
        None => format!("  {}", event.datetime),
    };
    lines.push(when_where);

    match &event.url {
        Some(url) => lines.push(format!("  {}", style(url).blue().underlined())),
        None => lines.push(format!("  {}", style("🔒 details withheld for this tier").dim())),
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(url: Option<&str>) -> Event {
        Event {
            title: "Jazz Night".to_string(),
            datetime: "2024-05-01 20:00".to_string(),
            venue: Some("Blue Hall".to_string()),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_event_with_url_renders_a_link() {
        let lines = format_event_lines(&event(Some("https://example.com/e/1")));
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("https://example.com/e/1"));
    }

    #[test]
    fn test_event_without_url_renders_gated() {
        let lines = format_event_lines(&event(None));
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("withheld"));
        assert!(!lines[2].contains("http"));
    }

    #[test]
    fn test_venue_is_optional() {
        let mut gated = event(None);
        gated.venue = None;
        let lines = format_event_lines(&gated);
        assert_eq!(lines[1].trim(), "2024-05-01 20:00");
    }
}
