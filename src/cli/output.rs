//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::auth::{Decision, RouteClass};
use crate::config::RouteConfig;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Format a guard decision as a colored string
pub fn format_decision(decision: &Decision) -> String {
    match decision {
        Decision::Redirect(target) => format!("redirect → {}", target).yellow().to_string(),
        Decision::Pass => "pass".green().to_string(),
    }
}

/// Print the route sets the guard works with
pub fn print_routes_table(routes: &RouteConfig) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Class").fg(Color::Cyan),
            Cell::new("With session").fg(Color::Cyan),
            Cell::new("Without session").fg(Color::Cyan),
        ]);

    for page in &routes.auth_pages {
        table.add_row(vec![
            Cell::new(page),
            Cell::new(RouteClass::AuthPage),
            Cell::new(format!("→ {}", routes.protected_root)).fg(Color::Yellow),
            Cell::new("pass").fg(Color::Green),
        ]);
    }

    table.add_row(vec![
        Cell::new(format!("{}*", routes.protected_root)),
        Cell::new(RouteClass::Protected),
        Cell::new("pass").fg(Color::Green),
        Cell::new(format!("→ {}", routes.login_path)).fg(Color::Yellow),
    ]);

    for prefix in &routes.excluded {
        table.add_row(vec![
            Cell::new(format!("/{}*", prefix.trim_start_matches('/'))),
            Cell::new("excluded").fg(Color::DarkGrey),
            Cell::new("-"),
            Cell::new("-"),
        ]);
    }

    println!("{table}");
}
