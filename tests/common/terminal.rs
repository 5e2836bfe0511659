//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the app into an in-memory buffer and flattens it to text.

use invoicer::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of the app at 80x24 and return the screen as text
pub fn render_app(app: &mut App) -> String {
    render_app_sized(app, 80, 24)
}

pub fn render_app_sized(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Assert the screen contains `expected`, printing it on failure
pub fn assert_screen_contains(screen: &str, expected: &str) {
    assert!(
        screen.contains(expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        screen
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_buffer_to_string_keeps_rows() {
        let mut terminal = create_test_terminal_sized(10, 3);
        terminal
            .draw(|f| {
                f.render_widget(Paragraph::new("Hello\nWorld"), f.area());
            })
            .unwrap();

        let output = buffer_to_string(terminal.backend().buffer());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].trim_end(), "Hello");
        assert_eq!(lines[1].trim_end(), "World");
    }
}
