//! Invocation indicator — WORKING/DONE affordance plus status phrase.
//!
//! A stateless view over a single [`ToolInvocation`]: a spinner frame while
//! the call is in flight, a static success dot once a result arrived. The
//! caller re-creates the indicator on every render pass; nothing is cached
//! or mutated here.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::invocation::{IndicatorPhase, ToolInvocation};
use crate::status::format_status;

/// Braille spinner frames; the caller's render tick selects the frame.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Static affordance for a completed invocation.
const DONE_DOT: &str = "●";

/// Colors for the indicator line.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorTheme {
    pub working: Color,
    pub done: Color,
    pub text: Color,
}

impl IndicatorTheme {
    pub fn default_dark() -> Self {
        Self {
            working: Color::Blue,
            done: Color::Green,
            text: Color::Gray,
        }
    }
}

impl Default for IndicatorTheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

/// One indicator per tool-invocation record.
///
/// Instances are fully independent; concurrent tool calls are handled by
/// the caller constructing one indicator per record.
#[derive(Debug, Clone, Copy)]
pub struct ToolCallIndicator<'a> {
    invocation: &'a ToolInvocation,
    tick: usize,
    theme: IndicatorTheme,
}

impl<'a> ToolCallIndicator<'a> {
    pub fn new(invocation: &'a ToolInvocation) -> Self {
        Self {
            invocation,
            tick: 0,
            theme: IndicatorTheme::default_dark(),
        }
    }

    /// Render-pass counter driving the spinner animation.
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    pub fn theme(mut self, theme: IndicatorTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Styled line for this render pass.
    pub fn line(&self) -> Line<'static> {
        indicator_line(self.invocation, self.tick, &self.theme)
    }
}

impl Widget for ToolCallIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}

/// Build the indicator line: affordance glyph + formatted phrase.
pub fn indicator_line(
    invocation: &ToolInvocation,
    tick: usize,
    theme: &IndicatorTheme,
) -> Line<'static> {
    let phrase = format_status(&invocation.tool_name, &invocation.args);
    let (glyph, color) = match invocation.phase() {
        IndicatorPhase::Working => (
            SPINNER_FRAMES[tick % SPINNER_FRAMES.len()],
            theme.working,
        ),
        IndicatorPhase::Done => (DONE_DOT, theme.done),
    };
    Line::from(vec![
        Span::styled(format!("{} ", glyph), Style::default().fg(color)),
        Span::styled(phrase, Style::default().fg(theme.text)),
    ])
}

/// Plain-text form of the indicator for transcript export.
pub fn indicator_plain(invocation: &ToolInvocation) -> String {
    let phrase = format_status(&invocation.tool_name, &invocation.args);
    match invocation.phase() {
        IndicatorPhase::Working => format!("⟳ {}", phrase),
        IndicatorPhase::Done => format!("✓ {}", phrase),
    }
}
