//! Component system for the tabview terminal surface.
//!
//! Components are self-contained UI elements. They read and mutate the
//! shared [`App`], render themselves into a provided `Rect`, and report side
//! effects back to the runtime as [`ViewEffect`]s instead of acting on them.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::{App, ViewEffect};

/// A UI component with its own rendering and key handling.
///
/// # Example Implementation
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct StatusComponent;
///
/// impl Component for StatusComponent {
///     fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
///         let text = app.status.clone().unwrap_or_default();
///         frame.render_widget(Paragraph::new(text), rect);
///     }
/// }
/// ```
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    ///
    /// Components only consume keys meaningful to them and return the
    /// effects the runtime should process.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<ViewEffect> {
        Vec::new()
    }

    /// Key hints contributed to the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
