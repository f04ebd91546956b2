use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields, usually borrowed
/// from `App`) and render into a `Frame` within a given `Rect`. Key handling
/// never happens here; it belongs to the session controller.
///
/// `render` takes `&mut self` so a component can hold presentation state
/// such as a `TableState` scroll offset across frames.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
