//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::surface::Surface;
use crate::widget::Canvas;
use crate::{Color, Point, Rect, Size};
use std::sync::Arc;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Replaying commands on another backend
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded commands onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Rect {
                    bounds,
                    corner_radius,
                    color,
                } => target.fill_rounded_rect(*bounds, *corner_radius, *color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => target.fill_circle(*center, *radius, *color),
                DrawCommand::Surface { origin, surface } => target.draw_surface(surface, *origin),
            }
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, corner_radius, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_surface(&mut self, surface: &Arc<Surface>, origin: Point) {
        self.commands.push(DrawCommand::surface(origin, surface));
    }
}

/// A Canvas that rasterizes directly into an off-screen [`Surface`].
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    surface: Surface,
}

impl PixelCanvas {
    /// Create a transparent canvas of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            surface: Surface::with_size(size),
        }
    }

    /// Rendered pixels.
    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Consume the canvas, returning its pixels.
    #[must_use]
    pub fn into_surface(self) -> Surface {
        self.surface
    }
}

impl Canvas for PixelCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.surface.fill_rounded_rect(rect, 0.0, color);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        self.surface.fill_rounded_rect(rect, corner_radius, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.surface.fill_circle(center, radius, color);
    }

    fn draw_surface(&mut self, surface: &Arc<Surface>, origin: Point) {
        self.surface.blit(surface, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_recording_canvas_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        let surface = Arc::new(Surface::new(2, 2));
        canvas.draw_surface(&surface, Point::ORIGIN);
        canvas.fill_circle(Point::new(5.0, 5.0), 3.0, Color::WHITE);
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Surface { .. }));
        assert!(matches!(commands[1], DrawCommand::Circle { radius, .. } if radius == 3.0));
        assert!(matches!(commands[2], DrawCommand::Rect { .. }));
    }

    #[test]
    fn test_recording_canvas_take_and_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 4.0, 2.0), 1.0, Color::WHITE);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());

        canvas.fill_circle(Point::ORIGIN, 1.0, Color::WHITE);
        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_replay_matches_direct_rasterization() {
        let mut recording = RecordingCanvas::new();
        recording.fill_rounded_rect(Rect::new(0.0, 0.0, 20.0, 10.0), 5.0, Color::rgb(0.5, 0.5, 0.5));
        recording.fill_circle(Point::new(5.0, 5.0), 4.0, Color::WHITE);

        let mut replayed = PixelCanvas::new(Size::new(20.0, 10.0));
        recording.replay(&mut replayed);

        let mut direct = PixelCanvas::new(Size::new(20.0, 10.0));
        direct.fill_rounded_rect(Rect::new(0.0, 0.0, 20.0, 10.0), 5.0, Color::rgb(0.5, 0.5, 0.5));
        direct.fill_circle(Point::new(5.0, 5.0), 4.0, Color::WHITE);

        assert_eq!(replayed.surface(), direct.surface());
    }

    #[test]
    fn test_pixel_canvas_draw_surface() {
        let mut track = Surface::new(4, 4);
        track.clear(Color::WHITE);
        let mut canvas = PixelCanvas::new(Size::new(8.0, 8.0));
        canvas.draw_surface(&Arc::new(track), Point::new(2.0, 2.0));
        let out = canvas.into_surface();
        assert_eq!(out.pixel(2, 2), Some(0xffff_ffff));
        assert_eq!(out.pixel(1, 1), Some(0));
    }
}
