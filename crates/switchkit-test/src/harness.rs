//! Test harness that drives a widget through layout, input and frame ticks.

use std::any::Any;
use switchkit_core::{
    Constraints, DrawCommand, Event, PixelCanvas, Point, Rect, RecordingCanvas, Size, Surface,
    Widget,
};

/// Upper bound on ticks taken by [`Harness::settle`].
const MAX_SETTLE_FRAMES: u32 = 10_000;

/// Test harness for interacting with a widget.
///
/// Pointer helpers take widget-local X coordinates and translate them into
/// host coordinates using the laid-out bounds.
pub struct Harness<W: Widget> {
    /// Widget being tested
    widget: W,
    /// Bounds assigned at the last layout
    bounds: Rect,
    /// Last pointer position in host coordinates
    pointer: Point,
    /// Messages returned from `event`
    messages: Vec<Box<dyn Any + Send>>,
    /// Frame interval used by `advance` and `settle`
    frame_ms: u32,
    /// Simulated time elapsed through ticks
    elapsed_ms: u64,
    /// Redraw requests collected from the widget
    redraws: usize,
}

impl<W: Widget> Harness<W> {
    /// Create a new harness around a widget.
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            bounds: Rect::default(),
            pointer: Point::ORIGIN,
            messages: Vec::new(),
            frame_ms: 16,
            elapsed_ms: 0,
            redraws: 0,
        }
    }

    /// Set the frame interval used when advancing time.
    #[must_use]
    pub fn frame_interval(mut self, frame_ms: u32) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    // === Layout ===

    /// Lay the widget out at the origin with its intrinsic size.
    pub fn layout(&mut self) -> &mut Self {
        let size = self.widget.measure(Constraints::unbounded());
        self.layout_in(Rect::from_size(size))
    }

    /// Lay the widget out with a tight size at the origin.
    pub fn layout_tight(&mut self, size: Size) -> &mut Self {
        let size = self.widget.measure(Constraints::tight(size));
        self.layout_in(Rect::from_size(size))
    }

    /// Lay the widget out in explicit bounds.
    pub fn layout_in(&mut self, bounds: Rect) -> &mut Self {
        self.bounds = bounds;
        self.widget.layout(bounds);
        self.collect_redraw();
        self
    }

    // === Event Simulation ===

    /// Press and release without moving.
    pub fn tap(&mut self) -> &mut Self {
        let center = self.bounds.center();
        self.pointer = center;
        self.dispatch(&Event::pointer_down(center));
        self.dispatch(&Event::pointer_up(center))
    }

    /// Move the pointer to a widget-local X on the vertical center line.
    pub fn drag_to(&mut self, local_x: f32) -> &mut Self {
        self.pointer = Point::new(self.bounds.x + local_x, self.bounds.center().y);
        let event = Event::pointer_move(self.pointer);
        self.dispatch(&event)
    }

    /// Release the pointer where it last was.
    pub fn release(&mut self) -> &mut Self {
        let event = Event::pointer_up(self.pointer);
        self.dispatch(&event)
    }

    /// Cancel the pointer stream.
    pub fn cancel(&mut self) -> &mut Self {
        self.dispatch(&Event::PointerCancel {
            pointer_id: switchkit_core::PointerId(0),
        })
    }

    /// Deliver an arbitrary event.
    pub fn dispatch(&mut self, event: &Event) -> &mut Self {
        if let Some(message) = self.widget.event(event) {
            self.messages.push(message);
        }
        self.collect_redraw();
        self
    }

    // === Time ===

    /// Deliver a single tick of `delta_ms`. Returns whether animation continues.
    pub fn frame(&mut self, delta_ms: u32) -> bool {
        let running = self.widget.tick(delta_ms);
        self.elapsed_ms += u64::from(delta_ms);
        self.collect_redraw();
        running
    }

    /// Advance simulated time in frame-sized steps.
    pub fn advance(&mut self, ms: u32) -> &mut Self {
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(self.frame_ms);
            self.frame(step);
            remaining -= step;
        }
        self
    }

    /// Tick until no animation remains.
    ///
    /// # Panics
    ///
    /// Panics if the widget is still animating after a large number of frames.
    pub fn settle(&mut self) -> &mut Self {
        let mut frames = 0;
        while self.widget.is_animating() {
            assert!(
                frames < MAX_SETTLE_FRAMES,
                "widget still animating after {frames} frames"
            );
            self.frame(self.frame_ms);
            frames += 1;
        }
        self
    }

    // === Rendering ===

    /// Paint the widget and return its draw commands.
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        self.widget.paint(&mut canvas);
        canvas.take_commands()
    }

    /// Paint the widget into pixels covering its bounds from the host origin.
    pub fn render_pixels(&self) -> Surface {
        let size = Size::new(self.bounds.right(), self.bounds.bottom());
        let mut canvas = PixelCanvas::new(size);
        self.widget.paint(&mut canvas);
        canvas.into_surface()
    }

    // === Inspection ===

    /// Widget under test.
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable widget under test.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Bounds from the last layout.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Simulated time elapsed through ticks.
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Redraw requests collected so far.
    pub const fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Whether the widget reports running animations.
    pub fn is_animating(&self) -> bool {
        self.widget.is_animating()
    }

    /// Drain messages of type `M`, discarding others.
    pub fn take_messages<M: Any + Copy>(&mut self) -> Vec<M> {
        self.messages
            .drain(..)
            .filter_map(|m| m.downcast_ref::<M>().copied())
            .collect()
    }

    /// Number of pending messages of any type.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    // === Assertions ===

    /// Assert that no animation is running.
    pub fn assert_idle(&self) -> &Self {
        assert!(
            !self.widget.is_animating(),
            "Expected widget to be idle but it is animating"
        );
        self
    }

    /// Assert that an animation is running.
    pub fn assert_animating(&self) -> &Self {
        assert!(
            self.widget.is_animating(),
            "Expected widget to be animating but it is idle"
        );
        self
    }

    // === Internal ===

    fn collect_redraw(&mut self) {
        if self.widget.take_redraw_request() {
            self.redraws += 1;
        }
    }
}
