//! Native plot window (winit + softbuffer)
//!
//! Rendering is entirely on the CPU: every redraw paints the full plot into
//! the softbuffer surface. The window blocks the caller until it is closed.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Context as _, Result};
use fontdue::Font;
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use super::draw::{draw_plot, PlotStyle};
use super::font::find_font;
use super::frame::{Frame, GlyphCache, TextPainter};
use crate::collab::PlotRenderer;
use crate::color::Color;
use crate::config::AppConfig;
use crate::point::Point;

const WINDOW_TITLE: &str = "point-shift";

/// Label font size in logical pixels
const LABEL_FONT_SIZE: f32 = 13.0;

/// [`PlotRenderer`] that opens a desktop window.
///
/// winit allows one event loop per process, so `render` can be called once.
#[derive(Debug, Clone)]
pub struct ScatterWindow {
    pub width: u32,
    pub height: u32,
    pub marker_radius: f32,
    pub font_path: Option<PathBuf>,
}

impl ScatterWindow {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            width: config.window_width.max(1),
            height: config.window_height.max(1),
            marker_radius: config.marker_radius,
            font_path: config.font_path.clone(),
        }
    }
}

impl PlotRenderer for ScatterWindow {
    fn render(&mut self, sets: &[Vec<Point>], colors: &[Color]) -> Result<()> {
        if sets.len() != colors.len() {
            tracing::warn!(
                sets = sets.len(),
                colors = colors.len(),
                "Point sets and colors differ in length, extras are ignored"
            );
        }

        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let mut app = PlotApp {
            options: &*self,
            sets,
            colors,
            font: find_font(self.font_path.as_deref()),
            glyph_cache: GlyphCache::new(),
            canvas: None,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .context("Plot window event loop failed")?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Window, graphics context and surface, created on `resumed`
struct Canvas {
    window: Rc<Window>,
    // Must outlive the surface
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
}

impl Canvas {
    fn new(event_loop: &ActiveEventLoop, width: u32, height: u32) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create plot window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        Ok(Self {
            window,
            _context: context,
            surface,
        })
    }

    fn redraw(
        &mut self,
        font: Option<&Font>,
        glyph_cache: &mut GlyphCache,
        sets: &[Vec<Point>],
        colors: &[Color],
        marker_radius: f32,
    ) -> Result<()> {
        let size = self.window.inner_size();
        // Minimized windows report a zero size
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        self.surface
            .resize(width, height)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let scale_factor = self.window.scale_factor() as f32;
        let style = PlotStyle::new(marker_radius, scale_factor);

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        {
            let mut frame = Frame::new(&mut *buffer, width.get() as usize, height.get() as usize);
            let mut painter =
                font.map(|f| TextPainter::new(f, glyph_cache, LABEL_FONT_SIZE * scale_factor));
            draw_plot(&mut frame, painter.as_mut(), sets, colors, &style);
        }
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present frame: {}", e))?;

        Ok(())
    }
}

struct PlotApp<'a> {
    options: &'a ScatterWindow,
    sets: &'a [Vec<Point>],
    colors: &'a [Color],
    font: Option<Font>,
    glyph_cache: GlyphCache,
    canvas: Option<Canvas>,
    /// First failure inside the event loop, returned once it exits
    error: Option<anyhow::Error>,
}

impl PlotApp<'_> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{:#}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for PlotApp<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_some() {
            return;
        }
        event_loop.set_control_flow(ControlFlow::Wait);

        match Canvas::new(event_loop, self.options.width, self.options.height) {
            Ok(canvas) => {
                tracing::debug!("Plot window opened");
                canvas.window.request_redraw();
                self.canvas = Some(canvas);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        if canvas.window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::debug!("Plot window closed");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let close = match &event.logical_key {
                    Key::Named(NamedKey::Escape) => true,
                    Key::Character(c) => c.as_str().eq_ignore_ascii_case("q"),
                    _ => false,
                };
                if close {
                    tracing::debug!("Plot window dismissed from keyboard");
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                canvas.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let result = canvas.redraw(
                    self.font.as_ref(),
                    &mut self.glyph_cache,
                    self.sets,
                    self.colors,
                    self.options.marker_radius,
                );
                if let Err(e) = result {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }
}
