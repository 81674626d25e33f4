//! Rolling power chart drawn on a `<canvas>` with the 2D context.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use watchdog_app::ports::ChartSurface;
use watchdog_app::services::ChartHandle;
use watchdog_domain::chart::{
    ACCENT_VAR, ChartConfig, ChartLayout, ChartPalette, MUTED_VAR, Viewport,
};
use watchdog_domain::error::ValidationError;
use watchdog_domain::sample::{RollingBuffer, Sample};
use watchdog_domain::time;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ResizeObserver};

use crate::browser::css_var;

const LABEL_FONT: &str = "12px system-ui, Arial";
const GRID_ALPHA: f64 = 0.25;
const LINE_WIDTH: f64 = 2.0;

/// Errors raised while setting up a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("browser call failed: {0}")]
    Browser(String),
    #[error(transparent)]
    Config(#[from] ValidationError),
}

fn browser(err: wasm_bindgen::JsValue) -> ChartError {
    ChartError::Browser(format!("{err:?}"))
}

/// A canvas chart with its sample history.
///
/// The chart observes its container and relays out whenever it resizes;
/// new samples are drawn at the last measured size.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: ChartConfig,
    buffer: RollingBuffer,
    viewport: Option<Viewport>,
    observer: Option<ResizeObserver>,
    _on_resize: Option<Closure<dyn FnMut()>>,
}

impl CanvasChart {
    /// Bind a chart to `canvas` and paint the empty axes.
    ///
    /// # Errors
    ///
    /// Fails when the range or capacity in `config` is invalid, or the canvas
    /// cannot provide a 2D context.
    pub fn create(
        canvas: HtmlCanvasElement,
        config: ChartConfig,
    ) -> Result<ChartHandle<Self>, ChartError> {
        let buffer = config.buffer()?;
        let ctx = canvas
            .get_context("2d")
            .map_err(browser)?
            .ok_or(ChartError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::NoContext)?;

        let chart = Rc::new(RefCell::new(Self {
            canvas: canvas.clone(),
            ctx,
            config,
            buffer,
            viewport: None,
            observer: None,
            _on_resize: None,
        }));

        let weak = Rc::downgrade(&chart);
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let Some(chart) = weak.upgrade() else {
                return;
            };
            if let Ok(mut chart) = chart.try_borrow_mut() {
                chart.redraw();
            }
        });
        let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref()).map_err(browser)?;
        match canvas.parent_element() {
            Some(parent) => observer.observe(&parent),
            None => observer.observe(&canvas),
        }

        {
            let mut inner = chart.borrow_mut();
            inner.observer = Some(observer);
            inner._on_resize = Some(on_resize);
            inner.redraw();
        }
        Ok(chart)
    }

    /// Match the backing store to the displayed size and device pixel ratio.
    ///
    /// The canvas is only reallocated when its pixel size changes.
    fn resize(&mut self) -> Viewport {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let rect = self.canvas.get_bounding_client_rect();
        let next = Viewport::new(rect.width(), rect.height(), dpr);
        if self.viewport.is_none_or(|current| current.needs_realloc(&next)) {
            self.canvas.set_width(next.pixel_width);
            self.canvas.set_height(next.pixel_height);
        }
        let _ = self.ctx.set_transform(next.scale, 0.0, 0.0, next.scale, 0.0, 0.0);
        self.viewport = Some(next);
        next
    }

    fn draw(&self, viewport: Viewport) {
        let Viewport { width, height, .. } = viewport;
        let layout = ChartLayout::compute(width, height, &self.config, &self.buffer);
        let palette = ChartPalette::from_vars(
            css_var(MUTED_VAR).as_deref(),
            css_var(ACCENT_VAR).as_deref(),
        );
        let ctx = &self.ctx;

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.save();
        let _ = ctx.translate(layout.origin.x, layout.origin.y);

        ctx.set_stroke_style_str(&palette.grid);
        ctx.set_global_alpha(GRID_ALPHA);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        for y in &layout.grid_lines {
            ctx.move_to(0.0, *y);
            ctx.line_to(layout.inner_width, *y);
        }
        ctx.stroke();
        ctx.set_global_alpha(1.0);

        ctx.set_fill_style_str(&palette.text);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("right");
        for label in &layout.y_labels {
            ctx.fill_text(&label.text, -8.0, label.y + 4.0).ok();
        }

        if let Some((first, rest)) = layout.polyline.split_first() {
            ctx.set_stroke_style_str(&palette.line);
            ctx.set_line_width(LINE_WIDTH);
            ctx.begin_path();
            ctx.move_to(first.x, first.y);
            for point in rest {
                ctx.line_to(point.x, point.y);
            }
            ctx.stroke();
        }

        ctx.restore();
    }
}

impl ChartSurface for CanvasChart {
    fn push(&mut self, value: f64) {
        self.buffer.push(Sample::new(time::now_millis(), value));
        let viewport = match self.viewport {
            Some(viewport) => viewport,
            None => self.resize(),
        };
        self.draw(viewport);
    }

    fn redraw(&mut self) {
        let viewport = self.resize();
        self.draw(viewport);
    }

    fn sample_count(&self) -> usize {
        self.buffer.len()
    }
}

impl Drop for CanvasChart {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}
