use crate::engine::{DrawSurface, Rgba};
use anyhow::anyhow;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D backing for the engine's [`DrawSurface`].
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// False once the canvas has been removed from the document.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.canvas.is_connected()
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f64) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(width);
        ctx.set_line_cap("round");
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f64, color: Rgba, glow: Option<f64>) {
        let ctx = &self.ctx;
        let css = color.to_css();
        ctx.save();
        if let Some(blur) = glow {
            ctx.set_shadow_blur(blur);
            ctx.set_shadow_color(&css);
        }
        ctx.set_fill_style_str(&css);
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0), 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(width);
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0), 0.0, TAU);
        ctx.stroke();
    }
}
