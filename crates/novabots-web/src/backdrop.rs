//! Browser Backdrop
//!
//! [`EffectHost`] backed by the DOM: a `<canvas>` overlay appended to
//! `<body>`, the window `resize` event and `requestAnimationFrame`.

use std::rc::Rc;

use leptos::prelude::*;
use novabots_core::{
    EffectConfig, EffectHost, FrameId, FrameScheduler, NovaError, ParticleEffect, Result, Rgba,
    Surface, Viewport,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

const OVERLAY_ID: &str = "particle-canvas";

const OVERLAY_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;\
                             z-index:0;pointer-events:none;";

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn dimension(value: std::result::Result<JsValue, JsValue>, name: &str) -> Result<f64> {
    value
        .map_err(|e| NovaError::HostUnavailable(describe(&e)))?
        .as_f64()
        .ok_or_else(|| NovaError::HostUnavailable(format!("window.{name} is not a number")))
}

fn read_viewport(window: &Window) -> Result<Viewport> {
    Ok(Viewport::new(
        dimension(window.inner_width(), "innerWidth")?,
        dimension(window.inner_height(), "innerHeight")?,
    ))
}

/// The page's window and document
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| NovaError::HostUnavailable("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| NovaError::HostUnavailable("window has no document".into()))?;
        Ok(Self { window, document })
    }
}

impl FrameScheduler for BrowserHost {
    type Callback = Closure<dyn FnMut()>;

    fn make_callback(&self, f: Box<dyn FnMut()>) -> Self::Callback {
        Closure::wrap(f)
    }

    fn request_frame(&self, callback: &Self::Callback) -> Result<FrameId> {
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameId)
            .map_err(|e| NovaError::Scheduler(describe(&e)))
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Err(err) = self.window.cancel_animation_frame(id.0) {
            tracing::warn!(frame = id.0, err = %describe(&err), "could not cancel animation frame");
        }
    }
}

impl EffectHost for BrowserHost {
    type Surface = CanvasOverlay;
    type ResizeListener = ResizeListener;

    fn viewport(&self) -> Result<Viewport> {
        read_viewport(&self.window)
    }

    fn seed(&self) -> u64 {
        js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits()
    }

    fn attach_overlay(&self) -> Result<Self::Surface> {
        let body = self
            .document
            .body()
            .ok_or_else(|| NovaError::HostUnavailable("document has no body".into()))?;

        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(|e| NovaError::Surface(describe(&e)))?
            .dyn_into()
            .map_err(|_| NovaError::Surface("created element is not a canvas".into()))?;
        canvas.set_id(OVERLAY_ID);
        canvas
            .set_attribute("style", OVERLAY_STYLE)
            .and_then(|()| canvas.set_attribute("aria-hidden", "true"))
            .map_err(|e| NovaError::Surface(describe(&e)))?;

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| NovaError::Surface(describe(&e)))?
            .ok_or_else(|| NovaError::Surface("canvas has no 2d context".into()))?
            .dyn_into()
            .map_err(|_| NovaError::Surface("context is not 2d".into()))?;

        body.append_child(&canvas)
            .map_err(|e| NovaError::Surface(describe(&e)))?;

        Ok(CanvasOverlay { canvas, context })
    }

    fn on_resize(&self, mut handler: Box<dyn FnMut(Viewport)>) -> Result<Self::ResizeListener> {
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || match read_viewport(&window) {
            Ok(viewport) => handler(viewport),
            Err(err) => tracing::warn!(%err, "ignoring resize: viewport unreadable"),
        });

        self.window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| NovaError::Listener(describe(&e)))?;

        Ok(ResizeListener {
            window: self.window.clone(),
            closure,
        })
    }
}

/// `<canvas>` overlay; removed from the document on drop
pub struct CanvasOverlay {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Surface for CanvasOverlay {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn set_size(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.context.begin_path();
        if self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.context.set_fill_style_str(&color.to_css());
            self.context.fill();
        }
    }
}

impl Drop for CanvasOverlay {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

/// Window `resize` subscription; detached on drop
pub struct ResizeListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref())
        {
            tracing::warn!(err = %describe(&err), "could not detach resize listener");
        }
    }
}

/// Animated particle field behind the page, alive as long as this component is
#[component]
pub fn ParticleBackdrop() -> impl IntoView {
    let mounted = BrowserHost::new()
        .and_then(|host| ParticleEffect::mount(Rc::new(host), EffectConfig::default()));

    match mounted {
        Ok(effect) => {
            let effect = StoredValue::new_local(Some(effect));
            on_cleanup(move || {
                effect.update_value(|effect| {
                    effect.take();
                });
            });
        }
        Err(err) if err.is_host_failure() => {
            tracing::warn!(%err, "particle backdrop unavailable in this browser");
        }
        Err(err) => tracing::error!(%err, "particle backdrop misconfigured"),
    }
}
