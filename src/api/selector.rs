use chrono::{FixedOffset, Local, Utc};
use tracing::{debug, warn};

use crate::core::{ListenerId, SharedInterval, TimelineWindow, Viewport};
use crate::error::{SelectorError, SelectorResult};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::validation::{validate_config, validate_style, validate_viewport};
use super::{IntervalSelectorConfig, RedrawHook, RedrawRequest, SelectorGeometry, SelectorStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Subscription of the selector on its bound interval.
#[derive(Debug)]
pub(super) struct IntervalBinding {
    pub(super) interval: SharedInterval,
    pub(super) listener_id: ListenerId,
}

/// Interval selector widget engine consumed by host applications.
///
/// `IntervalSelector` owns the visible window, pointer state and the cached
/// hit-test geometry of the last render pass, and drives a `Renderer`. It
/// has no dependency on any toolkit; see `platform_gtk` for GTK wiring.
pub struct IntervalSelector<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) window: TimelineWindow,
    pub(super) grid_interval_ms: i64,
    pub(super) display_offset: FixedOffset,
    pub(super) style: SelectorStyle,
    pub(super) enabled: bool,
    pub(super) interaction: InteractionState,
    pub(super) geometry: Option<SelectorGeometry>,
    pub(super) binding: Option<IntervalBinding>,
    pub(super) redraw: RedrawRequest,
}

impl<R: Renderer> IntervalSelector<R> {
    pub fn new(renderer: R, config: IntervalSelectorConfig) -> SelectorResult<Self> {
        let config = validate_config(config)?;
        let display_offset = match config.display_utc_offset_seconds {
            Some(offset_seconds) => FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
                SelectorError::invalid(format!("invalid utc offset: {offset_seconds}s"))
            })?,
            None => *Local::now().offset(),
        };
        let window_start = config
            .window_start
            .map_or_else(|| Utc::now().with_timezone(&display_offset), |start| {
                start.with_timezone(&display_offset)
            });
        let window = TimelineWindow::new(window_start, config.display_length_minutes)?;

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            display_length_minutes = config.display_length_minutes,
            grid_interval_ms = config.grid_interval_ms,
            "interval selector created"
        );

        let redraw = RedrawRequest::default();
        redraw.request();
        Ok(Self {
            renderer,
            viewport: config.viewport,
            window,
            grid_interval_ms: config.grid_interval_ms,
            display_offset,
            style: config.style,
            enabled: true,
            interaction: InteractionState::default(),
            geometry: None,
            binding: None,
            redraw,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> SelectorResult<()> {
        let viewport = validate_viewport(viewport)?;
        if viewport != self.viewport {
            self.viewport = viewport;
            self.redraw.request();
        }
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> SelectorStyle {
        self.style
    }

    pub fn set_style(&mut self, style: SelectorStyle) -> SelectorResult<()> {
        self.style = validate_style(style)?;
        self.redraw.request();
        Ok(())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables pointer handling. Disabling drops any drag in
    /// progress; a disabled selector renders only its disabled background.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.interaction.on_release();
        }
        debug!(enabled, "interval selector enabled state changed");
        self.redraw.request();
    }

    /// Hit-test geometry cached by the last `render` call.
    #[must_use]
    pub fn geometry(&self) -> Option<SelectorGeometry> {
        self.geometry
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw.is_pending()
    }

    /// Installs a callback invoked whenever the selector needs a repaint,
    /// including when the bound interval changes from outside.
    pub fn set_redraw_hook(&mut self, hook: Option<RedrawHook>) {
        self.redraw.set_hook(hook);
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Builds a frame, draws it and caches its geometry for hit-testing.
    pub fn render(&mut self) -> SelectorResult<()> {
        let scene = self.build_render_frame()?;
        self.renderer.render(&scene.frame)?;
        self.finish_render(scene.geometry);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> SelectorResult<()>
    where
        R: CairoContextRenderer,
    {
        let scene = self.build_render_frame()?;
        self.renderer
            .render_on_cairo_context(context, &scene.frame)?;
        self.finish_render(scene.geometry);
        Ok(())
    }

    fn finish_render(&mut self, geometry: Option<SelectorGeometry>) {
        self.geometry = geometry;
        self.redraw.take();
    }
}

impl<R: Renderer> Drop for IntervalSelector<R> {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.take() {
            if !binding.interval.unsubscribe(binding.listener_id) {
                warn!("interval listener was already removed");
            }
        }
    }
}
