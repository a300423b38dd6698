use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{trace, warn};

use crate::api::{IntervalSelector, IntervalSelectorConfig};
use crate::core::Viewport;
use crate::error::SelectorResult;
use crate::render::CairoRenderer;

pub type UiSelector = Rc<RefCell<IntervalSelector<CairoRenderer>>>;

/// GTK4 host for an `IntervalSelector`.
///
/// Wraps a `DrawingArea` whose draw callback renders the selector through
/// Cairo, and forwards pointer drag, hover and wheel events to it. Changes
/// made to the bound interval from elsewhere schedule a repaint through the
/// selector redraw hook.
pub struct GtkIntervalSelector {
    selector: UiSelector,
    drawing_area: gtk::DrawingArea,
}

impl GtkIntervalSelector {
    pub fn new(config: IntervalSelectorConfig) -> SelectorResult<Self> {
        let viewport = config.viewport;
        let renderer = CairoRenderer::new(
            i32::try_from(viewport.width).unwrap_or(i32::MAX),
            i32::try_from(viewport.height).unwrap_or(i32::MAX),
        )?;
        let selector = Rc::new(RefCell::new(IntervalSelector::new(renderer, config)?));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_hexpand(true);

        attach_draw_func(&drawing_area, Rc::clone(&selector));
        attach_redraw_hook(&drawing_area, &selector);
        attach_pointer_controllers(&drawing_area, &selector);

        Ok(Self {
            selector,
            drawing_area,
        })
    }

    /// Shared handle to the headless selector, for binding intervals and
    /// changing window settings.
    #[must_use]
    pub fn selector(&self) -> UiSelector {
        Rc::clone(&self.selector)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}

fn attach_draw_func(drawing_area: &gtk::DrawingArea, selector: UiSelector) {
    drawing_area.set_draw_func(move |_widget, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let Ok(mut selector) = selector.try_borrow_mut() else {
            return;
        };

        let viewport = Viewport::new(width.unsigned_abs(), height.unsigned_abs());
        if let Err(err) = selector.set_viewport(viewport) {
            warn!(%err, "failed to apply drawing area size");
            return;
        }
        if let Err(err) = selector.render_on_cairo_context(context) {
            warn!(%err, "failed to draw interval selector");
        }
    });
}

fn attach_redraw_hook(drawing_area: &gtk::DrawingArea, selector: &UiSelector) {
    let weak_area = drawing_area.downgrade();
    if let Ok(mut selector) = selector.try_borrow_mut() {
        selector.set_redraw_hook(Some(Rc::new(move || {
            if let Some(area) = weak_area.upgrade() {
                area.queue_draw();
            }
        })));
    }
}

fn attach_pointer_controllers(drawing_area: &gtk::DrawingArea, selector: &UiSelector) {
    let motion = gtk::EventControllerMotion::new();
    {
        let selector = Rc::clone(selector);
        let weak_area = drawing_area.downgrade();
        motion.connect_motion(move |_, x, y| {
            let (Some(area), Ok(selector)) = (weak_area.upgrade(), selector.try_borrow()) else {
                return;
            };
            area.set_cursor_from_name(Some(selector.pointer_hover(x, y).css_name()));
        });
    }
    drawing_area.add_controller(motion);

    let drag = gtk::GestureDrag::new();
    let start_x = Rc::new(Cell::new(0.0));
    {
        let selector = Rc::clone(selector);
        let start_x = Rc::clone(&start_x);
        drag.connect_drag_begin(move |_, x, y| {
            start_x.set(x);
            if let Ok(mut selector) = selector.try_borrow_mut() {
                selector.pointer_press(x, y);
            }
        });
    }
    {
        let selector = Rc::clone(selector);
        let start_x = Rc::clone(&start_x);
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let start_y = gesture.start_point().map_or(0.0, |(_, y)| y);
            if let Ok(mut selector) = selector.try_borrow_mut() {
                match selector.pointer_drag(start_x.get() + offset_x, start_y + offset_y) {
                    Ok(step) => trace!(?step, "drag update"),
                    Err(err) => warn!(%err, "drag update rejected"),
                }
            }
        });
    }
    {
        let selector = Rc::clone(selector);
        drag.connect_drag_end(move |_, _, _| {
            if let Ok(mut selector) = selector.try_borrow_mut() {
                selector.pointer_release();
            }
        });
    }
    drawing_area.add_controller(drag);

    let scroll = gtk::EventControllerScroll::new(
        gtk::EventControllerScrollFlags::VERTICAL | gtk::EventControllerScrollFlags::DISCRETE,
    );
    {
        let selector = Rc::clone(selector);
        scroll.connect_scroll(move |_, _dx, dy| {
            if let Ok(mut selector) = selector.try_borrow_mut() {
                selector.wheel(dy.round() as i32);
            }
            gtk::glib::Propagation::Stop
        });
    }
    drawing_area.add_controller(scroll);
}
