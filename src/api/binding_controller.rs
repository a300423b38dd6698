use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::{SharedInterval, TimeInterval, TimelineWindow};
use crate::error::SelectorResult;
use crate::render::Renderer;

use super::IntervalSelector;
use super::selector::IntervalBinding;

impl<R: Renderer> IntervalSelector<R> {
    /// The interval currently edited by this selector, if any.
    #[must_use]
    pub fn interval(&self) -> Option<SharedInterval> {
        self.binding.as_ref().map(|binding| binding.interval.clone())
    }

    /// Replaces the bound interval.
    ///
    /// The selector stops listening to the previous interval and starts
    /// listening to the new one. The window is moved to begin one hour before
    /// the interval start only when the interval is not fully visible; an
    /// already visible interval leaves the window where it is. Call
    /// `show_interval` to re-centre unconditionally.
    ///
    /// When re-centring fails because the window end would leave the
    /// representable time range, the interval stays bound and the error is
    /// returned with the window unchanged.
    pub fn bind_interval(&mut self, interval: Option<SharedInterval>) -> SelectorResult<()> {
        if let Some(previous) = self.binding.take() {
            previous.interval.unsubscribe(previous.listener_id);
        }
        self.interaction.on_release();
        self.geometry = None;

        if let Some(interval) = interval {
            let redraw = self.redraw.clone();
            let listener_id = interval.subscribe(Rc::new(move |value: &TimeInterval| {
                trace!(start = %value.start(), end = %value.end(), "bound interval changed");
                redraw.request();
            }));
            let value = interval.get();
            self.binding = Some(IntervalBinding {
                interval,
                listener_id,
            });
            debug!(start = %value.start(), end = %value.end(), "interval bound");

            if !self.window.contains_interval(value) {
                self.show_interval()?;
            }
        } else {
            debug!("interval unbound");
        }

        self.redraw.request();
        Ok(())
    }

    /// Moves the window to begin one hour before the bound interval's start,
    /// keeping the display length. Does nothing when no interval is bound.
    pub fn show_interval(&mut self) -> SelectorResult<()> {
        let Some(value) = self.binding.as_ref().map(|binding| binding.interval.get()) else {
            return Ok(());
        };
        let window = TimelineWindow::leading(value, self.window.length_minutes())?;
        self.window = window.with_offset(self.display_offset);
        debug!(window_start = %self.window.start(), "window recentered on interval");
        self.redraw.request();
        Ok(())
    }
}
