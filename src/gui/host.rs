//! GTK side of the radar: a `DrawingArea` surface, a `Box` container,
//! widget tick callbacks as the frame scheduler and glib's monotonic clock.

use super::theme::SURFACE_CLASS;
use crate::radar::{
    self, Clock, FrameCallback, FrameScheduler, HostContainer, HostError, Radar, RadarSurface,
};
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct RadarArea {
    area: gtk::DrawingArea,
    scene: Rc<RefCell<Option<Radar>>>,
}

impl RadarArea {
    fn new(size: f64) -> Self {
        let scene: Rc<RefCell<Option<Radar>>> = Rc::new(RefCell::new(None));
        let area = gtk::DrawingArea::builder()
            .content_width(size.round() as i32)
            .content_height(size.round() as i32)
            .can_target(false)
            .can_focus(false)
            .build();
        area.add_css_class(SURFACE_CLASS);

        let scene_draw = scene.clone();
        area.set_draw_func(move |_, cr, _, _| {
            if let Some(radar) = scene_draw.borrow().as_ref()
                && let Err(e) = radar::draw(cr, radar)
            {
                log::error!("Drawing error: {}", e);
            }
        });

        Self { area, scene }
    }
}

impl RadarSurface for RadarArea {
    fn present(&self, radar: &Radar) {
        self.scene.replace(Some(radar.clone()));
        self.area.queue_draw();
    }
}

pub struct GtkContainer {
    widget: gtk::Box,
}

impl GtkContainer {
    pub fn new(widget: &gtk::Box) -> Self {
        Self {
            widget: widget.clone(),
        }
    }
}

impl HostContainer for GtkContainer {
    type Surface = RadarArea;

    fn create_surface(&self, size: f64) -> RadarArea {
        RadarArea::new(size)
    }

    fn attach(&self, surface: &RadarArea) -> Result<(), HostError> {
        if surface.area.parent().is_some() {
            return Err(HostError::AlreadyAttached);
        }
        self.widget.append(&surface.area);
        Ok(())
    }

    fn detach(&self, surface: &RadarArea) -> Result<(), HostError> {
        match surface.area.parent() {
            Some(parent) if parent == *self.widget.upcast_ref::<gtk::Widget>() => {
                self.widget.remove(&surface.area);
                Ok(())
            }
            _ => Err(HostError::NotAttached),
        }
    }
}

/// One-shot tick callbacks on a widget: GTK's "before the next repaint".
///
/// Ticks only fire while the widget is mapped, so a hidden overlay does not animate.
pub struct TickScheduler {
    widget: gtk::Widget,
}

impl TickScheduler {
    pub fn new(widget: &impl IsA<gtk::Widget>) -> Self {
        Self {
            widget: widget.clone().upcast(),
        }
    }
}

impl FrameScheduler for TickScheduler {
    type Handle = gtk::TickCallbackId;

    fn request_frame(&self, callback: FrameCallback) -> gtk::TickCallbackId {
        let callback = Cell::new(Some(callback));
        self.widget.add_tick_callback(move |_, _| {
            if let Some(callback) = callback.take() {
                callback();
            }
            glib::ControlFlow::Break
        })
    }

    fn cancel_frame(&self, handle: gtk::TickCallbackId) {
        handle.remove();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        glib::monotonic_time() as f64 / 1000.0
    }
}
