use crate::config::{Corner, OverlaySettings};
use gdk4::prelude::*;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, Layer, LayerShell};

pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("lagradar"));
    window.set_exclusive_zone(-1);
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::None);
}

pub fn apply_overlay_settings(window: &gtk::ApplicationWindow, settings: &OverlaySettings) {
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, anchored(settings.corner, edge));
        window.set_margin(edge, settings.margin);
    }
}

fn anchored(corner: Corner, edge: Edge) -> bool {
    match edge {
        Edge::Top => corner.is_top(),
        Edge::Bottom => !corner.is_top(),
        Edge::Left => corner.is_left(),
        Edge::Right => !corner.is_left(),
        _ => false,
    }
}

/// Lets clicks fall through to whatever is under the overlay.
pub fn make_click_through(window: &gtk::ApplicationWindow) {
    window.connect_realize(|window| {
        if let Some(surface) = window.surface() {
            surface.set_input_region(&cairo::Region::create());
        }
    });
}

/// Width and height of the first monitor, used to size the radar when no size is configured.
pub fn primary_monitor_size() -> Option<(f64, f64)> {
    let display = gdk4::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items())
        .find_map(|i| {
            monitors
                .item(i)
                .and_then(|item| item.downcast::<gdk4::Monitor>().ok())
        })
        .map(|m| {
            let geometry = m.geometry();
            (geometry.width() as f64, geometry.height() as f64)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_anchors() {
        let anchors = |corner| {
            [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right].map(|edge| anchored(corner, edge))
        };
        assert_eq!(anchors(Corner::BottomRight), [false, true, false, true]);
        assert_eq!(anchors(Corner::TopLeft), [true, false, true, false]);
        assert_eq!(anchors(Corner::TopRight), [true, false, false, true]);
        assert_eq!(anchors(Corner::BottomLeft), [false, true, true, false]);
    }
}
