use super::model::{Hand, Radar, SweepArc};
use super::{HAND_WIDTH, RadarGeometry};
use cairo::{Antialias, Context, LineCap};

struct ArcRenderer<'a> {
    arc: &'a SweepArc,
    geometry: &'a RadarGeometry,
    opacity: f64,
}

impl<'a> ArcRenderer<'a> {
    fn new(arc: &'a SweepArc, geometry: &'a RadarGeometry, opacity: f64) -> Self {
        Self {
            arc,
            geometry,
            opacity,
        }
    }

    /// Wedge from the new tip, back against the rotation to the previous tip, then to the center.
    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        let (r, g, b, a) = self.arc.hue.sweep_color(self.opacity).into_components();
        let center = self.geometry.center();

        cr.new_path();
        cr.move_to(self.arc.tip.x, self.arc.tip.y);
        cr.arc_negative(
            center.x,
            center.y,
            self.geometry.radius,
            self.arc.tip_angle,
            self.arc.tail_angle,
        );
        cr.line_to(center.x, center.y);
        cr.close_path();
        cr.set_source_rgba(r, g, b, a);
        cr.fill()
    }
}

pub fn draw(cr: &Context, radar: &Radar) -> Result<(), cairo::Error> {
    let geometry = radar.geometry();

    // crisp edges between neighbouring slices
    cr.save()?;
    cr.set_antialias(Antialias::None);
    for (arc, opacity) in radar.sweep() {
        ArcRenderer::new(arc, geometry, opacity).draw(cr)?;
    }
    cr.restore()?;

    if let Some(hand) = radar.hand() {
        draw_hand(cr, hand, geometry)?;
    }
    Ok(())
}

fn draw_hand(cr: &Context, hand: &Hand, geometry: &RadarGeometry) -> Result<(), cairo::Error> {
    let (r, g, b, a) = hand.hue.hand_color().into_components();
    let center = geometry.center();

    cr.new_path();
    cr.set_source_rgba(r, g, b, a);
    cr.set_line_width(HAND_WIDTH);
    cr.set_line_cap(LineCap::Round);
    cr.move_to(center.x, center.y);
    cr.line_to(hand.tip.x, hand.tip.y);
    cr.stroke()
}

/// Standalone SVG document of the current sweep, in the same path format the overlay draws.
pub fn to_svg(radar: &Radar) -> String {
    let geometry = radar.geometry();
    let size = geometry.size;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"lagRadar\" height=\"{size}\" width=\"{size}\">"
    );
    svg.push_str("<g class=\"lagRadar-sweep\" shape-rendering=\"crispEdges\">");
    for (arc, opacity) in radar.sweep() {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            arc.svg_path(geometry),
            arc.hue.css_sweep(),
            opacity
        ));
    }
    svg.push_str("</g>");
    if let Some(hand) = radar.hand() {
        svg.push_str(&format!(
            "<path class=\"lagRadar-hand\" d=\"{}\" stroke=\"{}\" stroke-width=\"{HAND_WIDTH}\" stroke-linecap=\"round\"/>",
            hand.svg_path(geometry),
            hand.hue.css_hand()
        ));
    }
    svg.push_str(&format!(
        "<circle class=\"lagRadar-face\" cx=\"{m}\" cy=\"{m}\" r=\"{}\" fill=\"transparent\"/>",
        geometry.radius,
        m = geometry.middle
    ));
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::RadarConfig;
    use cairo::{Format, ImageSurface};

    fn radar_after(steps: usize, frame_ms: f64) -> Radar {
        let config = RadarConfig {
            slot_count: 8,
            speed: 0.0017,
            size: 64.0,
            inset: 3.0,
        };
        let mut radar = Radar::new(&config, 0.0);
        for step in 0..steps {
            radar.advance(step as f64 * frame_ms);
        }
        radar
    }

    #[test]
    fn test_draw_paints_pixels() {
        let radar = radar_after(12, 40.0);
        let mut surface = ImageSurface::create(Format::ARgb32, 64, 64).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            draw(&cr, &radar).unwrap();
        }
        surface.flush();
        let data = surface.data().unwrap();
        assert!(data.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn test_draw_empty_radar() {
        let radar = radar_after(0, 16.0);
        let surface = ImageSurface::create(Format::ARgb32, 64, 64).unwrap();
        let cr = Context::new(&surface).unwrap();
        assert!(draw(&cr, &radar).is_ok());
    }

    #[test]
    fn test_svg_document() {
        let radar = radar_after(3, 16.0);
        let svg = to_svg(&radar);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("fill-opacity").count(), 3);
        assert!(svg.contains("class=\"lagRadar-hand\""));
        assert!(svg.contains("r=\"29\""));
        assert!(svg.ends_with("</svg>"));
    }
}
