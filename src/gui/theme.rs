use gtk::gdk;
use gtk4 as gtk;

pub const WINDOW_CLASS: &str = "lagradar-window";
pub const CONTAINER_CLASS: &str = "lagradar-container";
pub const SURFACE_CLASS: &str = "lagradar";

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.lagradar-window, .lagradar-container, .lagradar {
    background: none;
    background-color: transparent;
    box-shadow: none;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
