use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::host::{GtkContainer, MonotonicClock, TickScheduler};
use crate::gui::theme;
use crate::gui::window;
use crate::radar::{self, RadarHandle};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

pub struct AppModel {
    pub config: Config,
    pub visible: bool,
    pub radar: Option<RadarHandle>,
    pub root: gtk::ApplicationWindow,
    pub container: gtk::Box,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Toggle,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Toggle => AppMsg::Toggle,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn mount(&mut self) {
        if self.radar.is_some() {
            return;
        }
        let radar_config = self.config.radar.resolve(window::primary_monitor_size());
        let side = radar_config.size.round() as i32;
        self.root.set_default_size(side, side);

        self.radar = Some(radar::create(
            radar_config,
            GtkContainer::new(&self.container),
            TickScheduler::new(&self.container),
            MonotonicClock,
        ));
    }

    fn unmount(&mut self) {
        if let Some(radar) = self.radar.take() {
            radar.destroy();
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Lag Radar"),
            #[watch]
            set_visible: model.visible,
            add_css_class: theme::WINDOW_CLASS,
            set_decorated: false,
            set_resizable: false,

            #[name = "container"]
            gtk::Box {
                add_css_class: theme::CONTAINER_CLASS,
                set_halign: gtk::Align::Center,
                set_valign: gtk::Align::Center,
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root);
        window::apply_overlay_settings(&root, &config.overlay);
        window::make_click_through(&root);

        let show_on_start = config.overlay.show_on_start;
        let model = AppModel {
            config,
            visible: false,
            radar: None,
            root: root.clone(),
            container: gtk::Box::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.container = widgets.container.clone();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(false);
        if show_on_start {
            sender.input(AppMsg::Show);
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.mount();
                self.visible = true;
            }
            AppMsg::Hide => {
                self.unmount();
                self.visible = false;
            }
            AppMsg::Toggle => {
                sender.input(if self.visible {
                    AppMsg::Hide
                } else {
                    AppMsg::Show
                });
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    window::apply_overlay_settings(&self.root, &new_config.overlay);
                    self.config = new_config;
                    if self.radar.is_some() {
                        self.unmount();
                        self.mount();
                    }
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
