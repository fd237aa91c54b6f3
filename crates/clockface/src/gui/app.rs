use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::clock::{self, CairoMetrics, ClockState};
use crate::gui::{theme, window};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<ClockState>>,
    pub config_path: PathBuf,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn apply_preferred_size(&self) {
        let size = self.state.borrow().preferred_size();
        self.drawing_area.set_content_width(size.width.round() as i32);
        self.drawing_area.set_content_height(size.height.round() as i32);
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Clockface"),
            add_css_class: "clockface-window",
            set_decorated: false,
            set_resizable: false,

            #[name = "drawing_area"]
            gtk::DrawingArea {
                add_css_class: "clockface-dial",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::GestureClick {
                    set_button: 3,
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Quit);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, config_path, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root, config.window.corner, config.window.margin);

        let state = Rc::new(RefCell::new(ClockState::new(&config)));

        let model = AppModel {
            state: state.clone(),
            config_path,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.apply_preferred_size();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                let state = state_draw.borrow();
                let instructions = state.frame(&CairoMetrics::new(cr));
                if let Err(e) = clock::draw(cr, &instructions, f64::from(width), f64::from(height))
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(width, height) => {
                self.state
                    .borrow_mut()
                    .resize(f64::from(width), f64::from(height));
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.state.borrow_mut().reload(&new_config);
                    window::anchor(
                        &self.root,
                        new_config.window.corner,
                        new_config.window.margin,
                    );
                    self.apply_preferred_size();
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => {
                self.root.close();
            }
        }
    }
}
