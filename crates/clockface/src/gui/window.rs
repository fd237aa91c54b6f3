use crate::config::Corner;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

impl Corner {
    pub fn edges(&self) -> &'static [Edge] {
        match self {
            Self::TopLeft => &[Edge::Top, Edge::Left],
            Self::TopRight => &[Edge::Top, Edge::Right],
            Self::BottomLeft => &[Edge::Bottom, Edge::Left],
            Self::BottomRight => &[Edge::Bottom, Edge::Right],
            Self::Center => &[],
        }
    }
}

/// Pins the window to the desktop layer, below regular windows.
pub fn init_layer_shell(window: &gtk::ApplicationWindow, corner: Corner, margin: i32) {
    window.init_layer_shell();
    window.set_layer(Layer::Bottom);
    window.set_namespace(Some("clockface"));
    window.set_exclusive_zone(0);
    window.set_keyboard_mode(KeyboardMode::None);
    anchor(window, corner, margin);
}

pub fn anchor(window: &gtk::ApplicationWindow, corner: Corner, margin: i32) {
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        let anchored = corner.edges().contains(&edge);
        window.set_anchor(edge, anchored);
        window.set_margin(edge, if anchored { margin } else { 0 });
    }
}
