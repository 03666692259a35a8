//! UI-Komponenten: Overlay der Info-Controls, Karte, Feature-Liste, Menü.

pub mod feature_list;
/// Overlay der Info-Controls
///
/// Zeigt Text und Toolbar der aktuellen Auswahl oder das Namensformular.
pub mod info_control;
pub mod map_canvas;
pub mod menu;

pub use feature_list::render_feature_list;
pub use info_control::render_info_control;
pub use map_canvas::MapCanvas;
pub use menu::{render_menu, MenuAction};
