//! UI-Layer mit egui: Canvas-Input, Painter, Panels und Status-Bar.

pub mod input;
pub mod painter;
pub mod regions_panel;
pub mod status;
pub mod toolbar;

pub use input::CanvasInput;
pub use painter::paint_scene;
pub use regions_panel::render_regions_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
