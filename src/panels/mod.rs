mod central_panel;
mod mobile_menu;
mod tools_panel;

pub use central_panel::central_panel;
pub use mobile_menu::{MenuState, overlay, top_bar};
pub use tools_panel::{PanelAction, tool_controls, tools_panel};
