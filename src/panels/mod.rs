mod central_panel;
mod code_panel;
mod properties_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use code_panel::code_panel;
pub use properties_panel::properties_panel;
pub use tools_panel::tools_panel;
