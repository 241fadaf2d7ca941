pub mod code_view;
pub mod explorer;
pub mod file_node;
pub mod language_switcher;
pub mod rating_input;
