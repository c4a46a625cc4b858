mod app;
mod color_select;
mod text_input;

pub use app::App;
