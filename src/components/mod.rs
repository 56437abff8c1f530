pub mod generation_form;
pub mod header;
pub mod loading_spinner;
pub mod result_card;
pub mod stats_panel;

pub use generation_form::*;
pub use header::*;
pub use loading_spinner::*;
pub use result_card::*;
pub use stats_panel::*;
