// View components
//
// Each component renders one region of the frame from `App` state. None of
// them mutate state; user intents are handled in the event loop.

pub mod analyzer_panel;
pub mod cache_panel;
pub mod formatters;
pub mod history_panel;
pub mod result_card;
pub mod status_bar;
pub mod toast;
