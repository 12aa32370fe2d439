pub mod action_bar;
pub mod chat_panel;
pub mod report_view;
pub mod stats_card;
