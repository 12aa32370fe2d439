pub mod category;
pub mod dialog;
pub mod plan;
pub mod reveal;
