//! Content Generation UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: Generation Client (webhook call)
//! - view_model.rs: ContentCreatorVm with RwSignals and the copy timer
//! - view.rs: Main component ContentCreatorPage
//! - result_card.rs: Card with one generated text and its copy button

mod model;
mod result_card;
mod view;
mod view_model;

pub use model::generate;
pub use result_card::ResultCard;
pub use view::ContentCreatorPage;
pub use view_model::ContentCreatorVm;
