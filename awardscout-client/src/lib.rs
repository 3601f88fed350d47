pub mod api;
pub mod controller;
pub mod render;
pub mod state;

pub use api::{ClientError, HttpSearchApi, SearchApi};
pub use controller::SearchController;
pub use state::{Action, Effect, Outcome, Phase, SearchState};
