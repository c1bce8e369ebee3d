//! Buzzboard core: pure state machine and view-model helpers.
mod article;
mod category;
mod effect;
mod list;
mod msg;
mod state;
mod update;
mod view_model;

pub use article::Article;
pub use category::Category;
pub use effect::Effect;
pub use list::{HeadlineList, ListChange};
pub use msg::Msg;
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, HeadlineRowView, NO_DESCRIPTION, NO_TITLE};
