pub(crate) use self::{app_state::*, picture_cache::*, ticker::*, ui_state::*};

mod app_state;
mod picture_cache;
mod ticker;
mod ui_state;
