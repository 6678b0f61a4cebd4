pub(crate) mod board;
pub(crate) mod layout;
pub(crate) mod memo;
pub(crate) mod modal;
pub(crate) mod overlay;
pub(crate) mod timer;
