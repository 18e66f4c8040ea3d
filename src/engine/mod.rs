pub(crate) mod host;
pub(crate) mod panel;
pub(crate) mod state;
