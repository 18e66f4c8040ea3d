pub(crate) mod fan;
pub(crate) mod measure;
pub(crate) mod wrap;
