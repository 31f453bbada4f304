pub(crate) mod colors;
pub(crate) mod posts;
