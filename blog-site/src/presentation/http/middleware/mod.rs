pub(crate) mod colors;
pub(crate) mod method_override;
pub(crate) mod trace;
