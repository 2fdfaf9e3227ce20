pub(crate) mod colorize;
pub(crate) mod palette;
