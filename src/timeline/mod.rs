pub(crate) mod calendar;
pub(crate) mod resolver;
