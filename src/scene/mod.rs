pub(crate) mod compose;
pub(crate) mod model;
pub(crate) mod status;
pub(crate) mod text;
