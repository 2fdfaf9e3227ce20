pub(crate) mod month;
pub(crate) mod solver;
