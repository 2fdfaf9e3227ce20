pub(crate) mod coords;
