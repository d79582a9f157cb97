pub(crate) mod curve;
pub(crate) mod ease;
pub(crate) mod registry;
