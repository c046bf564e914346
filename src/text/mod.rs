pub(crate) mod builtin;
pub(crate) mod face;
pub(crate) mod shape;
pub(crate) mod typeset;
