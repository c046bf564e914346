pub(crate) mod card;
pub(crate) mod fit;
pub(crate) mod wrap;
