pub(crate) mod composite;
pub(crate) mod compose;
pub(crate) mod text_layer;
