pub(crate) mod impl_display_backend;
pub mod utils;
