pub mod extract;
pub mod impl_fake;
pub mod interface;
