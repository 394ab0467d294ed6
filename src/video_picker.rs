pub mod impl_args;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
