#![doc(hidden)]

pub mod mutation;
pub mod testing;

#[cfg(feature = "proptest")]
pub mod proptest;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
