//! Phone verification provider interface
//!
//! The provider generates the one-time code, delivers it by SMS and matches
//! submitted codes. This crate only drives it through [`VerificationProvider`].

mod traits;

pub use traits::VerificationProvider;
