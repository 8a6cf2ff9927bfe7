//! Wire types shared by the Contribuinte Console client and the remote API.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
