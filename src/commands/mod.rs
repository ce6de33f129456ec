pub mod deploy;
pub mod session;
pub mod status;
