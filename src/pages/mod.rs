pub mod games;
pub mod login;
pub mod signup;
