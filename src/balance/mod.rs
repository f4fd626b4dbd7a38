pub mod calculator;
pub mod validator;
