pub mod use_cases;

pub use use_cases::{
    forgot_password::{ForgotPasswordError, ForgotPasswordOutcome, ForgotPasswordUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
};
