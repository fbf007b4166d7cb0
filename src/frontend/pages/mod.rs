//! Page components for the AIshan AI frontend

mod login;

pub use login::{
    Credentials, FormState, LoginPage, ValidationMessages, DEMO_EMAIL, DEMO_MESSAGES,
    DEMO_PASSWORD, FEATURES,
};
