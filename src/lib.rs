pub mod frontend;

pub use frontend::pages::{Credentials, FormState, LoginPage, ValidationMessages};
pub use frontend::App;
