//! Application services - business rules on top of the ports.

mod expenses;
mod posts;
mod users;

use std::str::FromStr;

pub use expenses::ExpenseService;
pub use posts::{PostService, PostServiceConfig};
pub use users::UserService;

/// How strictly post mutations are validated.
///
/// `Lenient` checks what creation strictly needs and trusts updates.
/// `Strict` also re-checks author references and category lists on update
/// and refuses empty category lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    Lenient,
    Strict,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(ValidationMode::Lenient),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(format!("unknown validation mode '{other}'")),
        }
    }
}
