//! Single responsibility: each type owns exactly one reason to change.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::io::Write;

pub const THEORY: &str = "Each object should have only one responsibility, \
and that responsibility should be encapsulated within it.";

/// `User` carries both the user data and the email-sending logic.
pub mod violation {
    use std::io::{self, Write};

    pub struct User {
        pub name: String,
        pub email: String,
    }

    impl User {
        pub fn new(name: &str, email: &str) -> Self {
            Self {
                name: name.to_string(),
                email: email.to_string(),
            }
        }

        pub fn send_email(&self, message: &str, out: &mut dyn Write) -> io::Result<()> {
            writeln!(
                out,
                "Sending email to {} with message: {}",
                self.email, message
            )
        }
    }
}

pub mod solution {
    use std::io::{self, Write};

    pub struct User {
        pub name: String,
        pub email: String,
    }

    impl User {
        pub fn new(name: &str, email: &str) -> Self {
            Self {
                name: name.to_string(),
                email: email.to_string(),
            }
        }
    }

    /// Sending mail lives here so `User` stays plain data.
    #[derive(Default)]
    pub struct EmailService;

    impl EmailService {
        pub fn send_email(&self, to: &User, message: &str, out: &mut dyn Write) -> io::Result<()> {
            writeln!(
                out,
                "[SRP] Sending email to {} with message: {}",
                to.email, message
            )
        }
    }
}

pub struct SrpDemo;

impl Demonstration for SrpDemo {
    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn theory(&self) -> &'static str {
        THEORY
    }

    fn run_violation(&self, out: &mut dyn Write) -> Result<()> {
        let user = violation::User::new("Agile", "freak@agl.com");
        user.send_email("Welcome to the Agile Freaks!", out)?;
        Ok(())
    }

    fn run_solution(&self, out: &mut dyn Write) -> Result<()> {
        let user = solution::User::new("Agile", "freak@agl.com");
        let email_service = solution::EmailService;
        email_service.send_email(&user, "[SRP] Welcome to the Agile Freaks!", out)?;
        Ok(())
    }
}
