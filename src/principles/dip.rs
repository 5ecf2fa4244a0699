//! Dependency inversion: the order service depends on a `Database`
//! abstraction, not on a concrete engine.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::io::Write;

pub const THEORY: &str = "High-level modules should not depend on low-level modules; \
both should depend on abstractions.";

pub mod violation {
    use std::io::{self, Write};

    #[derive(Default)]
    pub struct MySqlDatabase;

    impl MySqlDatabase {
        pub fn save_order(&self, order: &str, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "MySQL save order: {}", order)
        }
    }

    /// Hard-wired to MySQL; switching engines means editing this type.
    #[derive(Default)]
    pub struct OrderService {
        database: MySqlDatabase,
    }

    impl OrderService {
        pub fn new() -> Self {
            Self {
                database: MySqlDatabase,
            }
        }

        pub fn create_order(&self, order: &str, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Creating order: {}", order)?;
            self.database.save_order(order, out)
        }
    }
}

pub mod solution {
    use std::io::{self, Write};

    pub trait Database {
        fn save_order(&self, order: &str, out: &mut dyn Write) -> io::Result<()>;
    }

    pub struct MySqlDatabase;

    impl Database for MySqlDatabase {
        fn save_order(&self, order: &str, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "MySQL save order: {}", order)
        }
    }

    pub struct PostgreSqlDatabase;

    impl Database for PostgreSqlDatabase {
        fn save_order(&self, order: &str, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "PostgreSQL save order: {}", order)
        }
    }

    pub struct OrderService {
        database: Box<dyn Database>,
    }

    impl OrderService {
        pub fn new(database: Box<dyn Database>) -> Self {
            Self { database }
        }

        pub fn create_order(&self, order: &str, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Creating order: {}", order)?;
            self.database.save_order(order, out)
        }
    }
}

pub struct DipDemo;

impl Demonstration for DipDemo {
    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn theory(&self) -> &'static str {
        THEORY
    }

    fn run_violation(&self, out: &mut dyn Write) -> Result<()> {
        let service = violation::OrderService::new();
        service.create_order("#123", out)?;
        Ok(())
    }

    fn run_solution(&self, out: &mut dyn Write) -> Result<()> {
        let service1 = solution::OrderService::new(Box::new(solution::MySqlDatabase));
        service1.create_order("#123", out)?;

        let service2 = solution::OrderService::new(Box::new(solution::PostgreSqlDatabase));
        service2.create_order("#456", out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::solution::{Database, OrderService};
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[test]
    fn test_solution_prints_both_engines() {
        let mut out = Vec::new();
        DipDemo.run_solution(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Creating order: #123",
                "MySQL save order: #123",
                "Creating order: #456",
                "PostgreSQL save order: #456",
            ]
        );
    }

    struct RecordingDatabase {
        saved: Rc<RefCell<Vec<String>>>,
    }

    impl Database for RecordingDatabase {
        fn save_order(&self, order: &str, _out: &mut dyn Write) -> io::Result<()> {
            self.saved.borrow_mut().push(order.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_service_accepts_any_database() {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let service = OrderService::new(Box::new(RecordingDatabase {
            saved: Rc::clone(&saved),
        }));

        let mut out = Vec::new();
        service.create_order("#789", &mut out).unwrap();

        assert_eq!(*saved.borrow(), vec!["#789".to_string()]);
        assert_eq!(String::from_utf8(out).unwrap(), "Creating order: #789\n");
    }
}
