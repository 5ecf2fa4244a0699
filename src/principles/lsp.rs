//! Liskov substitution: a subtype must be usable wherever its parent is.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::io::Write;

pub const THEORY: &str = "Subtypes should replace the parent type \
without changing the program's logic.";

/// `ElectricCar` claims to be a `Car` but cannot honour `refuel`, so code
/// written against `Car` fails at runtime.
pub mod violation {
    use crate::utils::error::Result;
    use std::io::Write;

    pub use crate::utils::error::RefuelError;

    pub trait Car {
        fn drive(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Drive")?;
            Ok(())
        }

        fn refuel(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Refuel")?;
            Ok(())
        }
    }

    pub struct GasolineCar;

    impl Car for GasolineCar {}

    pub struct ElectricCar;

    impl Car for ElectricCar {
        fn refuel(&self, _out: &mut dyn Write) -> Result<()> {
            Err(RefuelError::ElectricCar.into())
        }
    }

    pub fn refuel_car(car: &dyn Car, out: &mut dyn Write) -> Result<()> {
        car.refuel(out)
    }
}

/// Refuelling and charging are separate capabilities; only fuelable cars
/// reach `refuel_car`.
pub mod solution {
    use std::io::{self, Write};

    pub trait Car {
        fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Drive")
        }
    }

    pub trait Fuelable {
        fn refuel(&self, out: &mut dyn Write) -> io::Result<()>;
    }

    pub trait Chargeable {
        fn charge(&self, out: &mut dyn Write) -> io::Result<()>;
    }

    pub struct GasolineCar;

    impl Car for GasolineCar {}

    impl Fuelable for GasolineCar {
        fn refuel(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Refuel with gasoline")
        }
    }

    pub struct ElectricCar;

    impl Car for ElectricCar {}

    impl Chargeable for ElectricCar {
        fn charge(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Charge")
        }
    }

    /// Refuels anything that can take fuel.
    ///
    /// ```
    /// use solid_demos::principles::lsp::solution::{refuel_car, GasolineCar};
    ///
    /// let mut out = Vec::new();
    /// refuel_car(&GasolineCar, &mut out).unwrap();
    /// assert_eq!(out, b"Refuel with gasoline\n");
    /// ```
    ///
    /// An electric car is rejected by the compiler:
    ///
    /// ```compile_fail
    /// use solid_demos::principles::lsp::solution::{refuel_car, ElectricCar};
    ///
    /// let mut out = Vec::new();
    /// refuel_car(&ElectricCar, &mut out).unwrap();
    /// ```
    pub fn refuel_car<F: Fuelable + ?Sized>(car: &F, out: &mut dyn Write) -> io::Result<()> {
        car.refuel(out)
    }
}

pub struct LspDemo;

impl Demonstration for LspDemo {
    fn principle(&self) -> Principle {
        Principle::Lsp
    }

    fn theory(&self) -> &'static str {
        THEORY
    }

    fn run_violation(&self, out: &mut dyn Write) -> Result<()> {
        use violation::Car;

        let bmw = violation::GasolineCar;
        bmw.drive(out)?;
        violation::refuel_car(&bmw, out)?;

        let tesla = violation::ElectricCar;
        tesla.drive(out)?;
        violation::refuel_car(&tesla, out)
    }

    fn run_solution(&self, out: &mut dyn Write) -> Result<()> {
        use solution::{Car, Chargeable};

        let bmw = solution::GasolineCar;
        bmw.drive(out)?;
        solution::refuel_car(&bmw, out)?;

        let tesla = solution::ElectricCar;
        tesla.drive(out)?;
        tesla.charge(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DemoError;

    #[test]
    fn test_violation_fails_after_gasoline_car() {
        let mut out = Vec::new();
        let err = LspDemo.run_violation(&mut out).unwrap_err();

        assert!(matches!(
            err,
            DemoError::ViolationFailure(violation::RefuelError::ElectricCar)
        ));
        assert_eq!(String::from_utf8(out).unwrap(), "Drive\nRefuel\nDrive\n");
    }

    #[test]
    fn test_solution_refuels_and_charges() {
        let mut out = Vec::new();
        LspDemo.run_solution(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Drive", "Refuel with gasoline", "Drive", "Charge"]);
    }

    #[test]
    fn test_refuel_error_message() {
        assert_eq!(
            violation::RefuelError::ElectricCar.to_string(),
            "Can't fuel an electric car with gasoline"
        );
    }
}
