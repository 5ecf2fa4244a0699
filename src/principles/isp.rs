//! Interface segregation: no type should implement methods it cannot use.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::io::Write;

pub const THEORY: &str = "Types should not be forced to implement methods they don't need.";

/// One fat `Vehicle` trait; every implementor fills the gaps with refusals.
pub mod violation {
    use std::io::{self, Write};

    pub trait Vehicle {
        fn drive(&self, out: &mut dyn Write) -> io::Result<()>;
        fn sail(&self, out: &mut dyn Write) -> io::Result<()>;
        fn fly(&self, out: &mut dyn Write) -> io::Result<()>;
    }

    pub struct Car;

    impl Vehicle for Car {
        fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Drive.")
        }

        fn sail(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "A car can't sail.")
        }

        fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "A car can't fly.")
        }
    }

    pub struct Boat;

    impl Vehicle for Boat {
        fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Can't drive a boat on the road")
        }

        fn sail(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Sail.")
        }

        fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "A boat can't fly")
        }
    }

    pub struct Airplane;

    impl Vehicle for Airplane {
        fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "A plane can't drive on the road.")
        }

        fn sail(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "A plane can't sail.")
        }

        fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Fly")
        }
    }
}

pub mod solution {
    use std::io::{self, Write};

    pub trait Drivable {
        fn drive(&self, out: &mut dyn Write) -> io::Result<()>;
    }

    pub trait Flyable {
        fn fly(&self, out: &mut dyn Write) -> io::Result<()>;
    }

    pub trait Sailable {
        fn sail(&self, out: &mut dyn Write) -> io::Result<()>;
    }

    pub struct Car;

    impl Drivable for Car {
        fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "I'm driving the car")
        }
    }

    pub struct Airplane;

    impl Flyable for Airplane {
        fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Flying with a plane")
        }
    }

    pub struct Boat;

    impl Sailable for Boat {
        fn sail(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Sail on the ocean")
        }
    }
}

pub struct IspDemo;

impl Demonstration for IspDemo {
    fn principle(&self) -> Principle {
        Principle::Isp
    }

    fn theory(&self) -> &'static str {
        THEORY
    }

    fn run_violation(&self, out: &mut dyn Write) -> Result<()> {
        use violation::Vehicle;

        let vehicles: [&dyn Vehicle; 3] = [&violation::Car, &violation::Boat, &violation::Airplane];
        for vehicle in vehicles {
            vehicle.drive(out)?;
            vehicle.sail(out)?;
            vehicle.fly(out)?;
        }
        Ok(())
    }

    fn run_solution(&self, out: &mut dyn Write) -> Result<()> {
        use solution::{Drivable, Flyable, Sailable};

        solution::Car.drive(out)?;
        solution::Airplane.fly(out)?;
        solution::Boat.sail(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_uses_one_capability_each() {
        let mut out = Vec::new();
        IspDemo.run_solution(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "I'm driving the car\nFlying with a plane\nSail on the ocean\n"
        );
    }

    #[test]
    fn test_violation_forces_refusals() {
        let mut out = Vec::new();
        IspDemo.run_violation(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Drive.",
                "A car can't sail.",
                "A car can't fly.",
                "Can't drive a boat on the road",
                "Sail.",
                "A boat can't fly",
                "A plane can't drive on the road.",
                "A plane can't sail.",
                "Fly",
            ]
        );
    }
}
