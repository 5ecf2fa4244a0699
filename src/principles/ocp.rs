//! Open/closed: add payment methods without touching the processor.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::io::Write;

pub const THEORY: &str = "Code should be open for extension but closed for modification.";

pub mod violation {
    use std::io::{self, Write};

    /// Every new payment kind means another branch here.
    #[derive(Default)]
    pub struct PaymentProcessor;

    impl PaymentProcessor {
        pub fn process_payment(
            &self,
            kind: &str,
            amount: f64,
            out: &mut dyn Write,
        ) -> io::Result<()> {
            if kind == "credit_card" {
                writeln!(out, "Pay amount: {:?} with credit card", amount)
            } else if kind == "paypal" {
                writeln!(out, "Pay amount: {:?} with PayPal", amount)
            } else {
                writeln!(out, "Unknown payment method")
            }
        }
    }
}

pub mod solution {
    use std::io::{self, Write};

    pub trait PaymentMethod {
        fn pay(&self, amount: f64, out: &mut dyn Write) -> io::Result<()>;
    }

    pub struct CreditCardPayment;

    impl PaymentMethod for CreditCardPayment {
        fn pay(&self, amount: f64, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Pay amount: {:?} with credit card", amount)
        }
    }

    pub struct PayPalPayment;

    impl PaymentMethod for PayPalPayment {
        fn pay(&self, amount: f64, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Pay amount: {:?} with PayPal", amount)
        }
    }

    #[derive(Default)]
    pub struct PaymentProcessor;

    impl PaymentProcessor {
        pub fn process_payment(
            &self,
            method: &dyn PaymentMethod,
            amount: f64,
            out: &mut dyn Write,
        ) -> io::Result<()> {
            method.pay(amount, out)
        }
    }
}

pub struct OcpDemo;

impl Demonstration for OcpDemo {
    fn principle(&self) -> Principle {
        Principle::Ocp
    }

    fn theory(&self) -> &'static str {
        THEORY
    }

    fn run_violation(&self, out: &mut dyn Write) -> Result<()> {
        let processor = violation::PaymentProcessor;
        processor.process_payment("credit_card", 100.0, out)?;
        processor.process_payment("paypal", 200.0, out)?;
        processor.process_payment("apple_pay", 300.0, out)?;
        Ok(())
    }

    fn run_solution(&self, out: &mut dyn Write) -> Result<()> {
        let processor = solution::PaymentProcessor;
        let credit_card = solution::CreditCardPayment;
        let paypal = solution::PayPalPayment;

        processor.process_payment(&credit_card, 100.0, out)?;
        processor.process_payment(&paypal, 200.0, out)?;
        Ok(())
    }
}
