use crate::core::{Demonstration, Principle};
use crate::principles::{DipDemo, IspDemo, LspDemo, OcpDemo, SrpDemo};

fn demonstration_for(principle: Principle) -> Box<dyn Demonstration> {
    match principle {
        Principle::Srp => Box::new(SrpDemo),
        Principle::Ocp => Box::new(OcpDemo),
        Principle::Lsp => Box::new(LspDemo),
        Principle::Isp => Box::new(IspDemo),
        Principle::Dip => Box::new(DipDemo),
    }
}

/// Every demonstration, in SRP, OCP, LSP, ISP, DIP order.
pub fn catalog() -> Vec<Box<dyn Demonstration>> {
    select(&[])
}

/// Requested demonstrations in canonical order without duplicates.
/// An empty request selects all of them.
pub fn select(requested: &[Principle]) -> Vec<Box<dyn Demonstration>> {
    Principle::ALL
        .into_iter()
        .filter(|p| requested.is_empty() || requested.contains(p))
        .map(demonstration_for)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principles(demos: &[Box<dyn Demonstration>]) -> Vec<Principle> {
        demos.iter().map(|d| d.principle()).collect()
    }

    #[test]
    fn test_catalog_is_in_canonical_order() {
        assert_eq!(principles(&catalog()), Principle::ALL.to_vec());
    }

    #[test]
    fn test_select_orders_and_dedups() {
        let demos = select(&[Principle::Dip, Principle::Srp, Principle::Dip]);
        assert_eq!(principles(&demos), vec![Principle::Srp, Principle::Dip]);
    }

    #[test]
    fn test_every_demo_has_theory() {
        for demo in catalog() {
            assert!(!demo.theory().is_empty(), "{} has no theory", demo.principle());
        }
    }
}
