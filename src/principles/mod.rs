pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

pub use dip::DipDemo;
pub use isp::IspDemo;
pub use lsp::LspDemo;
pub use ocp::OcpDemo;
pub use srp::SrpDemo;
