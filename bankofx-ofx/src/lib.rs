//! bankofx-ofx: OFX 1.02 (SGML) statement rendering

pub mod render;

pub use render::{StatementContext, format_amount, render_statement};
