//! # planejamento-pdf – the BI + IA planning report as PDF
//!
//! Two independent ways to produce `docs/planejamento-bi-ia.pdf`:
//!
//! - **Native** ([`native`]): the report is built from a static content
//!   table and typeset directly.
//!   1. **Story** – content blocks → flowables ([`story`])
//!   2. **Paginate** – flow onto A4 frames ([`pagination`])
//!   3. **Render** – emit PDF bytes via printpdf ([`render`])
//! - **External** ([`converter`]): the HTML edition is handed to
//!   `wkhtmltopdf`, with a manual fallback when the tool is missing.

pub mod content;
pub mod converter;
pub mod error;
pub mod fonts;
pub mod layout_config;
pub mod native;
pub mod pagination;
pub mod render;
pub mod story;
pub mod style;

pub use error::{Error, Result};
pub use native::{generate_report, RenderConfig};
