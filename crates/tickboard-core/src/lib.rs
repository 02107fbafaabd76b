//! Core contracts for tickboard.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The route-level access gate
//! - Series-to-column mapping and display formatters
//! - Row rendering over column descriptors

pub mod columns;
pub mod domain;
pub mod error;
pub mod format;
pub mod gate;
pub mod table;

pub use columns::{columns_for, columns_for_key, CellFormat, ColumnDescriptor};
pub use domain::{
    session_or_anonymous, Role, SeriesKind, Session, SessionProvider, Symbol,
};
pub use error::{CoreError, ProviderError, ValidationError};
pub use format::{format_currency, format_fixed, format_grouped_int};
pub use gate::{can_enter_admin, can_enter_protected, evaluate, NavDecision, RouteClass};
pub use table::{render_cell, render_row, Record};
