//! Tabular data engine
//!
//! A pure, synchronous filter/sort/paginate engine over in-memory rows.
//! Every queue and report screen renders through the same pipeline:
//! the view layer owns the state ([`TableState`]), hands it to [`view`]
//! together with the rows and column definitions, and gets back exactly
//! the slice of rows to display plus the pagination metadata needed to
//! render page controls.
//!
//! The engine holds no state of its own and never performs I/O. Identical
//! inputs always produce identical outputs, and malformed filter or cell
//! values degrade to "non-excluding" rather than erroring, so a view built
//! on top of it cannot be crashed by bad data.
//!
//! # Example
//!
//! ```
//! use tableview::{Column, Row, TableState, view};
//!
//! let rows = vec![
//!     Row::new().set("vendor", "Contoso").set("total", 1250.0),
//!     Row::new().set("vendor", "Fabrikam").set("total", 90.5),
//! ];
//! let columns = vec![
//!     Column::text("vendor", "Vendor").sortable().filterable(),
//!     Column::number("total", "Total").sortable().filterable(),
//! ];
//!
//! let mut state = TableState::with_page_size(25);
//! state.set_filter("vendor", "cont");
//!
//! let table = view(&rows, &columns, &state);
//! assert_eq!(table.rows().len(), 1);
//! assert_eq!(table.total_pages(), 1);
//! ```

mod column;
mod error;
mod filter;
mod pager;
mod row;
mod sort;
mod state;
mod value;
mod view;

pub use column::*;
pub use error::*;
pub use filter::*;
pub use pager::*;
pub use row::*;
pub use sort::*;
pub use state::*;
pub use value::*;
pub use view::*;
