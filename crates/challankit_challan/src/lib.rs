//! `challankit_challan` v1:
//! Transport-challan document kernel.
//!
//! Architecture:
//! - `conf`   : grid constants and default format presets
//! - `spec`   : request/totals models, cell formats, error types
//! - `layout` : declarative 32x10 template table
//! - `grid`   : pure grid planner (data merged into the template)
//! - `render` : rust_xlsxwriter rendering and file persistence
//! - `util`   : pure helper functions

pub mod conf;
pub mod grid;
pub mod layout;
pub mod render;
pub mod spec;
pub mod util;

pub use conf::{
    EnumFmtKey, N_IDX_ROW_ITEMS_FIRST, N_ITEM_SLOTS_MAX, N_NCOLS_CHALLAN_GRID,
    N_NROWS_CHALLAN_GRID, SpecChallanFormats, derive_default_challan_formats,
};
pub use grid::{SpecChallanGrid, SpecPlannedCell, plan_challan_grid};
pub use layout::{
    EnumChallanField, EnumSlotContent, SpecCellRegion, SpecItemSlot, SpecLayoutSlot,
    derive_challan_layout, derive_item_slots,
};
pub use render::ChallanWriter;
pub use spec::{
    ChallanRenderError, EnumCellAlign, EnumCellValue, SpecCellFormat, SpecChallanOutcome,
    SpecChallanRequest, SpecChallanTotals, SpecGridReport, SpecLineItem,
};
pub use util::{derive_challan_file_name, derive_challan_totals};
