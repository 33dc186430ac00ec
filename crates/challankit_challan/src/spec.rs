//! Shared challan specification models.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumCellAlign {
    /// Left-aligned.
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

/// Cell format specification consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<EnumCellAlign>,
    /// Vertical centering.
    pub valign_center: Option<bool>,
    /// Border style for all sides (0 = none, 1 = thin).
    pub border: Option<i64>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.or(self.align),
            valign_center: other.valign_center.or(self.valign_center),
            border: other.border.or(self.border),
        }
    }
}

/// Planned cell value in the challan grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCellValue {
    /// Empty cell (still bordered and possibly merged).
    Blank,
    /// Text value; always stored upper-cased.
    Text(String),
    /// Integer value (counts and amounts; no fractional money).
    Integer(i64),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RequestModels

/// One challan line item; exists only within a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLineItem {
    /// Item description.
    pub name_item: String,
    /// HSN classification code.
    pub code_hsn: String,
    /// Piece count (non-negative by construction).
    pub cnt_pieces: u32,
    /// Line amount in whole currency units.
    pub amount: i64,
}

/// Full input for one challan generation call.
///
/// Item order determines row order and 1-based serial numbering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecChallanRequest {
    /// Supplier/company name (store lookup key, uppercase).
    pub name_company: String,
    /// Transport name (store lookup key, uppercase).
    pub name_transport: String,
    /// Supplier contact number rendered in the header.
    pub contact_no: String,
    /// Ordered line items.
    pub items: Vec<SpecLineItem>,
    /// Discount subtracted from the total amount.
    pub discount: i64,
    /// GST added to the total amount.
    pub gst: i64,
    /// Challan date as entered (`DD.MM.YY`).
    pub date: String,
    /// Challan number rendered in the header.
    pub challan_no: String,
    /// Other-party goods piece count (row 28 note).
    pub cnt_goods_other_party: u64,
    /// Other-party goods amount (row 28 note).
    pub amount_goods_other_party: i64,
}

/// Computed footer totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecChallanTotals {
    /// Sum of all line-item piece counts.
    pub cnt_pieces_total: u64,
    /// Sum of all line-item amounts.
    pub amount_total: i64,
    /// `amount_total - discount + gst`; may be negative.
    pub amount_net: i64,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-plan diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecGridReport {
    /// Items placed into the 7 template slots.
    pub cnt_items_rendered: usize,
    /// Items beyond template capacity, not rendered.
    pub cnt_items_dropped: usize,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecGridReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

/// Result of one successful challan write.
#[derive(Debug)]
pub struct SpecChallanOutcome {
    /// Saved workbook path.
    pub path_file_out: PathBuf,
    /// Footer totals rendered into the document.
    pub totals: SpecChallanTotals,
    /// Planner diagnostics (capacity warnings and counts).
    pub report: SpecGridReport,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Top-level render/persistence failures.
#[derive(Debug)]
pub enum ChallanRenderError {
    /// Output directory creation failed.
    OutputDirInit {
        /// Output directory path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Building or saving the workbook failed.
    WorkbookSave {
        /// Target workbook path.
        path: PathBuf,
        /// Underlying xlsx error text.
        message: String,
    },
}

impl fmt::Display for ChallanRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputDirInit { path, message } => {
                write!(
                    f,
                    "Failed to initialize output directory {}: {message}",
                    path.display()
                )
            }
            Self::WorkbookSave { path, message } => {
                write!(f, "Failed to save challan {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ChallanRenderError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
