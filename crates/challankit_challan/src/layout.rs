//! Declarative 32x10 challan template.
//!
//! The fixed-cell layout contract lives here as data: every labeled,
//! value-bearing, or intentionally blank merged region of the template is
//! one [`SpecLayoutSlot`]. The grid planner and the renderer both consume
//! this table, so cell addresses are never scattered through the code.

use crate::conf::{EnumFmtKey, N_IDX_ROW_ITEMS_FIRST, N_ITEM_SLOTS_MAX};

////////////////////////////////////////////////////////////////////////////////
// #region Regions

/// Inclusive rectangular cell region (0-based rows/columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecCellRegion {
    /// First row (inclusive).
    pub row_start: usize,
    /// First column (inclusive).
    pub col_start: usize,
    /// Last row (inclusive).
    pub row_end: usize,
    /// Last column (inclusive).
    pub col_end: usize,
}

impl SpecCellRegion {
    /// Single-cell region.
    pub const fn cell(row: usize, col: usize) -> Self {
        Self {
            row_start: row,
            col_start: col,
            row_end: row,
            col_end: col,
        }
    }

    /// Multi-cell region spanning `(row_start, col_start)..=(row_end, col_end)`.
    pub const fn span(row_start: usize, col_start: usize, row_end: usize, col_end: usize) -> Self {
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// Whether the region covers more than one cell (i.e. needs a merge).
    pub fn is_merged(&self) -> bool {
        self.row_start != self.row_end || self.col_start != self.col_end
    }

    /// All `(row, col)` coordinates covered by the region.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut l_cells = Vec::new();
        for row in self.row_start..=self.row_end {
            for col in self.col_start..=self.col_end {
                l_cells.push((row, col));
            }
        }
        l_cells
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SlotModel

/// Semantic value fields filled in at plan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumChallanField {
    /// Supplier/company name (header heading).
    CompanyName,
    /// Supplier address line 1.
    CompanyAddress1,
    /// Supplier address line 2.
    CompanyAddress2,
    /// Supplier GST line (`GST:- <value>`).
    CompanyGst,
    /// Supplier contact number.
    ContactNo,
    /// Transport way/route.
    TransportWay,
    /// Transport-side party name.
    PartyName,
    /// Transport-side station line.
    PartyStation,
    /// Transport-side GST line (`GST:- <value>`).
    PartyGst,
    /// Challan number value.
    ChallanNo,
    /// Challan date value.
    Date,
    /// Sum of all piece counts.
    TotalPieces,
    /// Sum of all line amounts.
    TotalAmount,
    /// Discount as given.
    Discount,
    /// GST as given.
    Gst,
    /// Net amount (`total - discount + gst`).
    NetAmount,
    /// Other-party goods piece count.
    OtherGoodsCount,
    /// Other-party goods amount.
    OtherGoodsAmount,
    /// Company name repeated as the signature line.
    CompanySignature,
}

/// What a layout slot carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSlotContent {
    /// Fixed template label text.
    Label(&'static str),
    /// Value resolved from the request/master records at plan time.
    Field(EnumChallanField),
    /// Intentionally blank (merged spacer/separator).
    Blank,
}

/// One entry of the template table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecLayoutSlot {
    /// Slot content kind.
    pub content: EnumSlotContent,
    /// Cell region the content occupies.
    pub region: SpecCellRegion,
    /// Format preset key.
    pub fmt: EnumFmtKey,
}

/// Per-item-row cell regions (rows 14..20 in sheet terms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecItemSlot {
    /// Serial number cell (column A).
    pub region_serial: SpecCellRegion,
    /// Item name merge (columns B..E).
    pub region_name: SpecCellRegion,
    /// HSN merge (columns F..G).
    pub region_hsn: SpecCellRegion,
    /// Piece count cell (column H).
    pub region_pieces: SpecCellRegion,
    /// Amount merge (columns I..J).
    pub region_amount: SpecCellRegion,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TemplateTable

/// Build the static template table: header block, transport row, party
/// block, item table header, footer label/value pairs, other-party note,
/// and signature line. Item rows come from [`derive_item_slots`].
pub fn derive_challan_layout() -> Vec<SpecLayoutSlot> {
    use EnumChallanField as F;
    use EnumFmtKey as K;
    use EnumSlotContent as C;
    use SpecCellRegion as R;

    vec![
        // Header block (rows 1..6).
        SpecLayoutSlot {
            content: C::Label("TRANSPORT CHALLAN"),
            region: R::span(0, 0, 0, 9),
            fmt: K::Title,
        },
        SpecLayoutSlot {
            content: C::Field(F::CompanyName),
            region: R::span(1, 0, 1, 9),
            fmt: K::Heading,
        },
        SpecLayoutSlot {
            content: C::Field(F::CompanyAddress1),
            region: R::span(2, 0, 2, 9),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Field(F::CompanyAddress2),
            region: R::span(3, 0, 3, 9),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Field(F::CompanyGst),
            region: R::span(4, 0, 4, 9),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(5, 0, 5, 6),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Field(F::ContactNo),
            region: R::span(5, 7, 5, 9),
            fmt: K::LabelRight,
        },
        // Transport info row (row 7).
        SpecLayoutSlot {
            content: C::Label("TRANSPORT:"),
            region: R::span(6, 0, 6, 2),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Field(F::TransportWay),
            region: R::span(6, 3, 6, 9),
            fmt: K::LabelLeft,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(7, 0, 7, 9),
            fmt: K::Text,
        },
        // Party block (rows 9..11) with spacer and number/date pairs.
        SpecLayoutSlot {
            content: C::Field(F::PartyName),
            region: R::span(8, 0, 8, 3),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Field(F::PartyStation),
            region: R::span(9, 0, 9, 3),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Field(F::PartyGst),
            region: R::span(10, 0, 10, 3),
            fmt: K::Label,
        },
        // Reserved spacer E9:F11.
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(8, 4, 10, 5),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Label("CH NO."),
            region: R::span(8, 6, 8, 7),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Field(F::ChallanNo),
            region: R::span(8, 8, 8, 9),
            fmt: K::Value,
        },
        SpecLayoutSlot {
            content: C::Label("DATE:"),
            region: R::span(9, 6, 9, 7),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Field(F::Date),
            region: R::span(9, 8, 9, 9),
            fmt: K::Value,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(10, 6, 10, 9),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(11, 0, 11, 9),
            fmt: K::Text,
        },
        // Item table header (row 13).
        SpecLayoutSlot {
            content: C::Label("S. NO."),
            region: R::cell(12, 0),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Label("ITEM NAME"),
            region: R::span(12, 1, 12, 4),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Label("HSN"),
            region: R::span(12, 5, 12, 6),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Label("PIECES"),
            region: R::cell(12, 7),
            fmt: K::Label,
        },
        SpecLayoutSlot {
            content: C::Label("AMOUNT"),
            region: R::span(12, 8, 12, 9),
            fmt: K::Label,
        },
        // Footer rows 21..26: F:G label merges, H singles, I:J value merges.
        SpecLayoutSlot {
            content: C::Label("TOTAL"),
            region: R::span(20, 5, 20, 6),
            fmt: K::Emphasis,
        },
        SpecLayoutSlot {
            content: C::Field(F::TotalPieces),
            region: R::cell(20, 7),
            fmt: K::Emphasis,
        },
        SpecLayoutSlot {
            content: C::Field(F::TotalAmount),
            region: R::span(20, 8, 20, 9),
            fmt: K::Emphasis,
        },
        SpecLayoutSlot {
            content: C::Label("DISCOUNT"),
            region: R::span(21, 5, 21, 6),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Field(F::Discount),
            region: R::cell(21, 7),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(21, 8, 21, 9),
            fmt: K::Text,
        },
        // GR row is reserved/unused.
        SpecLayoutSlot {
            content: C::Label("GR"),
            region: R::span(22, 5, 22, 6),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(22, 8, 22, 9),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Label("GST"),
            region: R::span(23, 5, 23, 6),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Field(F::Gst),
            region: R::cell(23, 7),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(23, 8, 23, 9),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Label("NET AMOUNT"),
            region: R::span(24, 5, 24, 6),
            fmt: K::Emphasis,
        },
        SpecLayoutSlot {
            content: C::Field(F::NetAmount),
            region: R::span(24, 8, 24, 9),
            fmt: K::Emphasis,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(25, 5, 25, 6),
            fmt: K::Text,
        },
        SpecLayoutSlot {
            content: C::Blank,
            region: R::span(25, 8, 25, 9),
            fmt: K::Text,
        },
        // Other-party goods note (row 28).
        SpecLayoutSlot {
            content: C::Field(F::OtherGoodsCount),
            region: R::cell(27, 0),
            fmt: K::Note,
        },
        SpecLayoutSlot {
            content: C::Label("OTHER PARTY GOODS"),
            region: R::cell(27, 1),
            fmt: K::Note,
        },
        SpecLayoutSlot {
            content: C::Field(F::OtherGoodsAmount),
            region: R::cell(27, 5),
            fmt: K::Note,
        },
        // Signature line (row 32).
        SpecLayoutSlot {
            content: C::Field(F::CompanySignature),
            region: R::cell(31, 8),
            fmt: K::Text,
        },
    ]
}

/// Build the 7 fixed item-row slots (rows 14..20 in sheet terms).
pub fn derive_item_slots() -> Vec<SpecItemSlot> {
    (0..N_ITEM_SLOTS_MAX)
        .map(|idx_slot| {
            let row = N_IDX_ROW_ITEMS_FIRST + idx_slot;
            SpecItemSlot {
                region_serial: SpecCellRegion::cell(row, 0),
                region_name: SpecCellRegion::span(row, 1, row, 4),
                region_hsn: SpecCellRegion::span(row, 5, row, 6),
                region_pieces: SpecCellRegion::cell(row, 7),
                region_amount: SpecCellRegion::span(row, 8, row, 9),
            }
        })
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{derive_challan_layout, derive_item_slots};
    use crate::conf::{N_ITEM_SLOTS_MAX, N_NCOLS_CHALLAN_GRID, N_NROWS_CHALLAN_GRID};

    #[test]
    fn layout_and_item_slots_stay_inside_the_grid_and_never_overlap() {
        let mut set_covered = BTreeSet::new();
        let mut l_regions: Vec<_> = derive_challan_layout()
            .into_iter()
            .map(|slot| slot.region)
            .collect();
        for slot_item in derive_item_slots() {
            l_regions.extend([
                slot_item.region_serial,
                slot_item.region_name,
                slot_item.region_hsn,
                slot_item.region_pieces,
                slot_item.region_amount,
            ]);
        }

        for region in l_regions {
            for (row, col) in region.cells() {
                assert!(row < N_NROWS_CHALLAN_GRID, "row {row} out of grid");
                assert!(col < N_NCOLS_CHALLAN_GRID, "col {col} out of grid");
                assert!(
                    set_covered.insert((row, col)),
                    "cell ({row}, {col}) covered twice"
                );
            }
        }
    }

    #[test]
    fn item_slots_occupy_rows_fourteen_to_twenty() {
        let l_slots = derive_item_slots();
        assert_eq!(l_slots.len(), N_ITEM_SLOTS_MAX);
        assert_eq!(l_slots[0].region_serial.row_start, 13);
        assert_eq!(l_slots[6].region_amount.row_end, 19);

        for slot in &l_slots {
            assert_eq!(slot.region_name.col_start, 1);
            assert_eq!(slot.region_name.col_end, 4);
            assert_eq!(slot.region_hsn.col_start, 5);
            assert_eq!(slot.region_hsn.col_end, 6);
            assert_eq!(slot.region_amount.col_start, 8);
            assert_eq!(slot.region_amount.col_end, 9);
        }
    }

    #[test]
    fn region_cells_enumerates_the_full_span() {
        let region = super::SpecCellRegion::span(8, 4, 10, 5);
        assert!(region.is_merged());
        assert_eq!(region.cells().len(), 6);
        assert!(!super::SpecCellRegion::cell(0, 0).is_merged());
    }
}
