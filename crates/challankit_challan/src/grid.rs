//! Pure grid planner: merges request data and master records into the
//! declarative template, producing a renderer-independent cell plan.

use challankit_store::{SpecCompanyRecord, SpecTransportRecord};

use crate::conf::{EnumFmtKey, N_ITEM_SLOTS_MAX};
use crate::layout::{
    EnumChallanField, EnumSlotContent, SpecCellRegion, derive_challan_layout, derive_item_slots,
};
use crate::spec::{
    EnumCellValue, SpecChallanRequest, SpecChallanTotals, SpecGridReport,
};
use crate::util::{convert_text_uppercase, derive_challan_totals};

/// One planned cell: a (possibly merged) region, its value, and its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPlannedCell {
    /// Target region; merged when it spans more than one cell.
    pub region: SpecCellRegion,
    /// Planned value (text already upper-cased).
    pub value: EnumCellValue,
    /// Format preset key.
    pub fmt: EnumFmtKey,
}

/// Fully planned challan grid, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecChallanGrid {
    /// Planned cells in template order.
    pub cells: Vec<SpecPlannedCell>,
    /// Footer totals rendered into the grid.
    pub totals: SpecChallanTotals,
    /// Capacity diagnostics.
    pub report: SpecGridReport,
}

impl SpecChallanGrid {
    /// Value of the planned cell anchored at `(row, col)`, if any.
    pub fn value_at(&self, row: usize, col: usize) -> Option<&EnumCellValue> {
        self.cells
            .iter()
            .find(|cell| cell.region.row_start == row && cell.region.col_start == col)
            .map(|cell| &cell.value)
    }
}

/// Plan the full 32x10 grid for one challan.
///
/// Absent master records yield empty-string detail fields rather than
/// errors. Items beyond the 7 template slots are not rendered; the dropped
/// count is logged and recorded in the report. Totals cover all items.
pub fn plan_challan_grid(
    request: &SpecChallanRequest,
    company: Option<&SpecCompanyRecord>,
    transport: Option<&SpecTransportRecord>,
) -> SpecChallanGrid {
    let totals = derive_challan_totals(&request.items, request.discount, request.gst);

    let cnt_items_rendered = usize::min(request.items.len(), N_ITEM_SLOTS_MAX);
    let cnt_items_dropped = request.items.len() - cnt_items_rendered;
    let mut report = SpecGridReport {
        cnt_items_rendered,
        cnt_items_dropped,
        warnings: Vec::new(),
    };
    if cnt_items_dropped > 0 {
        let c_warning = format!(
            "Item capacity exceeded: {cnt_items_dropped} of {} items not rendered \
             ({N_ITEM_SLOTS_MAX} slots).",
            request.items.len()
        );
        log::warn!("{c_warning}");
        report.warn(c_warning);
    }

    let mut l_cells = Vec::new();

    for slot in derive_challan_layout() {
        let value = match slot.content {
            EnumSlotContent::Label(text) => EnumCellValue::Text(convert_text_uppercase(text)),
            EnumSlotContent::Blank => EnumCellValue::Blank,
            EnumSlotContent::Field(field) => {
                resolve_field_value(field, request, company, transport, &totals)
            }
        };
        l_cells.push(SpecPlannedCell {
            region: slot.region,
            value,
            fmt: slot.fmt,
        });
    }

    for (idx_slot, slot_item) in derive_item_slots().into_iter().enumerate() {
        match request.items.get(idx_slot) {
            // Serial number is the 1-based item position.
            Some(item) => {
                l_cells.push(planned_integer(slot_item.region_serial, idx_slot as i64 + 1));
                l_cells.push(planned_text(slot_item.region_name, &item.name_item));
                l_cells.push(planned_text(slot_item.region_hsn, &item.code_hsn));
                l_cells.push(planned_integer(
                    slot_item.region_pieces,
                    i64::from(item.cnt_pieces),
                ));
                l_cells.push(planned_integer(slot_item.region_amount, item.amount));
            }
            // Unfilled slots stay blank but keep their merges and borders.
            _ => {
                for region in [
                    slot_item.region_serial,
                    slot_item.region_name,
                    slot_item.region_hsn,
                    slot_item.region_pieces,
                    slot_item.region_amount,
                ] {
                    l_cells.push(SpecPlannedCell {
                        region,
                        value: EnumCellValue::Blank,
                        fmt: EnumFmtKey::Text,
                    });
                }
            }
        }
    }

    SpecChallanGrid {
        cells: l_cells,
        totals,
        report,
    }
}

fn planned_text(region: SpecCellRegion, text: &str) -> SpecPlannedCell {
    SpecPlannedCell {
        region,
        value: EnumCellValue::Text(convert_text_uppercase(text)),
        fmt: EnumFmtKey::Text,
    }
}

fn planned_integer(region: SpecCellRegion, value: i64) -> SpecPlannedCell {
    SpecPlannedCell {
        region,
        value: EnumCellValue::Integer(value),
        fmt: EnumFmtKey::Text,
    }
}

fn resolve_field_value(
    field: EnumChallanField,
    request: &SpecChallanRequest,
    company: Option<&SpecCompanyRecord>,
    transport: Option<&SpecTransportRecord>,
    totals: &SpecChallanTotals,
) -> EnumCellValue {
    let text = |value: String| EnumCellValue::Text(convert_text_uppercase(&value));

    match field {
        EnumChallanField::CompanyName => text(request.name_company.clone()),
        EnumChallanField::CompanyAddress1 => {
            text(company.map(|c| c.address1.clone()).unwrap_or_default())
        }
        EnumChallanField::CompanyAddress2 => {
            text(company.map(|c| c.address2.clone()).unwrap_or_default())
        }
        EnumChallanField::CompanyGst => text(format!(
            "GST:- {}",
            company.map(|c| c.gst.clone()).unwrap_or_default()
        )),
        EnumChallanField::ContactNo => text(request.contact_no.clone()),
        EnumChallanField::TransportWay => {
            text(transport.map(|t| t.way.clone()).unwrap_or_default())
        }
        EnumChallanField::PartyName => text(request.name_transport.clone()),
        EnumChallanField::PartyStation => {
            text(transport.map(|t| t.station.clone()).unwrap_or_default())
        }
        EnumChallanField::PartyGst => text(format!(
            "GST:- {}",
            transport.map(|t| t.gst.clone()).unwrap_or_default()
        )),
        EnumChallanField::ChallanNo => text(request.challan_no.clone()),
        EnumChallanField::Date => text(request.date.clone()),
        EnumChallanField::TotalPieces => EnumCellValue::Integer(totals.cnt_pieces_total as i64),
        EnumChallanField::TotalAmount => EnumCellValue::Integer(totals.amount_total),
        EnumChallanField::Discount => EnumCellValue::Integer(request.discount),
        EnumChallanField::Gst => EnumCellValue::Integer(request.gst),
        EnumChallanField::NetAmount => EnumCellValue::Integer(totals.amount_net),
        EnumChallanField::OtherGoodsCount => {
            EnumCellValue::Integer(request.cnt_goods_other_party as i64)
        }
        EnumChallanField::OtherGoodsAmount => {
            EnumCellValue::Integer(request.amount_goods_other_party)
        }
        EnumChallanField::CompanySignature => text(request.name_company.clone()),
    }
}

#[cfg(test)]
mod tests {
    use challankit_store::{SpecCompanyRecord, SpecTransportRecord};

    use super::plan_challan_grid;
    use crate::conf::N_ITEM_SLOTS_MAX;
    use crate::spec::{EnumCellValue, SpecChallanRequest, SpecLineItem};

    fn item(name: &str, hsn: &str, pieces: u32, amount: i64) -> SpecLineItem {
        SpecLineItem {
            name_item: name.to_string(),
            code_hsn: hsn.to_string(),
            cnt_pieces: pieces,
            amount,
        }
    }

    fn request_with_items(items: Vec<SpecLineItem>) -> SpecChallanRequest {
        SpecChallanRequest {
            name_company: "Acme Textiles".to_string(),
            name_transport: "Blue Dart".to_string(),
            contact_no: "9375290850".to_string(),
            items,
            discount: 500,
            gst: 200,
            date: "01.02.25".to_string(),
            challan_no: "42".to_string(),
            cnt_goods_other_party: 3,
            amount_goods_other_party: 1200,
        }
    }

    #[test]
    fn items_render_in_order_with_one_based_serials_and_blank_tail() {
        let request = request_with_items(vec![
            item("Saree", "5407", 10, 5000),
            item("Kurta", "6109", 5, 1500),
        ]);
        let grid = plan_challan_grid(&request, None, None);

        assert_eq!(grid.value_at(13, 0), Some(&EnumCellValue::Integer(1)));
        assert_eq!(
            grid.value_at(13, 1),
            Some(&EnumCellValue::Text("SAREE".to_string()))
        );
        assert_eq!(
            grid.value_at(13, 5),
            Some(&EnumCellValue::Text("5407".to_string()))
        );
        assert_eq!(grid.value_at(13, 7), Some(&EnumCellValue::Integer(10)));
        assert_eq!(grid.value_at(13, 8), Some(&EnumCellValue::Integer(5000)));

        assert_eq!(grid.value_at(14, 0), Some(&EnumCellValue::Integer(2)));
        assert_eq!(
            grid.value_at(14, 1),
            Some(&EnumCellValue::Text("KURTA".to_string()))
        );

        for row in 15..20 {
            assert_eq!(grid.value_at(row, 0), Some(&EnumCellValue::Blank));
            assert_eq!(grid.value_at(row, 1), Some(&EnumCellValue::Blank));
        }
    }

    #[test]
    fn footer_totals_match_the_saree_kurta_scenario() {
        let request = request_with_items(vec![
            item("SAREE", "5407", 10, 5000),
            item("KURTA", "6109", 5, 1500),
        ]);
        let grid = plan_challan_grid(&request, None, None);

        assert_eq!(grid.value_at(20, 7), Some(&EnumCellValue::Integer(15)));
        assert_eq!(grid.value_at(20, 8), Some(&EnumCellValue::Integer(6500)));
        assert_eq!(grid.value_at(21, 7), Some(&EnumCellValue::Integer(500)));
        assert_eq!(grid.value_at(23, 7), Some(&EnumCellValue::Integer(200)));
        assert_eq!(grid.value_at(24, 8), Some(&EnumCellValue::Integer(6200)));
    }

    #[test]
    fn nine_items_render_seven_and_report_two_dropped() {
        let l_items = (0..9)
            .map(|n| item(&format!("ITEM {n}"), "5407", 1, 100))
            .collect();
        let grid = plan_challan_grid(&request_with_items(l_items), None, None);

        assert_eq!(grid.report.cnt_items_rendered, N_ITEM_SLOTS_MAX);
        assert_eq!(grid.report.cnt_items_dropped, 2);
        assert_eq!(grid.report.warnings.len(), 1);

        assert_eq!(grid.value_at(19, 0), Some(&EnumCellValue::Integer(7)));
        // Totals still cover all nine items.
        assert_eq!(grid.value_at(20, 7), Some(&EnumCellValue::Integer(9)));
        assert_eq!(grid.value_at(20, 8), Some(&EnumCellValue::Integer(900)));
    }

    #[test]
    fn unknown_master_records_yield_empty_detail_fields() {
        let mut request = request_with_items(vec![]);
        request.name_company = "ACME".to_string();
        let grid = plan_challan_grid(&request, None, None);

        assert_eq!(
            grid.value_at(2, 0),
            Some(&EnumCellValue::Text(String::new()))
        );
        assert_eq!(
            grid.value_at(4, 0),
            Some(&EnumCellValue::Text("GST:- ".to_string()))
        );
        assert_eq!(
            grid.value_at(9, 0),
            Some(&EnumCellValue::Text(String::new()))
        );
    }

    #[test]
    fn resolved_master_records_fill_header_and_party_blocks() {
        let company = SpecCompanyRecord {
            address1: "12 Mill Road".to_string(),
            address2: "Surat".to_string(),
            gst: "24abcde1234f1z5".to_string(),
        };
        let transport = SpecTransportRecord {
            station: "Mumbai Central".to_string(),
            gst: "27xyzab5678c1z9".to_string(),
            way: "By Road".to_string(),
        };
        let grid = plan_challan_grid(
            &request_with_items(vec![]),
            Some(&company),
            Some(&transport),
        );

        assert_eq!(
            grid.value_at(1, 0),
            Some(&EnumCellValue::Text("ACME TEXTILES".to_string()))
        );
        assert_eq!(
            grid.value_at(2, 0),
            Some(&EnumCellValue::Text("12 MILL ROAD".to_string()))
        );
        assert_eq!(
            grid.value_at(4, 0),
            Some(&EnumCellValue::Text("GST:- 24ABCDE1234F1Z5".to_string()))
        );
        assert_eq!(
            grid.value_at(6, 3),
            Some(&EnumCellValue::Text("BY ROAD".to_string()))
        );
        assert_eq!(
            grid.value_at(9, 0),
            Some(&EnumCellValue::Text("MUMBAI CENTRAL".to_string()))
        );
        assert_eq!(
            grid.value_at(31, 8),
            Some(&EnumCellValue::Text("ACME TEXTILES".to_string()))
        );
    }

    #[test]
    fn every_planned_text_value_is_upper_cased() {
        let request = request_with_items(vec![item("saree", "hsn5407", 1, 10)]);
        let grid = plan_challan_grid(&request, None, None);

        for cell in &grid.cells {
            if let EnumCellValue::Text(text) = &cell.value {
                assert_eq!(text, &text.to_uppercase());
            }
        }
    }

    #[test]
    fn negative_net_amount_passes_through_unvalidated() {
        let mut request = request_with_items(vec![item("SAREE", "5407", 1, 100)]);
        request.discount = 500;
        request.gst = 50;
        let grid = plan_challan_grid(&request, None, None);

        assert_eq!(grid.value_at(24, 8), Some(&EnumCellValue::Integer(-350)));
    }
}
