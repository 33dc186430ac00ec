//! Stateless helper utilities for challan planning and naming.

use crate::conf::TUP_FILE_NAME_ILLEGAL;
use crate::spec::{SpecChallanTotals, SpecLineItem};

/// Upper-case a textual cell value (uniform presentation rule).
pub fn convert_text_uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Compute footer totals over all submitted items.
///
/// Items beyond the render capacity still count toward the totals; the
/// capacity limit is a template constraint, not an accounting one.
pub fn derive_challan_totals(
    items: &[SpecLineItem],
    discount: i64,
    gst: i64,
) -> SpecChallanTotals {
    let cnt_pieces_total = items.iter().map(|item| u64::from(item.cnt_pieces)).sum();
    let amount_total: i64 = items.iter().map(|item| item.amount).sum();

    SpecChallanTotals {
        cnt_pieces_total,
        amount_total,
        amount_net: amount_total - discount + gst,
    }
}

/// Normalize one file name component (spaces, date dots, path separators).
pub fn sanitize_file_component(component: &str) -> String {
    let mut c_component = component.trim().to_string();
    for c_illegal in TUP_FILE_NAME_ILLEGAL {
        c_component = c_component.replace(c_illegal, "_");
    }
    c_component
}

/// Derive the deterministic output file name:
/// `transport_challan_<company>_<transport>_<date>_<counter>.xlsx`.
pub fn derive_challan_file_name(
    name_company: &str,
    name_transport: &str,
    date: &str,
    n_counter: u64,
) -> String {
    format!(
        "transport_challan_{}_{}_{}_{n_counter}.xlsx",
        sanitize_file_component(name_company),
        sanitize_file_component(name_transport),
        sanitize_file_component(date),
    )
}

#[cfg(test)]
mod tests {
    use super::{
        convert_text_uppercase, derive_challan_file_name, derive_challan_totals,
        sanitize_file_component,
    };
    use crate::spec::SpecLineItem;

    fn item(name: &str, hsn: &str, pieces: u32, amount: i64) -> SpecLineItem {
        SpecLineItem {
            name_item: name.to_string(),
            code_hsn: hsn.to_string(),
            cnt_pieces: pieces,
            amount,
        }
    }

    #[test]
    fn totals_match_the_saree_kurta_scenario() {
        let items = vec![item("SAREE", "5407", 10, 5000), item("KURTA", "6109", 5, 1500)];
        let totals = derive_challan_totals(&items, 500, 200);

        assert_eq!(totals.cnt_pieces_total, 15);
        assert_eq!(totals.amount_total, 6500);
        assert_eq!(totals.amount_net, 6200);
    }

    #[test]
    fn net_amount_may_go_negative() {
        let items = vec![item("SAREE", "5407", 1, 100)];
        let totals = derive_challan_totals(&items, 500, 50);
        assert_eq!(totals.amount_net, -350);
    }

    #[test]
    fn totals_on_empty_items_are_zero_based() {
        let totals = derive_challan_totals(&[], 0, 0);
        assert_eq!(totals.cnt_pieces_total, 0);
        assert_eq!(totals.amount_total, 0);
        assert_eq!(totals.amount_net, 0);
    }

    #[test]
    fn file_name_normalizes_spaces_and_date_dots() {
        let c_name = derive_challan_file_name("ACME TEXTILES", "BLUE DART", "01.02.25", 7);
        assert_eq!(
            c_name,
            "transport_challan_ACME_TEXTILES_BLUE_DART_01_02_25_7.xlsx"
        );
    }

    #[test]
    fn sanitize_replaces_path_hostile_characters() {
        assert_eq!(sanitize_file_component("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_file_component("  padded  "), "padded");
    }

    #[test]
    fn uppercase_rule_is_plain_unicode_uppercasing() {
        assert_eq!(convert_text_uppercase("Saree & co."), "SAREE & CO.");
    }
}
