//! Challan grid constants and default format presets.

use crate::spec::{EnumCellAlign, SpecCellFormat};

/// Challan template row count.
pub const N_NROWS_CHALLAN_GRID: usize = 32;
/// Challan template column count (A..J).
pub const N_NCOLS_CHALLAN_GRID: usize = 10;
/// Fixed item slot capacity of the template.
pub const N_ITEM_SLOTS_MAX: usize = 7;
/// First item row (0-based; row 14 in sheet terms).
pub const N_IDX_ROW_ITEMS_FIRST: usize = 13;
/// Other-party-goods note row (0-based; row 28 in sheet terms).
pub const N_IDX_ROW_OTHER_GOODS: usize = 27;
/// Uniform row height in points.
pub const N_HEIGHT_ROW_DEFAULT: f64 = 20.0;
/// Taller row height for the other-party-goods note row.
pub const N_HEIGHT_ROW_OTHER_GOODS: f64 = 25.0;
/// Narrow spacer column (F, 0-based).
pub const N_IDX_COL_SPACER: usize = 5;
/// Spacer column width.
pub const N_WIDTH_COL_SPACER: f64 = 4.0;
/// Characters normalized to `_` in output file name components.
pub const TUP_FILE_NAME_ILLEGAL: [&str; 9] = [" ", ".", "*", ":", "?", "/", "\\", "[", "]"];

/// Canonical format preset keys referenced by layout slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFmtKey {
    /// Plain bordered cell.
    Text,
    /// Bold centered label.
    Label,
    /// Bold left-aligned label (way value).
    LabelLeft,
    /// Bold right-aligned label (contact number).
    LabelRight,
    /// Document title.
    Title,
    /// Company name heading.
    Heading,
    /// Centered plain value (challan number, date).
    Value,
    /// Bold footer value (totals, net amount).
    Emphasis,
    /// Large bold note (other-party goods row).
    Note,
}

/// Named format presets used by the challan renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecChallanFormats {
    /// Plain bordered cell.
    pub fmt_text: SpecCellFormat,
    /// Bold centered label.
    pub fmt_label: SpecCellFormat,
    /// Bold left-aligned label.
    pub fmt_label_left: SpecCellFormat,
    /// Bold right-aligned label.
    pub fmt_label_right: SpecCellFormat,
    /// Document title.
    pub fmt_title: SpecCellFormat,
    /// Company name heading.
    pub fmt_heading: SpecCellFormat,
    /// Centered plain value.
    pub fmt_value: SpecCellFormat,
    /// Bold footer value.
    pub fmt_emphasis: SpecCellFormat,
    /// Large bold note.
    pub fmt_note: SpecCellFormat,
}

impl SpecChallanFormats {
    /// Resolve a preset by key.
    pub fn resolve(&self, key: EnumFmtKey) -> &SpecCellFormat {
        match key {
            EnumFmtKey::Text => &self.fmt_text,
            EnumFmtKey::Label => &self.fmt_label,
            EnumFmtKey::LabelLeft => &self.fmt_label_left,
            EnumFmtKey::LabelRight => &self.fmt_label_right,
            EnumFmtKey::Title => &self.fmt_title,
            EnumFmtKey::Heading => &self.fmt_heading,
            EnumFmtKey::Value => &self.fmt_value,
            EnumFmtKey::Emphasis => &self.fmt_emphasis,
            EnumFmtKey::Note => &self.fmt_note,
        }
    }
}

/// Build the default format presets used by [`crate::render::ChallanWriter`].
///
/// Every used cell in the 32x10 grid carries a thin border.
pub fn derive_default_challan_formats() -> SpecChallanFormats {
    let cfg_base_fmt_spec = SpecCellFormat {
        border: Some(1),
        valign_center: Some(true),
        ..Default::default()
    };

    SpecChallanFormats {
        fmt_text: cfg_base_fmt_spec,
        fmt_label: cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(12),
            align: Some(EnumCellAlign::Center),
            ..Default::default()
        }),
        fmt_label_left: cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(12),
            align: Some(EnumCellAlign::Left),
            ..Default::default()
        }),
        fmt_label_right: cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(12),
            align: Some(EnumCellAlign::Right),
            ..Default::default()
        }),
        fmt_title: cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(16),
            align: Some(EnumCellAlign::Center),
            ..Default::default()
        }),
        fmt_heading: cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(18),
            align: Some(EnumCellAlign::Center),
            ..Default::default()
        }),
        fmt_value: cfg_base_fmt_spec.with_(SpecCellFormat {
            align: Some(EnumCellAlign::Center),
            ..Default::default()
        }),
        fmt_emphasis: cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        }),
        fmt_note: cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(16),
            ..Default::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{EnumFmtKey, derive_default_challan_formats};
    use crate::spec::EnumCellAlign;

    #[test]
    fn presets_inherit_border_and_vertical_centering_from_base() {
        let formats = derive_default_challan_formats();
        for key in [
            EnumFmtKey::Text,
            EnumFmtKey::Label,
            EnumFmtKey::Title,
            EnumFmtKey::Heading,
            EnumFmtKey::Value,
            EnumFmtKey::Emphasis,
            EnumFmtKey::Note,
        ] {
            let fmt = formats.resolve(key);
            assert_eq!(fmt.border, Some(1));
            assert_eq!(fmt.valign_center, Some(true));
        }
    }

    #[test]
    fn label_variants_differ_only_in_alignment() {
        let formats = derive_default_challan_formats();
        assert_eq!(formats.fmt_label.align, Some(EnumCellAlign::Center));
        assert_eq!(formats.fmt_label_left.align, Some(EnumCellAlign::Left));
        assert_eq!(formats.fmt_label_right.align, Some(EnumCellAlign::Right));
        assert_eq!(formats.fmt_label.bold, formats.fmt_label_left.bold);
        assert_eq!(formats.fmt_label.font_size, formats.fmt_label_right.font_size);
    }
}
