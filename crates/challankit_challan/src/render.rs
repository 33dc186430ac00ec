//! XLSX rendering kernel that turns a planned grid into a saved workbook.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use challankit_store::{SpecCompanyRecord, SpecTransportRecord};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::conf::{
    N_HEIGHT_ROW_DEFAULT, N_HEIGHT_ROW_OTHER_GOODS, N_IDX_COL_SPACER, N_IDX_ROW_OTHER_GOODS,
    N_NCOLS_CHALLAN_GRID, N_NROWS_CHALLAN_GRID, N_WIDTH_COL_SPACER, SpecChallanFormats,
    derive_default_challan_formats,
};
use crate::grid::{SpecChallanGrid, plan_challan_grid};
use crate::spec::{
    ChallanRenderError, EnumCellAlign, EnumCellValue, SpecCellFormat, SpecChallanOutcome,
    SpecChallanRequest,
};
use crate::util::derive_challan_file_name;

/// Optional callback invoked after a successful save (e.g. "open in the
/// platform viewer"). Never part of the rendering itself.
pub type HookPostSave = Box<dyn Fn(&Path)>;

/// Stateful challan writer bound to one output directory.
pub struct ChallanWriter {
    path_dir_out: PathBuf,
    formats: SpecChallanFormats,
    hook_post_save: Option<HookPostSave>,
}

impl ChallanWriter {
    /// Create a writer targeting `path_dir_out` with default format presets.
    ///
    /// The directory is created on demand at write time.
    pub fn new(path_dir_out: PathBuf) -> Self {
        Self {
            path_dir_out,
            formats: derive_default_challan_formats(),
            hook_post_save: None,
        }
    }

    /// Attach a post-save hook, invoked with the saved file path.
    pub fn with_post_save_hook(mut self, hook: impl Fn(&Path) + 'static) -> Self {
        self.hook_post_save = Some(Box::new(hook));
        self
    }

    /// Output directory path.
    pub fn dir_out(&self) -> &Path {
        &self.path_dir_out
    }

    /// Plan, render, and save one challan.
    ///
    /// `n_counter` is the sequence value used in the file name; looking it
    /// up is the caller's concern (one counter step per document). Absent
    /// master records render as empty detail fields.
    pub fn write_challan(
        &self,
        request: &SpecChallanRequest,
        company: Option<&SpecCompanyRecord>,
        transport: Option<&SpecTransportRecord>,
        n_counter: u64,
    ) -> Result<SpecChallanOutcome, ChallanRenderError> {
        fs::create_dir_all(&self.path_dir_out).map_err(|err| ChallanRenderError::OutputDirInit {
            path: self.path_dir_out.clone(),
            message: err.to_string(),
        })?;

        let grid = plan_challan_grid(request, company, transport);

        let c_file_name = derive_challan_file_name(
            &request.name_company,
            &request.name_transport,
            &request.date,
            n_counter,
        );
        let path_file_out = self.path_dir_out.join(c_file_name);

        let derive_save_error = |message: String| ChallanRenderError::WorkbookSave {
            path: path_file_out.clone(),
            message,
        };

        let mut workbook = Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name("Challan")
                .map_err(derive_xlsx_error_text)
                .map_err(derive_save_error)?;
            render_grid(worksheet, &grid, &self.formats).map_err(derive_save_error)?;
        }

        workbook
            .save(&path_file_out)
            .map_err(derive_xlsx_error_text)
            .map_err(derive_save_error)?;

        log::info!("Challan saved as {}", path_file_out.display());
        if let Some(hook) = &self.hook_post_save {
            hook(&path_file_out);
        }

        Ok(SpecChallanOutcome {
            path_file_out,
            totals: grid.totals,
            report: grid.report,
        })
    }
}

/// Render a planned grid into `worksheet`: row/column geometry, merges,
/// planned values, then a bordered-blank fill for every uncovered cell.
fn render_grid(
    worksheet: &mut Worksheet,
    grid: &SpecChallanGrid,
    formats: &SpecChallanFormats,
) -> Result<(), String> {
    for idx_row in 0..N_NROWS_CHALLAN_GRID {
        let n_height = if idx_row == N_IDX_ROW_OTHER_GOODS {
            N_HEIGHT_ROW_OTHER_GOODS
        } else {
            N_HEIGHT_ROW_DEFAULT
        };
        worksheet
            .set_row_height(cast_row_num(idx_row)?, n_height)
            .map_err(derive_xlsx_error_text)?;
    }
    worksheet
        .set_column_width(cast_col_num(N_IDX_COL_SPACER)?, N_WIDTH_COL_SPACER)
        .map_err(derive_xlsx_error_text)?;

    let mut set_covered: BTreeSet<(usize, usize)> = BTreeSet::new();

    for cell in &grid.cells {
        let fmt = derive_rust_xlsx_format(formats.resolve(cell.fmt));
        let region = &cell.region;
        set_covered.extend(region.cells());

        let n_row = cast_row_num(region.row_start)?;
        let n_col = cast_col_num(region.col_start)?;

        if region.is_merged() {
            // Anchor-overwrite pattern: merge with an empty string, then
            // write the real value into the first cell of the range.
            worksheet
                .merge_range(
                    n_row,
                    n_col,
                    cast_row_num(region.row_end)?,
                    cast_col_num(region.col_end)?,
                    "",
                    &fmt,
                )
                .map_err(derive_xlsx_error_text)?;
        }

        match &cell.value {
            EnumCellValue::Blank => {
                if !region.is_merged() {
                    worksheet
                        .write_blank(n_row, n_col, &fmt)
                        .map_err(derive_xlsx_error_text)?;
                }
            }
            EnumCellValue::Text(text) => {
                worksheet
                    .write_string_with_format(n_row, n_col, text, &fmt)
                    .map_err(derive_xlsx_error_text)?;
            }
            EnumCellValue::Integer(value) => {
                worksheet
                    .write_number_with_format(n_row, n_col, *value as f64, &fmt)
                    .map_err(derive_xlsx_error_text)?;
            }
        }
    }

    // Thin border over the rest of the 32x10 grid.
    let fmt_fill = derive_rust_xlsx_format(&formats.fmt_text);
    for idx_row in 0..N_NROWS_CHALLAN_GRID {
        for idx_col in 0..N_NCOLS_CHALLAN_GRID {
            if set_covered.contains(&(idx_row, idx_col)) {
                continue;
            }
            worksheet
                .write_blank(cast_row_num(idx_row)?, cast_col_num(idx_col)?, &fmt_fill)
                .map_err(derive_xlsx_error_text)?;
        }
    }

    Ok(())
}

/// Convert a format spec into a `rust_xlsxwriter` format.
pub fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(align) = spec.align {
        format = format.set_align(match align {
            EnumCellAlign::Left => FormatAlign::Left,
            EnumCellAlign::Center => FormatAlign::Center,
            EnumCellAlign::Right => FormatAlign::Right,
        });
    }
    if spec.valign_center.unwrap_or(false) {
        format = format.set_align(FormatAlign::VerticalCenter);
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        0 => FormatBorder::None,
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        _ => FormatBorder::Thin,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::ChallanWriter;
    use crate::spec::{SpecChallanRequest, SpecLineItem};

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("challankit_render_test_{n}"));
            std::fs::create_dir_all(&path).expect("create test dir");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    fn sample_request() -> SpecChallanRequest {
        SpecChallanRequest {
            name_company: "ACME TEXTILES".to_string(),
            name_transport: "BLUE DART".to_string(),
            contact_no: "9375290850".to_string(),
            items: vec![SpecLineItem {
                name_item: "SAREE".to_string(),
                code_hsn: "5407".to_string(),
                cnt_pieces: 10,
                amount: 5000,
            }],
            discount: 500,
            gst: 200,
            date: "01.02.25".to_string(),
            challan_no: "9".to_string(),
            cnt_goods_other_party: 3,
            amount_goods_other_party: 1200,
        }
    }

    #[test]
    fn write_challan_creates_directory_and_counter_named_file() {
        let dir = TestDir::new();
        let path_dir_out = dir.path().join("generated_challans");
        let writer = ChallanWriter::new(path_dir_out.clone());

        let outcome = writer
            .write_challan(&sample_request(), None, None, 9)
            .expect("write challan");

        assert!(outcome.path_file_out.exists());
        assert_eq!(
            outcome.path_file_out,
            path_dir_out.join("transport_challan_ACME_TEXTILES_BLUE_DART_01_02_25_9.xlsx")
        );
        assert_eq!(outcome.totals.amount_net, 4700);
        assert!(outcome.report.warnings.is_empty());
    }

    #[test]
    fn post_save_hook_receives_the_saved_path() {
        let dir = TestDir::new();
        let seen = Rc::new(RefCell::new(None::<PathBuf>));
        let seen_hook = Rc::clone(&seen);

        let writer = ChallanWriter::new(dir.path().join("out")).with_post_save_hook(move |path| {
            *seen_hook.borrow_mut() = Some(path.to_path_buf());
        });

        let outcome = writer
            .write_challan(&sample_request(), None, None, 1)
            .expect("write challan");

        assert_eq!(seen.borrow().as_deref(), Some(outcome.path_file_out.as_path()));
    }

    #[test]
    fn oversized_requests_still_save_and_surface_the_dropped_count() {
        let dir = TestDir::new();
        let mut request = sample_request();
        request.items = (0..9)
            .map(|n| SpecLineItem {
                name_item: format!("ITEM {n}"),
                code_hsn: "5407".to_string(),
                cnt_pieces: 1,
                amount: 100,
            })
            .collect();

        let writer = ChallanWriter::new(dir.path().join("out"));
        let outcome = writer
            .write_challan(&request, None, None, 2)
            .expect("write challan");

        assert!(outcome.path_file_out.exists());
        assert_eq!(outcome.report.cnt_items_dropped, 2);
        assert_eq!(outcome.totals.amount_total, 900);
    }
}
