//! Report rows and their table form.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use mdr_model::columns::{
    REPORT_CONTEXT, REPORT_DESCRIPTION, REPORT_FORM_NAME, REPORT_ITEM, REPORT_TYPE,
};
use mdr_model::{MissingField, RequiredPair};

use crate::error::Result;

/// One report row per missing pair, in input order.
pub fn format_report(missing: Vec<RequiredPair>) -> Vec<MissingField> {
    missing.into_iter().map(MissingField::new).collect()
}

/// Renders report rows as `Form Name, Item, Type, Description, Context`.
pub fn report_to_dataframe(rows: &[MissingField]) -> Result<DataFrame> {
    let forms: Vec<String> = rows.iter().map(|row| row.form_name.clone()).collect();
    let items: Vec<String> = rows.iter().map(|row| row.item_name.clone()).collect();
    let kinds: Vec<String> = rows.iter().map(|row| row.kind.to_string()).collect();
    let descriptions: Vec<String> = rows.iter().map(|row| row.description.clone()).collect();
    let contexts: Vec<Option<String>> = rows.iter().map(|row| row.context.clone()).collect();

    let columns: Vec<Column> = vec![
        Series::new(REPORT_FORM_NAME.into(), forms).into_column(),
        Series::new(REPORT_ITEM.into(), items).into_column(),
        Series::new(REPORT_TYPE.into(), kinds).into_column(),
        Series::new(REPORT_DESCRIPTION.into(), descriptions).into_column(),
        Series::new(REPORT_CONTEXT.into(), contexts).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdr_model::MissingKind;
    use mdr_model::columns::REPORT_COLUMNS;

    fn pair(form: &str, item: &str, conditional: bool) -> RequiredPair {
        RequiredPair {
            form_id: form.to_string(),
            item_name: item.to_string(),
            guidance: Some(format!("guidance for {item}")),
            conditionally_required: conditional,
        }
    }

    #[test]
    fn classifies_rows() {
        let rows = format_report(vec![pair("AE001", "AESTDAT", false), pair("AE001", "AESER", true)]);
        assert_eq!(rows[0].kind, MissingKind::Mandatory);
        assert_eq!(rows[1].kind, MissingKind::OptionallyRequired);
        assert_eq!(rows[1].context.as_deref(), Some("guidance for AESER"));
    }

    #[test]
    fn dataframe_has_report_columns_in_order() {
        let rows = format_report(vec![pair("AE001_1", "AESTDAT", false)]);
        let df = report_to_dataframe(&rows).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, REPORT_COLUMNS.to_vec());
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn empty_report_still_has_columns() {
        let df = report_to_dataframe(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 5);
    }
}
