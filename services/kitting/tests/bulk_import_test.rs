//! CSV 批量导入解析测试

use kitting::domain::services::bulk_import::{CSV_HEADERS, csv_template, parse_products};
use kitting_errors::AppError;

#[test]
fn test_parses_valid_rows_in_order() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\
                OF-001,SKU-1,Widget,5\n\
                OF-002,SKU-2,Mesa auxiliar,12";

    let products = parse_products(text).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].manufacturing_order, "OF-001");
    assert_eq!(products[0].sku, "SKU-1");
    assert_eq!(products[0].description, "Widget");
    assert_eq!(products[0].quantity, 5);
    assert_eq!(products[1].quantity, 12);
}

#[test]
fn test_header_only_file_is_rejected() {
    let err = parse_products("OrdenFabricacion,SKU,Descripcion,Cantidad").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("al menos una fila"));
}

#[test]
fn test_empty_file_is_rejected() {
    assert!(parse_products("").is_err());
    assert!(parse_products("   \n  ").is_err());
}

#[test]
fn test_header_plus_blank_lines_is_rejected() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\n   \n";
    let err = parse_products(text).unwrap_err();
    assert!(err.to_string().contains("al menos una fila"));
}

#[test]
fn test_short_row_reports_one_based_line_number() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\
                OF-001,SKU-1,Widget,5\n\
                OF-002,SKU-2";

    let err = parse_products(text).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("Fila 3"));
    assert!(err.to_string().contains("faltan columnas"));
}

#[test]
fn test_non_numeric_quantity_is_rejected() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\
                OF-001,SKU-1,Widget,muchos";

    let err = parse_products(text).unwrap_err();
    assert!(err.to_string().contains("Fila 2"));
    assert!(err.to_string().contains("mayor a 0"));
}

#[test]
fn test_zero_and_negative_quantities_are_rejected() {
    for qty in ["0", "-3"] {
        let text = format!(
            "OrdenFabricacion,SKU,Descripcion,Cantidad\nOF-001,SKU-1,Widget,{}",
            qty
        );
        let err = parse_products(&text).unwrap_err();
        assert!(err.to_string().contains("mayor a 0"), "qty = {}", qty);
    }
}

#[test]
fn test_out_of_range_quantity_is_rejected_not_truncated() {
    // u32 范围之外的数量必须整体失败，不能回绕成小数值
    for qty in ["4294967296", "4294967297", "99999999999"] {
        let text = format!(
            "OrdenFabricacion,SKU,Descripcion,Cantidad\nOF-001,SKU-1,Widget,{}",
            qty
        );
        let err = parse_products(&text).unwrap_err();
        assert!(err.to_string().contains("Fila 2"), "qty = {}", qty);
        assert!(err.to_string().contains("mayor a 0"), "qty = {}", qty);
    }
}

#[test]
fn test_one_bad_row_fails_the_whole_file() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\
                OF-001,SKU-1,Widget,5\n\
                OF-002,SKU-2,Silla,0\n\
                OF-003,SKU-3,Mesa,2";

    assert!(parse_products(text).is_err());
}

#[test]
fn test_blank_lines_between_rows_are_skipped() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\
                OF-001,SKU-1,Widget,5\n\
                \n\
                OF-002,SKU-2,Silla,3";

    let products = parse_products(text).unwrap();
    assert_eq!(products.len(), 2);
}

#[test]
fn test_quoted_fields_lose_one_quote_layer() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\
                \"OF-001\" , \"SKU-1\", \"Cama doble\" ,\"4\"";

    let products = parse_products(text).unwrap();
    assert_eq!(products[0].manufacturing_order, "OF-001");
    assert_eq!(products[0].description, "Cama doble");
    assert_eq!(products[0].quantity, 4);
}

#[test]
fn test_extra_columns_are_ignored() {
    let text = "OrdenFabricacion,SKU,Descripcion,Cantidad\n\
                OF-001,SKU-1,Widget,5,extra,columnas";

    let products = parse_products(text).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].quantity, 5);
}

#[test]
fn test_template_has_header_and_example_row() {
    let template = csv_template();
    let mut lines = template.lines();

    assert_eq!(lines.next(), Some(CSV_HEADERS.join(",").as_str()));
    let example = lines.next().unwrap();
    assert!(example.starts_with("OF-001,"));
    assert!(lines.next().is_none());

    // 模板自身必须能被解析回来
    let products = parse_products(&template).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].quantity, 10);
}
