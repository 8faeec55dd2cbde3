//! CSV 批量导入解析
//!
//! 朴素的逗号分割解析：首行为表头（丢弃，不校验），每个字段只剥一层
//! 外围双引号。不处理内嵌逗号和转义引号，这是既有文件格式的已知限制。

use kitting_errors::{AppError, AppResult};

use crate::domain::entities::OrderLineDraft;

/// CSV 表头，列顺序固定
pub const CSV_HEADERS: [&str; 4] = ["OrdenFabricacion", "SKU", "Descripcion", "Cantidad"];

/// 解析批量导入文本
///
/// 错误信息带 1 起始的行号（表头计入行号）。任何一行失败则整体失败。
pub fn parse_products(text: &str) -> AppResult<Vec<OrderLineDraft>> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(AppError::validation(
            "El archivo debe tener al menos una fila de datos además del encabezado",
        ));
    }

    let mut products = Vec::new();

    // 跳过表头行
    for (index, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let row = index + 1;

        let values: Vec<String> = line.split(',').map(|v| strip_quotes(v.trim())).collect();

        if values.len() < 4 {
            return Err(AppError::validation(format!(
                "Fila {}: faltan columnas. Se esperan: {}",
                row,
                CSV_HEADERS.join(", ")
            )));
        }

        let quantity = values[3].parse::<u32>().ok().filter(|q| *q > 0).ok_or_else(|| {
            AppError::validation(format!(
                "Fila {}: la cantidad debe ser un número mayor a 0",
                row
            ))
        })?;

        products.push(OrderLineDraft {
            manufacturing_order: values[0].clone(),
            sku: values[1].clone(),
            description: values[2].clone(),
            quantity,
        });
    }

    if products.is_empty() {
        return Err(AppError::validation(
            "El archivo debe tener al menos una fila de datos además del encabezado",
        ));
    }

    Ok(products)
}

/// 生成 CSV 模板（表头 + 一行示例）
pub fn csv_template() -> String {
    let example = ["OF-001", "SKU-12345", "Producto ejemplo", "10"];
    format!("{}\n{}", CSV_HEADERS.join(","), example.join(","))
}

// 只剥一层外围双引号
fn strip_quotes(value: &str) -> String {
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.to_string()
}
