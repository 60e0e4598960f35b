//! 信心指数数据服务
//!
//! 从 Excel 工作簿读取指定类别的信心指数序列。
//! 不做缓存，每次请求都重新读取数据文件。

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::NaiveDate;

use crate::models::{ConfidenceRecord, IndexType};

// 工作表表头列名
const COL_DATE: &str = "Date";
const COL_INDIVIDUAL: &str = "US Individual";
const COL_INSTITUTIONAL: &str = "US Institutional";

/// 读取指定类别的信心指数序列
///
/// 打开工作簿，定位类别对应的工作表，按表头列名取值，
/// 日期统一转换为 NaiveDate。行顺序即文件顺序，生成器保证按日期升序。
pub fn get_confidence_series(
    workbook_path: &str,
    index_type: IndexType,
) -> Result<Vec<ConfidenceRecord>> {
    let sheet_name = index_type.sheet_name();

    let mut workbook = open_workbook_auto(workbook_path)
        .with_context(|| format!("打开数据文件 {} 失败", workbook_path))?;

    if !workbook.sheet_names().iter().any(|name| name == &sheet_name) {
        return Err(anyhow!("数据文件中没有工作表: {}", sheet_name));
    }

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| anyhow!("读取工作表 {} 失败: {}", sheet_name, e))?;

    parse_sheet(&range, &sheet_name)
}

/// 解析单个工作表为记录列表
///
/// 第一行是表头，之后每行一条观测记录。只有表头没有数据行时返回空列表。
fn parse_sheet(range: &Range<Data>, sheet_name: &str) -> Result<Vec<ConfidenceRecord>> {
    let mut rows = range.rows();

    let header = rows
        .next()
        .ok_or_else(|| anyhow!("工作表 {} 为空", sheet_name))?;
    let date_col = find_column(header, COL_DATE, sheet_name)?;
    let individual_col = find_column(header, COL_INDIVIDUAL, sheet_name)?;
    let institutional_col = find_column(header, COL_INSTITUTIONAL, sheet_name)?;

    let mut records = Vec::new();
    for row in rows {
        // 末尾的空白行直接跳过
        if matches!(row.get(date_col), None | Some(Data::Empty)) {
            continue;
        }

        let date = parse_date_cell(&row[date_col])
            .with_context(|| format!("工作表 {} 存在无法解析的日期", sheet_name))?;
        let individual_value = parse_number_cell(row.get(individual_col))
            .with_context(|| format!("工作表 {} 的 {} 列取值失败", sheet_name, COL_INDIVIDUAL))?;
        let institutional_value = parse_number_cell(row.get(institutional_col))
            .with_context(|| format!("工作表 {} 的 {} 列取值失败", sheet_name, COL_INSTITUTIONAL))?;

        records.push(ConfidenceRecord {
            date,
            individual_value,
            institutional_value,
        });
    }

    Ok(records)
}

/// 在表头行中定位指定列
fn find_column(header: &[Data], name: &str, sheet_name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
        .ok_or_else(|| anyhow!("工作表 {} 缺少 {} 列", sheet_name, name))
}

/// 把日期单元格统一成 NaiveDate
///
/// 生成器写入的是 Excel 日期单元格，同时兼容 YYYY-MM-DD 文本
fn parse_date_cell(cell: &Data) -> Result<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|dt| dt.date())
            .ok_or_else(|| anyhow!("非法的 Excel 日期值: {:?}", cell)),
        Data::DateTimeIso(s) => parse_iso_date(s),
        Data::String(s) => parse_iso_date(s),
        other => Err(anyhow!("无法识别的日期单元格: {:?}", other)),
    }
}

fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow!("日期格式错误 {}: {}", s, e))
}

/// 把数值单元格统一成 f64
fn parse_number_cell(cell: Option<&Data>) -> Result<f64> {
    match cell {
        Some(Data::Float(f)) => Ok(*f),
        Some(Data::Int(i)) => Ok(*i as f64),
        Some(Data::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| anyhow!("数值格式错误 {}: {}", s, e)),
        other => Err(anyhow!("无法识别的数值单元格: {:?}", other)),
    }
}
