//! 信心指数数据生成脚本
//!
//! 离线手动运行，生成演示用的 Excel 数据文件：
//! 每个指数类别一个工作表，1990-01 至 2023-12 每月一条月末观测值。
//! 数值为正弦基线加随机噪声，只求看起来合理，不要求可复现。

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use env_logger::Env;
use rand::Rng;
use rust_xlsxwriter::{Format, Workbook};

/// 输出文件路径，与服务端默认配置保持一致
const OUTPUT_FILE: &str = "static/data/yale_confidence_indices.xlsx";

/// 指数类别对应的工作表名
const SHEET_NAMES: [&str; 4] = ["One Year", "Crash", "Buy Dips", "Valuation"];

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let dates = month_end_dates(1990, 1, 2023, 12)?;
    log::info!("生成 {} 个月的信心指数数据", dates.len());

    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let mut rng = rand::thread_rng();

    for sheet_name in SHEET_NAMES {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name)?;

        worksheet.write_string(0, 0, "Date")?;
        worksheet.write_string(0, 1, "US Individual")?;
        worksheet.write_string(0, 2, "US Institutional")?;
        worksheet.set_column_width(0, 12)?;

        for (i, date) in dates.iter().enumerate() {
            // 机构值是带噪声的年度正弦波，个人值在其基础上缩放再扰动
            let institutional = 72.5
                + (i as f64 / 12.0 * std::f64::consts::PI).sin() * 12.5
                + rng.gen_range(-2.0..2.0);
            let individual = institutional * 0.95 + rng.gen_range(-3.0..3.0);

            let row = (i + 1) as u32;
            worksheet.write_datetime_with_format(row, 0, date, &date_format)?;
            worksheet.write_number(row, 1, individual)?;
            worksheet.write_number(row, 2, institutional)?;
        }
    }

    if let Some(parent) = std::path::Path::new(OUTPUT_FILE).parent() {
        std::fs::create_dir_all(parent)?;
    }
    workbook.save(OUTPUT_FILE)?;

    log::info!("数据文件已生成: {}", OUTPUT_FILE);
    Ok(())
}

/// 生成闭区间 [起始月, 结束月] 内每个月的月末日期
fn month_end_dates(
    start_year: i32,
    start_month: u32,
    end_year: i32,
    end_month: u32,
) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::new();
    let (mut year, mut month) = (start_year, start_month);

    while (year, month) <= (end_year, end_month) {
        let date =
            month_end(year, month).ok_or_else(|| anyhow!("非法月份: {}-{}", year, month))?;
        dates.push(date);

        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    Ok(dates)
}

/// 某年某月的最后一天
fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
