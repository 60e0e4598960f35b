//! 信心指数接口处理器
//!
//! ## API 列表
//!
//! - GET /confidence-data/{index_type} - 获取指定类别的信心指数序列
//!
//! index_type 为小写连字符形式，如 one-year、buy-dips。
//! 成功返回记录数组；类别未知、数据文件不可读或格式异常时
//! 统一返回 500 和 {"error": "<信息>"}，不区分具体失败原因。

use actix_web::{web, HttpResponse, Result};
use anyhow::anyhow;

use crate::config::AppConfig;
use crate::models::{ErrorResponse, IndexType};
use crate::services::confidence_service;

pub async fn get_confidence_data(
    path: web::Path<String>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse> {
    let segment = path.into_inner();

    let result = match IndexType::parse(&segment) {
        Some(index_type) => {
            confidence_service::get_confidence_series(&config.data.file, index_type)
        }
        None => Err(anyhow!("未知的指数类别: {}", segment)),
    };

    match result {
        Ok(records) => Ok(HttpResponse::Ok().json(records)),
        Err(e) => {
            log::error!("读取信心指数数据失败: {}", e);
            let response = ErrorResponse::new(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/confidence-data/{index_type}",
        web::get().to(get_confidence_data),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::NaiveDate;
    use rust_xlsxwriter::{Format, Workbook};
    use std::path::PathBuf;

    /// 写一个只含 One Year 工作表的测试工作簿
    fn write_fixture(file_name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(file_name);
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        let mut workbook = Workbook::new();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("One Year").unwrap();
        worksheet.write_string(0, 0, "Date").unwrap();
        worksheet.write_string(0, 1, "US Individual").unwrap();
        worksheet.write_string(0, 2, "US Institutional").unwrap();

        let rows = [
            (NaiveDate::from_ymd_opt(1995, 6, 30).unwrap(), 68.3, 72.1),
            (NaiveDate::from_ymd_opt(1995, 7, 31).unwrap(), 69.0, 73.4),
        ];
        for (i, (date, individual, institutional)) in rows.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet
                .write_datetime_with_format(row, 0, date, &date_format)
                .unwrap();
            worksheet.write_number(row, 1, *individual).unwrap();
            worksheet.write_number(row, 2, *institutional).unwrap();
        }

        workbook.save(&path).unwrap();
        path
    }

    fn test_config(data_file: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.data.file = data_file.to_string();
        config
    }

    /// 测试有效类别返回 200 和记录数组
    #[actix_web::test]
    async fn test_get_confidence_data_ok() {
        let path = write_fixture("confidence_handler_ok.xlsx");
        let config = test_config(path.to_str().unwrap());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(web::scope("/api").configure(super::config)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/confidence-data/one-year")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Date"], "1995-06-30");
        assert_eq!(rows[1]["Date"], "1995-07-31");
    }

    /// 测试未知类别返回 500 和非空 error 字段
    #[actix_web::test]
    async fn test_get_confidence_data_unknown_category() {
        let path = write_fixture("confidence_handler_unknown.xlsx");
        let config = test_config(path.to_str().unwrap());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(web::scope("/api").configure(super::config)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/confidence-data/unknown-category")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let message = body["error"].as_str().unwrap();
        println!("  错误信息: {}", message);
        assert!(!message.is_empty());
    }

    /// 测试数据文件缺失时同样返回 500 和 error 字段
    #[actix_web::test]
    async fn test_get_confidence_data_missing_file() {
        let config = test_config("no_such_dir/no_such_file.xlsx");

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(web::scope("/api").configure(super::config)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/confidence-data/valuation")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }
}
