//! 业务逻辑服务模块
//!
//! 封装数据读取和转换逻辑

pub mod confidence_service;  // 信心指数数据服务
