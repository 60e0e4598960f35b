//! 信心指数数据模型
//!
//! 定义指数类别和单条观测记录的数据结构

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 指数类别
///
/// 有效类别是一个固定集合，与数据文件中的工作表一一对应。
/// URL 路径段使用小写连字符形式（one-year），工作表名使用
/// 空格分隔、单词首字母大写形式（One Year）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// 一年期信心指数
    OneYear,
    /// 崩盘信心指数
    Crash,
    /// 逢低买入信心指数
    BuyDips,
    /// 估值信心指数
    Valuation,
}

impl IndexType {
    /// 全部有效类别
    pub const ALL: [IndexType; 4] = [
        IndexType::OneYear,
        IndexType::Crash,
        IndexType::BuyDips,
        IndexType::Valuation,
    ];

    /// URL 路径段形式
    pub fn path_key(&self) -> &'static str {
        match self {
            IndexType::OneYear => "one-year",
            IndexType::Crash => "crash",
            IndexType::BuyDips => "buy-dips",
            IndexType::Valuation => "valuation",
        }
    }

    /// 对应的工作表名称
    pub fn sheet_name(&self) -> String {
        sheet_name_for(self.path_key())
    }

    /// 解析 URL 路径段，不在固定集合内的返回 None
    pub fn parse(segment: &str) -> Option<IndexType> {
        IndexType::ALL
            .iter()
            .copied()
            .find(|index_type| index_type.path_key() == segment)
    }
}

/// 路径段到工作表名称的映射规则
///
/// 连字符替换为空格，每个单词首字母大写：one-year -> One Year
pub fn sheet_name_for(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 单条信心指数观测记录
///
/// 序列化字段名与数据文件列名保持一致，序列化结果直接作为 API 响应元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRecord {
    /// 观测日期，序列化为 YYYY-MM-DD 字符串
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// 个人投资者信心值
    #[serde(rename = "US Individual")]
    pub individual_value: f64,
    /// 机构投资者信心值
    #[serde(rename = "US Institutional")]
    pub institutional_value: f64,
}
