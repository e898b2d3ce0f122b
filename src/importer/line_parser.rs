// ==========================================
// 批量线索导入 - 行解析器实现
// ==========================================
// 职责: 按字段顺序切分单行并分派到各清洗规则
// 规则:
//   - 仅处理 min(列数, 字段数) 范围内的列,空列跳过
//   - Unknown 列静默跳过
//   - 姓名全部为空时记录软错误 "No name found"（记录仍生成）
// ==========================================

use crate::config::{ImportConfig, ImportConfigReader};
use crate::domain::lead::ParsedRecord;
use crate::domain::types::{Delimiter, FieldTag};
use crate::importer::data_cleaner::DataCleaner as DataCleanerImpl;
use crate::importer::date_normalizer::is_valid_iso_date;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::lead_importer_trait::{DataCleaner, LineParser as LineParserTrait};

pub const NO_NAME_FOUND: &str = "No name found";

pub struct LineParser {
    data_cleaner: Box<dyn DataCleaner>,
    max_line_length: Option<usize>,
    strict_date_validation: bool,
}

impl LineParser {
    /// 创建行解析器
    ///
    /// # 参数
    /// - data_cleaner: 字段清洗器
    /// - config: 配置读取器（行长度上限 / 日期校验开关）
    pub fn new(data_cleaner: Box<dyn DataCleaner>, config: &dyn ImportConfigReader) -> Self {
        Self {
            data_cleaner,
            max_line_length: config.get_max_line_length(),
            strict_date_validation: config.is_strict_date_validation(),
        }
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(Box::new(DataCleanerImpl), &ImportConfig::default())
    }
}

impl LineParserTrait for LineParser {
    fn parse_line(
        &self,
        line: &str,
        line_number: usize,
        field_order: &[FieldTag],
        delimiter: Delimiter,
    ) -> ImportResult<ParsedRecord> {
        if let Some(max) = self.max_line_length {
            let length = line.chars().count();
            if length > max {
                return Err(ImportError::LineTooLong {
                    line: line_number,
                    length,
                    max,
                });
            }
        }

        let mut record = ParsedRecord {
            raw_line: line.to_string(),
            ..Default::default()
        };

        // zip 自动截断到 min(列数, 字段数)
        for (token, tag) in line.split(delimiter.as_char()).map(str::trim).zip(field_order) {
            if token.is_empty() {
                continue;
            }
            self.apply_field(&mut record, *tag, token);
        }

        if !record.has_name() {
            record.parse_errors.push(NO_NAME_FOUND.to_string());
        }

        Ok(record)
    }
}

impl LineParser {
    /// 将单列值写入记录
    fn apply_field(&self, record: &mut ParsedRecord, tag: FieldTag, value: &str) {
        match tag {
            FieldTag::Name => {
                let (first_name, last_name) = self.data_cleaner.split_name(value);
                record.first_name = first_name;
                record.last_name = last_name;
            }
            FieldTag::FirstName => record.first_name = value.to_string(),
            FieldTag::LastName => record.last_name = value.to_string(),
            FieldTag::Phone => record.phone = Some(self.data_cleaner.normalize_phone(value)),
            FieldTag::Dob => {
                let date = self.data_cleaner.normalize_date(value);
                if self.strict_date_validation && !is_valid_iso_date(&date) {
                    record
                        .parse_errors
                        .push(format!("Invalid date of birth: {}", value));
                }
                record.date_of_birth = Some(date);
            }
            FieldTag::Address => {
                let address = self.data_cleaner.parse_address(value);
                if address.street.is_some() {
                    record.street = address.street;
                }
                if address.street_number.is_some() {
                    record.street_number = address.street_number;
                }
                if address.plz.is_some() {
                    record.plz = address.plz;
                }
                if address.city.is_some() {
                    record.city = address.city;
                }
            }
            FieldTag::Street => record.street = Some(value.to_string()),
            FieldTag::StreetNumber => record.street_number = Some(value.to_string()),
            FieldTag::Plz => record.plz = Some(value.to_string()),
            FieldTag::City => record.city = Some(value.to_string()),
            FieldTag::Email => record.email = Some(self.data_cleaner.clean_email(value)),
            FieldTag::Unknown => {}
        }
    }
}
