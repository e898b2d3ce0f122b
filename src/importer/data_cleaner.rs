// ==========================================
// 批量线索导入 - 数据清洗器实现
// ==========================================
// 职责: 汇总电话 / 日期 / 姓名 / 地址 / 邮箱清洗规则
// ==========================================

use crate::domain::lead::ParsedAddress;
use crate::importer::address_parser::parse_address;
use crate::importer::date_normalizer::normalize_date;
use crate::importer::lead_importer_trait::DataCleaner as DataCleanerTrait;
use crate::importer::name_splitter::split_name;
use crate::importer::phone_normalizer::normalize_phone;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_phone(&self, value: &str) -> String {
        normalize_phone(value)
    }

    fn normalize_date(&self, value: &str) -> String {
        normalize_date(value)
    }

    fn split_name(&self, full_name: &str) -> (String, String) {
        split_name(full_name)
    }

    fn parse_address(&self, address: &str) -> ParsedAddress {
        parse_address(address)
    }

    fn clean_email(&self, value: &str) -> String {
        value.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_email() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_email("  Anna.Meyer@Example.DE "), "anna.meyer@example.de");
    }

    #[test]
    fn test_delegates_to_normalizers() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_phone("030 1234567"), "+49301234567");
        assert_eq!(cleaner.normalize_date("03.05.1991"), "1991-05-03");
        assert_eq!(
            cleaner.split_name("Anna Meyer"),
            ("Anna".to_string(), "Meyer".to_string())
        );
        assert_eq!(
            cleaner.parse_address("57629 Stein-Wingert").city.as_deref(),
            Some("Stein-Wingert")
        );
    }
}
