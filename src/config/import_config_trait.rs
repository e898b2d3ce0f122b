// ==========================================
// 批量线索导入 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入模块所需的配置读取接口
// 实现者: ImportConfig
pub trait ImportConfigReader: Send + Sync {
    /// 获取分隔符检测采样行数
    ///
    /// # 默认值
    /// - 10
    fn get_sample_line_count(&self) -> usize;

    /// 获取预览默认行数
    ///
    /// # 默认值
    /// - 5
    ///
    /// # 用途
    /// - leads 与 errors 各自截断到该条数
    fn get_default_preview_rows(&self) -> usize;

    /// 获取单行最大字符数
    ///
    /// # 默认值
    /// - None（不限制行长度）
    ///
    /// # 用途
    /// - 设置后超长行记为行错误,不影响其他行
    fn get_max_line_length(&self) -> Option<usize>;

    /// 是否启用出生日期日历校验
    ///
    /// # 默认值
    /// - false（仅做格式改写,不校验日期真实性）
    fn is_strict_date_validation(&self) -> bool;
}
