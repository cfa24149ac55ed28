//! Localized message catalogue for human output.

use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Output language for human-readable messages.
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            other => Err(format!("unknown locale '{}' (expected en|zh)", other)),
        }
    }
}

/// Status of a report line; selects marker and headline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Unreadable,
}

/// Message set for one locale.
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Leading marker: an icon when `icons` is set, a text label otherwise.
    pub fn marker(&self, status: Status, icons: bool) -> &'static str {
        if icons {
            return match status {
                Status::Pass => "✅",
                Status::Fail | Status::Unreadable => "❌",
            };
        }
        match (self.locale, status) {
            (Locale::En, Status::Pass) => "PASS:",
            (Locale::En, Status::Fail) => "FAIL:",
            (Locale::En, Status::Unreadable) => "ERROR:",
            (Locale::Zh, Status::Pass) => "通过:",
            (Locale::Zh, Status::Fail) => "失败:",
            (Locale::Zh, Status::Unreadable) => "错误:",
        }
    }

    /// Text following the path on the status line.
    pub fn headline(&self, status: Status) -> &'static str {
        match (self.locale, status) {
            (Locale::En, Status::Pass) => "YAML syntax is valid",
            (Locale::En, Status::Fail) => "YAML syntax error:",
            (Locale::En, Status::Unreadable) => "could not be read:",
            (Locale::Zh, Status::Pass) => "YAML语法验证成功",
            (Locale::Zh, Status::Fail) => "YAML语法验证失败:",
            (Locale::Zh, Status::Unreadable) => "文件读取失败:",
        }
    }

    pub fn position(&self, line: u64, column: u64) -> String {
        match self.locale {
            Locale::En => format!("Error position: line {}, column {}", line, column),
            Locale::Zh => format!("错误位置: 行 {}, 列 {}", line, column),
        }
    }

    pub fn details(&self, message: &str) -> String {
        match self.locale {
            Locale::En => format!("Details: {}", message),
            Locale::Zh => format!("错误详情: {}", message),
        }
    }

    pub fn summary(&self, valid: usize, failed: usize, files: usize) -> String {
        match self.locale {
            Locale::En => format!(
                "Summary: {} valid, {} failed, {} files",
                valid, failed, files
            ),
            Locale::Zh => format!("汇总: 通过 {}, 失败 {}, 共 {} 个文件", valid, failed, files),
        }
    }
}
