//! 终端视图：把查询过程与结果输出到任意 `Write`

use std::io::Write;

use super::{AccountSummary, AccountView};

pub struct TerminalView<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            verbose: false,
        }
    }

    /// 输出加载提示
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // 终端输出失败没有可恢复的处理方式，只记录日志
    fn emit(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(text) {
            tracing::warn!(error = %e, "Failed to write terminal output");
        }
    }
}

impl<W: Write> AccountView for TerminalView<W> {
    fn set_loading(&mut self, loading: bool) {
        if self.verbose && loading {
            self.emit(format_args!("Inspecting address...\n"));
        }
    }

    fn show_error(&mut self, message: &str) {
        self.emit(format_args!("Error: {}\n", message));
    }

    fn hide_error(&mut self) {}

    fn hide_results(&mut self) {}

    fn show_results(&mut self, summary: &AccountSummary) {
        self.emit(format_args!(
            "Address:       {}\n\
             Status:        {}\n\
             Balance:       {}\n\
             Contract type: {}\n\
             Last activity: {}\n\
             Explorer:      {}\n",
            summary.address,
            summary.status_label,
            summary.balance,
            summary.contract_type,
            summary.last_activity,
            summary.explorer_url,
        ));
    }
}
