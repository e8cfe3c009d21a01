use std::collections::VecDeque;

/// A blocking message the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub lines: Vec<String>,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn headline(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// FIFO of pending notices; only the front one is on screen
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) {
        log::info!("Notice: {}", notice.headline());
        self.pending.push_back(notice);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    /// Dismiss the notice on screen
    pub fn acknowledge(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
