use std::path::PathBuf;

/// Events emitted while a workflow walks through its input files.
#[derive(Debug, Clone)]
pub enum Progress {
    PassStart { name: &'static str, total_files: u64 },
    FileDone { path: PathBuf },
    FileSkipped { path: PathBuf, reason: String },
    PassFinish { processed: usize },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
