/// Events emitted while structures are searched.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    BatchStart { total_structures: u64 },
    BatchFinish,

    /// A structure has been indexed and holds `count` occurrences of the target group.
    TargetsFound { count: u64 },
    TargetSearched,
    StructureFinish { records: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback. Without one, events are dropped.
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
