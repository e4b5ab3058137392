//! Log-backed storage sink adapter.
//!
//! Placeholder [`UploadSink`] implementation: accepted jobs are logged and
//! reported successful on the next result poll, one loop later, mimicking
//! the asynchronous completion of a real storage client. The production
//! bucket client replaces this behind the same trait.

use std::collections::VecDeque;

use crate::app::ports::UploadSink;
use crate::error::UploadError;
use crate::pipeline::UploadJob;

pub struct LogUploadSink {
    root: String,
    in_flight: VecDeque<String>,
}

impl LogUploadSink {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_owned(),
            in_flight: VecDeque::new(),
        }
    }
}

impl UploadSink for LogUploadSink {
    fn upload(&mut self, job: UploadJob) {
        log::info!(
            "Uploading {} bytes to {}/{}",
            job.bytes.len(),
            self.root,
            job.object_name
        );
        self.in_flight.push_back(job.object_name.as_str().to_owned());
    }

    fn poll_result(&mut self) -> Option<(String, Result<(), UploadError>)> {
        self.in_flight.pop_front().map(|object| (object, Ok(())))
    }
}
