use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, error, warn};

use crate::controllers::interactive::data::comparison_request::ComparisonRequest;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::frame_renderer::FrameRendererPort;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::evaluate_operators::evaluate_operators::{
    EvaluateError, evaluate_operators_cancelable,
};
use crate::core::data::alpha::Alpha;
use crate::core::data::curve::OperatorCurves;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::sample_grid::SampleGrid;

#[derive(Debug, Clone, Copy)]
struct Job {
    generation: u64,
    request: ComparisonRequest,
}

enum JobFailure {
    Superseded,
    Failed(String),
}

/// State shared between the UI-facing handle and the render thread.
struct RenderWorker {
    submitted: AtomicU64,
    completed: AtomicU64,
    stopping: AtomicBool,
    mailbox: Mutex<Option<Job>>,
    signal: Condvar,
    grid: Arc<SampleGrid>,
    renderer: Arc<dyn FrameRendererPort>,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl RenderWorker {
    fn run(&self) {
        while let Some(job) = self.next_job() {
            self.process(job);
        }
    }

    /// Blocks until a job is queued. `None` once shutdown has been requested.
    fn next_job(&self) -> Option<Job> {
        let mut mailbox = self.mailbox.lock().unwrap_or_else(PoisonError::into_inner);

        loop {
            if self.stopping.load(Ordering::Acquire) {
                return None;
            }

            if let Some(job) = mailbox.take() {
                return Some(job);
            }

            mailbox = self
                .signal
                .wait(mailbox)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.stopping.load(Ordering::Relaxed)
            || generation != self.submitted.load(Ordering::Relaxed)
    }

    fn process(&self, job: Job) {
        let superseded = || self.is_stale(job.generation);
        let started = Instant::now();

        // A panicking chart backend must not take the worker down with it.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.compute(&job.request, &superseded)
        }))
        .unwrap_or_else(|payload| {
            Err(JobFailure::Failed(format!(
                "chart rendering panicked: {}",
                panic_message(payload.as_ref())
            )))
        });

        let render_duration = started.elapsed();

        let event = match result {
            Err(JobFailure::Superseded) => return,
            Ok((curves, pixel_buffer)) => {
                debug!(generation = job.generation, ?render_duration, "frame rendered");
                RenderEvent::Frame(FrameData {
                    generation: job.generation,
                    curves,
                    pixel_buffer,
                    render_duration,
                })
            }
            Err(JobFailure::Failed(message)) => {
                warn!(generation = job.generation, %message, "render failed");
                RenderEvent::Error(RenderError {
                    generation: job.generation,
                    message,
                })
            }
        };

        if self.is_stale(job.generation) {
            return;
        }

        self.completed.store(job.generation, Ordering::Release);
        self.presenter_port.present(event);
    }

    fn compute<C: CancelToken>(
        &self,
        request: &ComparisonRequest,
        cancel: &C,
    ) -> Result<(OperatorCurves, PixelBuffer), JobFailure> {
        let alpha =
            Alpha::new(request.alpha).map_err(|e| JobFailure::Failed(e.to_string()))?;

        let curves = evaluate_operators_cancelable(&self.grid, alpha, cancel).map_err(|e| {
            match e {
                EvaluateError::Cancelled(_) => JobFailure::Superseded,
                EvaluateError::Operator(err) => JobFailure::Failed(err.to_string()),
            }
        })?;

        if cancel.is_cancelled() {
            return Err(JobFailure::Superseded);
        }

        let frame = self
            .renderer
            .render(&curves, request.size)
            .map_err(|e| JobFailure::Failed(e.to_string()))?;

        Ok((curves, frame))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause")
}

/// Handle to the background chart renderer.
///
/// Only the newest request is rendered: submitting cancels work in flight,
/// and a result is published only if no newer request arrived meanwhile.
pub struct InteractiveController {
    worker: Arc<RenderWorker>,
    thread: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        grid: Arc<SampleGrid>,
        renderer: Arc<dyn FrameRendererPort>,
    ) -> Self {
        let worker = Arc::new(RenderWorker {
            submitted: AtomicU64::new(0),
            completed: AtomicU64::new(0),
            stopping: AtomicBool::new(false),
            mailbox: Mutex::new(None),
            signal: Condvar::new(),
            grid,
            renderer,
            presenter_port,
        });

        let thread = {
            let worker = Arc::clone(&worker);
            thread::spawn(move || worker.run())
        };

        Self {
            worker,
            thread: Some(thread),
        }
    }

    /// Queues `request` and returns its generation.
    pub fn submit_request(&self, request: ComparisonRequest) -> u64 {
        let generation = self.worker.submitted.fetch_add(1, Ordering::SeqCst) + 1;

        *self
            .worker
            .mailbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Job {
            generation,
            request,
        });
        self.worker.signal.notify_one();

        generation
    }

    /// Generation of the newest request whose frame or error was published.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.worker.completed.load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        self.worker.stopping.store(true, Ordering::Release);
        self.worker.signal.notify_one();

        let Some(handle) = self.thread.take() else {
            return;
        };

        if let Err(payload) = handle.join() {
            error!(
                cause = panic_message(payload.as_ref()),
                "render worker terminated by panic"
            );
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
