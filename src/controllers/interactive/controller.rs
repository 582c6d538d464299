use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::frame_request::FrameRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::evaluate_frame::evaluate_frame_parallel::{
    EvaluateFrameError, evaluate_frame_parallel_cancelable,
};
use crate::core::actions::shade_frame::shade_frame::{ShadeFrameError, shade_frame_cancelable};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape::EscapeSample;
use crate::core::fractals::julia::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::MandelbrotAlgorithm;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<FrameRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn RenderPresenterPort>,
}

/// Owns the render worker thread.
///
/// Submissions are latest-wins: the worker always takes the newest request,
/// and a request that was superseded while rendering is cancelled through
/// the generation counter and silently discarded.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn RenderPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            log::debug!("render worker started");
            Self::worker_loop(&worker_shared);
            log::debug!("render worker stopped");
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: Arc<FrameRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(pixel_buffer) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderOutcome::Cancelled) => {
                    continue;
                }
                Err(RenderOutcome::Error(message)) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    log::warn!("render generation {} failed: {}", job_generation, message);

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message,
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }

    fn render_request<C: CancelToken>(
        request: &FrameRequest,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderOutcome> {
        let params = &request.params;

        let samples: Vec<EscapeSample> = if params.julia {
            let algorithm = JuliaAlgorithm::new(
                request.pixel_rect,
                params.plane,
                params.c,
                params.max_iteration_count,
            )
            .map_err(|e| RenderOutcome::Error(e.to_string()))?;

            evaluate_frame_parallel_cancelable(request.pixel_rect, &algorithm, cancel)
                .map_err(RenderOutcome::from_evaluate_error)?
        } else {
            let algorithm = MandelbrotAlgorithm::new(
                request.pixel_rect,
                params.plane,
                params.max_iteration_count,
            )
            .map_err(|e| RenderOutcome::Error(e.to_string()))?;

            evaluate_frame_parallel_cancelable(request.pixel_rect, &algorithm, cancel)
                .map_err(RenderOutcome::from_evaluate_error)?
        };

        if cancel.is_cancelled() {
            return Err(RenderOutcome::Cancelled);
        }

        let colour_map = params.colour_map();
        shade_frame_cancelable(samples, &colour_map, request.pixel_rect, cancel).map_err(|e| {
            match e {
                ShadeFrameError::Cancelled(_) => RenderOutcome::Cancelled,
                other => RenderOutcome::Error(other.to_string()),
            }
        })
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl RenderOutcome {
    fn from_evaluate_error<E: std::fmt::Display>(error: EvaluateFrameError<E>) -> Self {
        match error {
            EvaluateFrameError::Cancelled(_) => RenderOutcome::Cancelled,
            EvaluateFrameError::Algorithm(err) => RenderOutcome::Error(err.to_string()),
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
