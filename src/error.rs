//! Errors raised while setting up the window, GPU or export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointnoiseError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a suitable GPU adapter")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface does not support any texture format")]
    NoSurfaceFormat,

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot export an empty frame")]
    EmptyFrame,
}
