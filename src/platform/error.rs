//! Fatal platform and GPU errors
//!
//! Nothing in the scene itself can fail; everything here stops the program.

/// Errors raised while bringing up or running the window and GPU.
#[derive(Debug)]
pub enum AppError {
    /// Failed to create the event loop (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),
    /// Event loop terminated abnormally.
    EventLoopExecution(winit::error::EventLoopError),
    /// Window could not be opened.
    WindowCreation(winit::error::OsError),
    /// Window could not back a GPU surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    NoAdapter(wgpu::RequestAdapterError),
    /// Adapter refused the device request.
    DeviceRequest(wgpu::RequestDeviceError),
    /// Surface reported out of memory while rendering.
    OutOfMemory,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::SurfaceCreation(e) => write!(f, "Surface creation failed: {}", e),
            Self::NoAdapter(e) => write!(f, "No suitable GPU adapter: {}", e),
            Self::DeviceRequest(e) => write!(f, "GPU device request failed: {}", e),
            Self::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
            Self::SurfaceCreation(e) => Some(e),
            Self::NoAdapter(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::OutOfMemory => None,
        }
    }
}
