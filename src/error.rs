// Every variant states *where* things went wrong.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}
