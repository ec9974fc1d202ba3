use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no view with id {0} in the current frame")]
    UnknownTarget(u64),
    #[error("view {0} does not accept clicks")]
    NotClickable(u64),
    #[error("unknown command '{0}' (try: click <id>, redraw, quit)")]
    UnknownCommand(String),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
