#![forbid(unsafe_code)]

//! Inspector error type.

/// Which of the two externally owned nodes an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Label,
    Overlay,
}

impl core::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Label => f.write_str("label"),
            Self::Overlay => f.write_str("overlay"),
        }
    }
}

/// Errors surfaced by construction and by attaching the pointer listener.
///
/// A pointer over nothing is not an error; see
/// [`MissPolicy`](crate::MissPolicy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// A node id did not resolve when the inspector was constructed.
    MissingNode { role: NodeRole, id: String },
    /// Options could not be parsed.
    Config(String),
    /// The host refused to attach the pointer-move listener.
    Subscribe(String),
}

impl core::fmt::Display for InspectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingNode { role, id } => {
                write!(f, "{role} node not found: no element with id \"{id}\"")
            }
            Self::Config(msg) => write!(f, "invalid inspector options: {msg}"),
            Self::Subscribe(msg) => write!(f, "failed to attach pointer listener: {msg}"),
        }
    }
}

impl std::error::Error for InspectError {}
