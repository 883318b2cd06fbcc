/// Notification emitted by the carousel every time the active slide moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideChange {
    pub current: usize,
    pub total: usize,
}
