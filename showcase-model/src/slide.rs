/// One hero slide. The deck is fixed at configuration time; only the
/// controller's active pointer moves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub cta_label: String,
    pub cta_target: String,
    pub background_image: String,
}

impl Slide {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        cta_label: impl Into<String>,
        cta_target: impl Into<String>,
        background_image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            cta_label: cta_label.into(),
            cta_target: cta_target.into(),
            background_image: background_image.into(),
        }
    }
}
